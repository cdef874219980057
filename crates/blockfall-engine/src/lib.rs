pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding after move or rotation")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("piece colliding after move or rotation")]
    PieceCollision(PieceCollisionError),
    #[display("no piece is falling")]
    NotFalling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardSizeError {
    #[display("board width must be positive")]
    ZeroWidth,
    #[display("board height must be positive")]
    ZeroHeight,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelTableError {
    #[display("level table must contain at least one level")]
    Empty,
    #[display("first level must start at score 0, got {score}")]
    FirstThresholdNotZero { score: u64 },
    #[display("level thresholds must strictly increase ({previous} then {next})")]
    ThresholdNotIncreasing { previous: u64, next: u64 },
    #[display("level {level} has a zero tick interval")]
    ZeroTickInterval { level: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("invalid board size: {_0}")]
    Board(BoardSizeError),
    #[display("invalid level table: {_0}")]
    Levels(LevelTableError),
    #[display("timing field `{field}` must be positive")]
    ZeroTiming { field: &'static str },
}

impl From<BoardSizeError> for ConfigError {
    fn from(err: BoardSizeError) -> Self {
        Self::Board(err)
    }
}

impl From<LevelTableError> for ConfigError {
    fn from(err: LevelTableError) -> Self {
        Self::Levels(err)
    }
}
