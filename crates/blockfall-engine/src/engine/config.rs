use serde::{Deserialize, Serialize};

use crate::{BoardSize, ConfigError, SequenceRng};

use super::level::{DEFAULT_LEVELS, Level};

/// How the orchestrator decides when gravity fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityPacing {
    /// Gravity every `gravity_every` steps regardless of level.
    #[default]
    Fixed,
    /// `gravity_every` scaled by the current level's tick interval relative to
    /// the first level's.
    LevelScaled,
}

/// Step cadence of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoopConfig {
    /// Redraw every N steps.
    pub render_every: u32,
    /// Gravity every N steps (at level 1 when scaled).
    pub gravity_every: u32,
    pub pacing: GravityPacing,
    /// Duration of one step for clocks that sleep.
    pub step_millis: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            render_every: 50,
            gravity_every: 350,
            pacing: GravityPacing::Fixed,
            step_millis: 2,
        }
    }
}

impl LoopConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render_every == 0 {
            return Err(ConfigError::ZeroTiming {
                field: "render_every",
            });
        }
        if self.gravity_every == 0 {
            return Err(ConfigError::ZeroTiming {
                field: "gravity_every",
            });
        }
        Ok(())
    }
}

/// Everything needed to start a session.
///
/// Every field has a default, so a JSON config only lists what it overrides:
///
/// ```
/// use blockfall_engine::{BoardSize, GameConfig};
///
/// let config: GameConfig = serde_json::from_str(r#"{ "board": { "width": 8, "height": 16 } }"#).unwrap();
/// assert_eq!(config.board, BoardSize::new(8, 16));
/// assert_eq!(config.seed, 12345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board: BoardSize,
    pub seed: u32,
    pub levels: Vec<Level>,
    pub timing: LoopConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardSize::default(),
            seed: SequenceRng::DEFAULT_SEED,
            levels: DEFAULT_LEVELS.to_vec(),
            timing: LoopConfig::default(),
        }
    }
}
