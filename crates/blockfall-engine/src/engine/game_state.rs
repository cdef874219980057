use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::{
    ConfigError, MoveError, PieceCollisionError,
    core::{
        board::Board,
        rng::SequenceRng,
        shape::{Cell, MAX_SHAPE_SIZE, SHAPES, Shape},
    },
};

use super::{
    command::Command,
    config::GameConfig,
    level::{LevelInfo, LevelTable},
};

/// Points for the first row cleared in one line check; each further row doubles.
const LINE_CLEAR_BASE_POINTS: u64 = 100;

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// No piece is falling yet, or the last one just locked.
    Spawning,
    Falling,
    /// A new piece collided on spawn. Terminal.
    GameOver,
}

/// Outcome of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GravityOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece could not move, was locked, and the next piece spawned.
    Locked,
    /// Nothing was falling.
    Idle,
}

/// A catalog shape anchored at a board position.
///
/// `(x, y)` is the top-left corner of the shape's bounding box and may lie
/// outside the board (rotation can lift it above row 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    shape: Shape,
    x: i32,
    y: i32,
}

impl FallingPiece {
    #[must_use]
    pub const fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub const fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape,
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the piece rotated a quarter clockwise, re-anchored so the
    /// rotation pivots about the bounding box center.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let shape = self.shape.rotated();
        let (old_width, old_height) = self.shape.signed_size();
        let (new_width, new_height) = shape.signed_size();
        Self {
            shape,
            x: self.x - (new_width - old_width) / 2,
            y: self.y - (new_height - old_height) / 2,
        }
    }

    /// Absolute board coordinates and symbols of the occupied sub-cells.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn board_cells(&self) -> ArrayVec<(i32, i32, char), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        self.shape
            .occupied_cells()
            .map(|(sx, sy, symbol)| (self.x + sx as i32, self.y + sy as i32, symbol))
            .collect()
    }

    /// Returns the piece's cell covering board position `(x, y)`, if any.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        let (Ok(sx), Ok(sy)) = (usize::try_from(x - self.x), usize::try_from(y - self.y)) else {
            return Cell::Empty;
        };
        if sx >= self.shape.width() || sy >= self.shape.height() {
            return Cell::Empty;
        }
        self.shape.cell(sx, sy)
    }
}

/// The complete state of a game session.
///
/// Owns the board, the sequence generator, the falling piece, and the score
/// and level counters. All operations are single synchronous steps; a move or
/// rotation that would collide leaves the state exactly as it was.
///
/// # Example
///
/// ```
/// use blockfall_engine::{GameConfig, GameState, SessionState};
///
/// let mut state = GameState::new(&GameConfig::default()).unwrap();
/// state.spawn();
/// assert_eq!(state.session_state(), SessionState::Falling);
///
/// _ = state.try_move(-1);
/// _ = state.try_rotate();
/// state.gravity_tick();
/// state.check_lines();
/// state.update_level();
/// assert_eq!(state.level(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SequenceRng,
    levels: LevelTable,
    falling_piece: Option<FallingPiece>,
    session_state: SessionState,
    score: u64,
    level: usize,
    cleared_lines: u64,
    locked_pieces: u64,
}

impl GameState {
    /// Creates a session with an empty board. No piece is falling until
    /// [`Self::spawn`] is called.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = Board::new(config.board)?;
        let levels = LevelTable::new(config.levels.clone())?;
        let level = levels.level_for(0).level;
        Ok(Self {
            board,
            rng: SequenceRng::new(config.seed),
            levels,
            falling_piece: None,
            session_state: SessionState::Spawning,
            score: 0,
            level,
            cleared_lines: 0,
            locked_pieces: 0,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<&FallingPiece> {
        self.falling_piece.as_ref()
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session_state.is_game_over()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Level as of the last [`Self::update_level`] call, starting at 1.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Tick interval of the current level.
    #[must_use]
    pub fn tick_interval(&self) -> u32 {
        self.levels.levels()[self.level - 1].tick_interval
    }

    #[must_use]
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    #[must_use]
    pub fn cleared_lines(&self) -> u64 {
        self.cleared_lines
    }

    #[must_use]
    pub fn locked_pieces(&self) -> u64 {
        self.locked_pieces
    }

    /// What a renderer should show at `(x, y)`: the falling piece if it covers
    /// the cell, the board otherwise.
    #[must_use]
    pub fn visible_cell(&self, x: usize, y: usize) -> Cell {
        if let Some(piece) = &self.falling_piece
            && let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y))
            && let cell @ Cell::Filled(_) = piece.cell_at(px, py)
        {
            return cell;
        }
        self.board.cell(x, y)
    }

    /// Returns whether `shape` anchored at `(x, y)` collides with the walls,
    /// the floor, or locked cells.
    ///
    /// Every column of the bounding box must lie within the board width. Only
    /// occupied sub-cells are tested against the floor and the locked cells;
    /// rows above the top of the board are free.
    #[must_use]
    pub fn hit_test(&self, shape: &Shape, x: i32, y: i32) -> bool {
        for (sx, bx) in (x..).take(shape.width()).enumerate() {
            let Ok(col) = usize::try_from(bx) else {
                return true;
            };
            if col >= self.board.width() {
                return true;
            }
            for (sy, by) in (y..).take(shape.height()).enumerate() {
                if shape.cell(sx, sy).is_empty() {
                    continue;
                }
                let Ok(row) = usize::try_from(by) else {
                    continue;
                };
                if row >= self.board.height() || self.board.is_occupied(col, row) {
                    return true;
                }
            }
        }
        false
    }

    fn collides(&self, piece: &FallingPiece) -> bool {
        self.hit_test(&piece.shape, piece.x, piece.y)
    }

    /// Draws the next shape and places it at the top center of the board.
    ///
    /// If it collides right away the session is over; the board is untouched.
    pub fn spawn(&mut self) {
        if self.is_game_over() {
            return;
        }
        let shape_id = self.rng.next_index(SHAPES.len());
        let shape = SHAPES[shape_id];
        let (shape_width, _) = shape.signed_size();
        let x = i32::from(self.board.size().width) / 2 - shape_width / 2;
        let piece = FallingPiece::new(shape, x, 0);
        self.falling_piece = Some(piece);

        if self.collides(&piece) {
            self.session_state = SessionState::GameOver;
            info!(
                "game over: shape {shape_id} blocked at spawn (score {}, {} lines)",
                self.score, self.cleared_lines
            );
            return;
        }
        self.session_state = SessionState::Falling;
        debug!("spawned shape {shape_id} at ({x}, 0)");
    }

    fn current_piece(&self) -> Result<FallingPiece, MoveError> {
        if !self.session_state.is_falling() {
            return Err(MoveError::NotFalling);
        }
        self.falling_piece.ok_or(MoveError::NotFalling)
    }

    fn set_falling_piece(&mut self, piece: FallingPiece) -> Result<(), MoveError> {
        if self.collides(&piece) {
            trace!("rejected placement at {:?}", piece.position());
            return Err(MoveError::PieceCollision(PieceCollisionError));
        }
        self.falling_piece = Some(piece);
        Ok(())
    }

    /// Shifts the falling piece horizontally by `dx` columns.
    pub fn try_move(&mut self, dx: i32) -> Result<(), MoveError> {
        let piece = self.current_piece()?;
        self.set_falling_piece(piece.shifted(dx, 0))
    }

    pub fn try_move_left(&mut self) -> Result<(), MoveError> {
        self.try_move(-1)
    }

    pub fn try_move_right(&mut self) -> Result<(), MoveError> {
        self.try_move(1)
    }

    /// Rotates the falling piece a quarter clockwise.
    ///
    /// On collision both shape and anchor stay as they were.
    pub fn try_rotate(&mut self) -> Result<(), MoveError> {
        let piece = self.current_piece()?;
        self.set_falling_piece(piece.rotated())
    }

    /// Writes the falling piece's symbols into the board.
    ///
    /// Must only be called while the piece does not collide. Cells above the
    /// top row have nowhere to go and are dropped.
    pub fn lock(&mut self) {
        let Ok(piece) = self.current_piece() else {
            return;
        };
        debug_assert!(!self.collides(&piece), "locking a colliding piece");
        for (bx, by, symbol) in piece.board_cells() {
            if let (Ok(col), Ok(row)) = (usize::try_from(bx), usize::try_from(by)) {
                self.board.set(col, row, Cell::Filled(symbol));
            }
        }
        self.locked_pieces += 1;
        self.session_state = SessionState::Spawning;
        debug!("locked piece at {:?}", piece.position());
    }

    /// Moves the falling piece down one row, or locks it and spawns the next
    /// one if it cannot move.
    pub fn gravity_tick(&mut self) -> GravityOutcome {
        let Ok(piece) = self.current_piece() else {
            return GravityOutcome::Idle;
        };
        if self.set_falling_piece(piece.shifted(0, 1)).is_ok() {
            return GravityOutcome::Fell;
        }
        self.lock();
        self.spawn();
        GravityOutcome::Locked
    }

    /// Clears every full row, bottom to top, and returns how many were cleared.
    ///
    /// The first clear scores 100 and each further clear in the same call
    /// doubles the award (100, 300, 700, 1500 in total for 1 to 4 rows). After
    /// a clear the same row index is examined again, so rows that drop into a
    /// cleared slot are picked up in the same call.
    pub fn check_lines(&mut self) -> usize {
        let mut points = LINE_CLEAR_BASE_POINTS;
        let mut cleared = 0;
        let mut y = self.board.height();
        while y > 0 {
            let row = y - 1;
            if self.board.is_row_full(row) {
                self.score = self.score.saturating_add(points);
                points = points.saturating_mul(2);
                self.board.collapse_row(row);
                cleared += 1;
                continue;
            }
            y = row;
        }
        if cleared > 0 {
            self.cleared_lines += cleared as u64;
            debug!("cleared {cleared} line(s), score {}", self.score);
        }
        cleared
    }

    /// Recomputes the level from the score and returns its table entry.
    pub fn update_level(&mut self) -> LevelInfo {
        let info = self.levels.level_for(self.score);
        if info.level != self.level {
            debug!("level {} -> {}", self.level, info.level);
            self.level = info.level;
        }
        info
    }

    /// Applies a piece command. Rejected moves are silently dropped; host
    /// controls are ignored here.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => _ = self.try_move_left(),
            Command::MoveRight => _ = self.try_move_right(),
            Command::Rotate => _ = self.try_rotate(),
            Command::SoftDrop => _ = self.gravity_tick(),
            Command::TogglePause | Command::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BoardSize;

    use super::*;

    const BAR: usize = 2;

    fn state(width: u16, height: u16) -> GameState {
        let config = GameConfig {
            board: BoardSize::new(width, height),
            ..GameConfig::default()
        };
        GameState::new(&config).unwrap()
    }

    fn spawned(width: u16, height: u16) -> GameState {
        let mut state = state(width, height);
        state.spawn();
        state
    }

    fn fill_row_except(state: &mut GameState, y: usize, gaps: &[usize]) {
        for x in 0..state.board.width() {
            if !gaps.contains(&x) {
                state.board.set(x, y, Cell::Filled('#'));
            }
        }
    }

    fn piece(state: &GameState) -> FallingPiece {
        *state.falling_piece().unwrap()
    }

    #[test]
    fn test_spawn_with_default_seed() {
        let state = spawned(10, 20);
        let piece = piece(&state);
        assert_eq!(piece.shape(), &SHAPES[BAR]);
        assert_eq!(piece.position(), (10 / 2 - 4 / 2, 0));
        assert_eq!(state.session_state(), SessionState::Falling);
    }

    #[test]
    fn test_spawn_sequence_follows_generator() {
        let mut state = spawned(10, 20);
        let mut rng = SequenceRng::default();
        assert_eq!(piece(&state).shape(), &SHAPES[rng.next_index(6)]);
        for _ in 0..20 {
            state.falling_piece = None;
            state.session_state = SessionState::Spawning;
            state.spawn();
            assert_eq!(piece(&state).shape(), &SHAPES[rng.next_index(6)]);
        }
    }

    #[test]
    fn test_spawn_game_over_on_narrow_board() {
        let mut state = state(1, 20);
        state.spawn();
        assert!(state.is_game_over());
        assert_eq!(state.board().filled_count(), 0);

        // Terminal: nothing moves any more.
        assert_eq!(state.gravity_tick(), GravityOutcome::Idle);
        assert_eq!(state.try_rotate(), Err(MoveError::NotFalling));
        assert!(state.is_game_over());
    }

    #[test]
    fn test_spawn_game_over_when_top_blocked() {
        let mut state = state(10, 20);
        state.board.set(4, 0, Cell::Filled('#'));
        state.spawn();
        assert!(state.is_game_over());
        assert_eq!(state.board().filled_count(), 1);
    }

    #[test]
    fn test_hit_test_walls_and_floor() {
        let state = state(10, 20);
        let square = SHAPES[0];
        assert!(!state.hit_test(&square, 0, 0));
        assert!(!state.hit_test(&square, 8, 18));
        assert!(state.hit_test(&square, -1, 0));
        assert!(state.hit_test(&square, 9, 0));
        assert!(state.hit_test(&square, 0, 19));
    }

    #[test]
    fn test_hit_test_above_top_is_free() {
        let state = state(10, 20);
        assert!(!state.hit_test(&SHAPES[0], 3, -5));
        assert!(state.hit_test(&SHAPES[0], -1, -5));
    }

    #[test]
    fn test_hit_test_only_occupied_cells_touch_board() {
        let mut state = state(10, 20);
        // T shape " X " / "XXX": the empty top corners may overlap locked cells.
        state.board.set(0, 0, Cell::Filled('#'));
        state.board.set(2, 0, Cell::Filled('#'));
        assert!(!state.hit_test(&SHAPES[1], 0, 0));
        state.board.set(1, 1, Cell::Filled('#'));
        assert!(state.hit_test(&SHAPES[1], 0, 0));
    }

    #[test]
    fn test_hit_test_matches_brute_force() {
        let mut state = state(6, 8);
        state.board.set(2, 5, Cell::Filled('#'));
        state.board.set(4, 7, Cell::Filled('#'));
        for shape in SHAPES.iter().flat_map(|s| [*s, s.rotated()]) {
            for x in -3..8 {
                for y in -3..10 {
                    let expected = FallingPiece::new(shape, x, y).board_cells().iter().any(
                        |&(bx, by, _)| {
                            !(0..6).contains(&bx)
                                || by >= 8
                                || (by >= 0
                                    && state.board.is_occupied(
                                        usize::try_from(bx).unwrap(),
                                        usize::try_from(by).unwrap(),
                                    ))
                        },
                    );
                    assert_eq!(
                        state.hit_test(&shape, x, y),
                        expected,
                        "{shape:?} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_move_within_walls() {
        let mut state = spawned(10, 20);
        for _ in 0..3 {
            assert_eq!(state.try_move_left(), Ok(()));
        }
        assert_eq!(piece(&state).position(), (0, 0));
        assert_eq!(
            state.try_move_left(),
            Err(MoveError::PieceCollision(PieceCollisionError))
        );
        assert_eq!(piece(&state).position(), (0, 0));

        for _ in 0..6 {
            assert_eq!(state.try_move_right(), Ok(()));
        }
        assert!(state.try_move_right().is_err());
        assert_eq!(piece(&state).position(), (6, 0));
    }

    #[test]
    fn test_move_blocked_by_locked_cell() {
        let mut state = spawned(10, 20);
        state.board.set(7, 0, Cell::Filled('#'));
        assert!(state.try_move_right().is_err());
        assert_eq!(piece(&state).position(), (3, 0));
    }

    #[test]
    fn test_rotate_recenters_bar() {
        let mut state = spawned(10, 20);
        assert_eq!(state.try_rotate(), Ok(()));
        let piece = piece(&state);
        assert_eq!((piece.shape().width(), piece.shape().height()), (1, 4));
        // x -= (1 - 4) / 2 == -1, y -= (4 - 1) / 2 == 1
        assert_eq!(piece.position(), (4, -1));
    }

    #[test]
    fn test_rotate_rolls_back_at_wall() {
        let mut state = spawned(10, 20);
        state.try_rotate().unwrap();
        while state.try_move_left().is_ok() {}
        let before = piece(&state);
        assert_eq!(before.position(), (0, -1));

        // Back to horizontal would need x == -1.
        assert_eq!(
            state.try_rotate(),
            Err(MoveError::PieceCollision(PieceCollisionError))
        );
        assert_eq!(piece(&state), before);
    }

    #[test]
    fn test_rotate_rolls_back_on_locked_cells() {
        let mut state = spawned(10, 20);
        state.board.set(4, 1, Cell::Filled('#'));
        let before = piece(&state);
        assert!(state.try_rotate().is_err());
        assert_eq!(piece(&state), before);
    }

    #[test]
    fn test_gravity_falls_then_locks() {
        let mut state = spawned(10, 20);
        for y in 1..20 {
            assert_eq!(state.gravity_tick(), GravityOutcome::Fell);
            assert_eq!(piece(&state).position(), (3, y));
        }
        assert_eq!(state.gravity_tick(), GravityOutcome::Locked);
        assert_eq!(state.locked_pieces(), 1);
        for x in 3..7 {
            assert_eq!(state.board().cell(x, 19), Cell::Filled('@'));
        }
        assert_eq!(state.board().filled_count(), 4);
        // The next shape (index 1, the T) is already falling.
        assert_eq!(piece(&state).shape(), &SHAPES[1]);
        assert_eq!(piece(&state).position(), (4, 0));
        assert!(state.session_state().is_falling());
    }

    #[test]
    fn test_lock_drops_cells_above_top() {
        let mut state = spawned(10, 20);
        state.try_rotate().unwrap();
        assert_eq!(piece(&state).position(), (4, -1));
        state.lock();
        assert_eq!(state.board().filled_count(), 3);
        assert!(state.session_state().is_spawning());
    }

    #[test]
    fn test_landing_on_almost_full_row_scores_on_next_check() {
        let mut state = spawned(10, 20);
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
        while state.gravity_tick() != GravityOutcome::Locked {}
        assert!(state.board().is_row_full(19));
        assert_eq!(state.score(), 0);

        assert_eq!(state.check_lines(), 1);
        assert_eq!(state.score(), 100);
        assert_eq!(state.cleared_lines(), 1);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_check_lines_scores_doubling() {
        for (rows, expected) in [(1, 100), (2, 300), (3, 700), (4, 1500)] {
            let mut state = state(5, 8);
            for y in (8 - rows)..8 {
                fill_row_except(&mut state, y, &[]);
            }
            assert_eq!(state.check_lines(), rows, "{rows} rows");
            assert_eq!(state.score(), expected, "{rows} rows");
            assert_eq!(state.board().filled_count(), 0);
        }
    }

    #[test]
    fn test_check_lines_non_adjacent_rows() {
        let mut state = state(4, 6);
        fill_row_except(&mut state, 5, &[]);
        fill_row_except(&mut state, 4, &[0]);
        fill_row_except(&mut state, 3, &[]);
        state.board.set(2, 0, Cell::Filled('a'));

        assert_eq!(state.check_lines(), 2);
        assert_eq!(state.score(), 300);
        // The partial row ends at the bottom, the marker two rows lower.
        assert_eq!(state.board().row(5)[0], Cell::Empty);
        assert!(state.board().row(5)[1..].iter().all(|c| c.is_filled()));
        assert_eq!(state.board().cell(2, 2), Cell::Filled('a'));
        assert!(state.board().row(0).iter().all(|c| c.is_empty()));
        assert!(state.board().row(1).iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_check_lines_shifts_rows_above() {
        let mut state = state(3, 5);
        state.board.set(0, 1, Cell::Filled('a'));
        state.board.set(1, 2, Cell::Filled('b'));
        fill_row_except(&mut state, 3, &[]);
        state.board.set(2, 4, Cell::Filled('c'));

        assert_eq!(state.check_lines(), 1);
        assert!(state.board().row(0).iter().all(|c| c.is_empty()));
        assert_eq!(state.board().cell(0, 2), Cell::Filled('a'));
        assert_eq!(state.board().cell(1, 3), Cell::Filled('b'));
        assert_eq!(state.board().cell(2, 4), Cell::Filled('c'));
        assert_eq!(state.board().filled_count(), 3);
    }

    #[test]
    fn test_check_lines_without_full_rows() {
        let mut state = state(4, 4);
        fill_row_except(&mut state, 3, &[1]);
        let before = state.board().clone();
        assert_eq!(state.check_lines(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_update_level_from_score() {
        let mut state = state(10, 20);
        assert_eq!(state.level(), 1);
        state.score = 8_000;
        assert_eq!(state.level(), 1);
        let info = state.update_level();
        assert_eq!(info.level, 3);
        assert_eq!(state.level(), 3);
        assert_eq!(state.tick_interval(), 700_000);
    }

    #[test]
    fn test_apply_commands() {
        let mut state = spawned(10, 20);
        state.apply(Command::MoveLeft);
        assert_eq!(piece(&state).position(), (2, 0));
        state.apply(Command::MoveRight);
        state.apply(Command::MoveRight);
        assert_eq!(piece(&state).position(), (4, 0));
        state.apply(Command::SoftDrop);
        assert_eq!(piece(&state).position(), (4, 1));
        state.apply(Command::Rotate);
        assert_eq!(piece(&state).shape().height(), 4);
        state.apply(Command::TogglePause);
        state.apply(Command::Quit);
        assert_eq!(piece(&state).position(), (5, 0));
    }

    #[test]
    fn test_moves_before_spawn_are_rejected() {
        let mut state = state(10, 20);
        assert_eq!(state.try_move_left(), Err(MoveError::NotFalling));
        assert_eq!(state.gravity_tick(), GravityOutcome::Idle);
        assert!(state.falling_piece().is_none());
    }

    #[test]
    fn test_visible_cell_overlays_piece() {
        let mut state = spawned(10, 20);
        state.board.set(0, 19, Cell::Filled('#'));
        assert_eq!(state.visible_cell(3, 0), Cell::Filled('@'));
        assert_eq!(state.visible_cell(7, 0), Cell::Empty);
        assert_eq!(state.visible_cell(0, 19), Cell::Filled('#'));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            board: BoardSize::new(0, 20),
            ..GameConfig::default()
        };
        assert!(matches!(GameState::new(&config), Err(ConfigError::Board(_))));

        let config = GameConfig {
            levels: vec![],
            ..GameConfig::default()
        };
        assert!(matches!(GameState::new(&config), Err(ConfigError::Levels(_))));
    }
}
