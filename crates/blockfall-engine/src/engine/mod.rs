//! Session rules and the loop that drives them.
//!
//! - [`GameState`] - Board, falling piece, score and level of one session
//! - [`LevelTable`] - Score thresholds mapped to levels
//! - [`Command`] - Discrete player and host commands
//! - [`GameConfig`] / [`LoopConfig`] - Session parameters, loadable from JSON
//! - [`GameLoop`] - Step orchestrator over a [`Renderer`], [`CommandSource`]
//!   and [`StepClock`]
//!
//! # Step Order
//!
//! Each [`GameLoop::step`] waits one step, redraws every `render_every` steps,
//! applies gravity and a line check every `gravity_every` steps, drains all
//! pending commands, then recomputes the level. The session ends when a spawned
//! piece collides or a [`Command::Quit`] arrives.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameConfig, GameState};
//!
//! let mut state = GameState::new(&GameConfig::default()).unwrap();
//! state.spawn();
//!
//! // Drop the first piece to the floor.
//! while state.gravity_tick().is_fell() {}
//! assert_eq!(state.locked_pieces(), 1);
//! assert!(state.session_state().is_falling());
//! ```

pub use self::{command::*, config::*, game_loop::*, game_state::*, level::*};

mod command;
mod config;
mod game_loop;
mod game_state;
mod level;
