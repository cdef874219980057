//! Terminal collaborators for [`blockfall_engine::GameLoop`].
//!
//! - [`TerminalRenderer`] / [`TextRenderer`] - [`Renderer`](blockfall_engine::Renderer)s
//!   for an interactive ratatui screen and for plain text output
//! - [`KeyboardInput`] / [`ScriptedInput`] - [`CommandSource`](blockfall_engine::CommandSource)s
//! - [`SleepClock`] / [`Unpaced`] - [`StepClock`](blockfall_engine::StepClock)s

pub use self::{
    clock::{SleepClock, Unpaced},
    keyboard::{KeyboardInput, command_for_key},
    script::ScriptedInput,
    terminal::TerminalRenderer,
    text::TextRenderer,
};

mod clock;
mod keyboard;
mod script;
mod terminal;
mod text;
pub mod widgets;
