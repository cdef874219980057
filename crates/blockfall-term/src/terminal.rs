use std::io;

use blockfall_engine::{GameState, Renderer, SessionSummary};
use ratatui::DefaultTerminal;

use crate::widgets::GameDisplay;

/// Draws each frame to a ratatui terminal.
///
/// The terminal is borrowed, so the caller keeps ownership of its setup and
/// restoration (see [`ratatui::run`]).
#[derive(Debug)]
pub struct TerminalRenderer<'a> {
    terminal: &'a mut DefaultTerminal,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(terminal: &'a mut DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl Renderer for TerminalRenderer<'_> {
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(GameDisplay::new(state), frame.area()))?;
        Ok(())
    }

    fn report(&mut self, state: &GameState, summary: &SessionSummary) -> io::Result<()> {
        self.terminal.draw(|frame| {
            frame.render_widget(GameDisplay::new(state).summary(summary), frame.area());
        })?;
        Ok(())
    }
}
