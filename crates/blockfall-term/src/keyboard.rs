use std::{io, time::Duration};

use blockfall_engine::{Command, CommandSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

/// Maps a key press to a command.
///
/// Arrow keys and the letter codes (`q`/`d` move, `s` drops, space rotates)
/// drive the piece, `p` toggles pause, and `Esc` or `Ctrl-C` quits.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(code) => Command::from_code(code.to_ascii_lowercase()),
        _ => None,
    }
}

/// Non-blocking keyboard source backed by crossterm events.
///
/// The terminal must be in raw mode for key presses to arrive unbuffered.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardInput;

impl CommandSource for KeyboardInput {
    fn poll_command(&mut self) -> io::Result<Option<Command>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                trace!("key {:?}", key.code);
                if let Some(command) = command_for_key(key) {
                    return Ok(Some(command));
                }
            }
        }
        Ok(None)
    }
}
