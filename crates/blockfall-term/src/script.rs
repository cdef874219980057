use std::{collections::VecDeque, io};

use blockfall_engine::{Command, CommandSource};
use log::debug;

/// Replays a string of command codes, one code every `every` steps.
///
/// Codes are mapped with [`Command::from_code`]; unknown codes use up their
/// slot without producing a command. Once the script is exhausted the source
/// emits [`Command::Quit`] at the next slot, unless it was built with
/// [`Self::keep_running`].
///
/// Each loop step drains the source until it returns `None`, so a slot ends
/// with that `None` and at most one command is produced per step.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Command, CommandSource};
/// use blockfall_term::ScriptedInput;
///
/// let mut input = ScriptedInput::new("qd", 1);
/// assert_eq!(input.poll_command().unwrap(), Some(Command::MoveLeft));
/// assert_eq!(input.poll_command().unwrap(), None);
/// assert_eq!(input.poll_command().unwrap(), Some(Command::MoveRight));
/// assert_eq!(input.poll_command().unwrap(), None);
/// assert_eq!(input.poll_command().unwrap(), Some(Command::Quit));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    codes: VecDeque<char>,
    every: u32,
    waited: u32,
    slot_used: bool,
    quit_when_done: bool,
}

impl ScriptedInput {
    /// `every` is clamped to at least one step.
    #[must_use]
    pub fn new(script: &str, every: u32) -> Self {
        Self {
            codes: script.chars().collect(),
            every: every.max(1),
            waited: 0,
            slot_used: false,
            quit_when_done: true,
        }
    }

    /// Keeps the session running after the last code instead of quitting.
    #[must_use]
    pub fn keep_running(self) -> Self {
        Self {
            quit_when_done: false,
            ..self
        }
    }

    /// Number of codes not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.codes.len()
    }
}

impl CommandSource for ScriptedInput {
    fn poll_command(&mut self) -> io::Result<Option<Command>> {
        if self.slot_used {
            self.slot_used = false;
            return Ok(None);
        }
        self.waited += 1;
        if self.waited < self.every {
            return Ok(None);
        }
        self.waited = 0;

        let command = match self.codes.pop_front() {
            Some(code) => {
                let command = Command::from_code(code);
                if command.is_none() {
                    debug!("ignoring unknown command code {code:?}");
                }
                command
            }
            None if self.quit_when_done => Some(Command::Quit),
            None => None,
        };
        self.slot_used = command.is_some();
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{GameConfig, GameLoop, GameState, LoopConfig, SessionOutcome};

    use crate::{TextRenderer, Unpaced};

    use super::*;

    /// Polls like one loop step does: until the first `None`.
    fn drain(input: &mut ScriptedInput) -> Vec<Command> {
        let mut commands = Vec::new();
        while let Some(command) = input.poll_command().unwrap() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn test_one_code_every_n_steps() {
        let mut input = ScriptedInput::new("qd", 2);
        let steps: Vec<_> = (0..6).map(|_| drain(&mut input)).collect();
        assert_eq!(
            steps,
            [
                vec![],
                vec![Command::MoveLeft],
                vec![],
                vec![Command::MoveRight],
                vec![],
                vec![Command::Quit],
            ]
        );
    }

    #[test]
    fn test_unknown_codes_use_their_slot() {
        let mut input = ScriptedInput::new("xs", 1);
        assert_eq!(drain(&mut input), []);
        assert_eq!(input.remaining(), 1);
        assert_eq!(drain(&mut input), [Command::SoftDrop]);
    }

    #[test]
    fn test_keep_running_never_quits() {
        let mut input = ScriptedInput::new(" ", 1).keep_running();
        assert_eq!(drain(&mut input), [Command::Rotate]);
        for _ in 0..10 {
            assert_eq!(drain(&mut input), []);
        }
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut input = ScriptedInput::new("d", 0);
        assert_eq!(drain(&mut input), [Command::MoveRight]);
    }

    #[test]
    fn test_scripted_session_quits_after_script() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        let game = GameLoop::new(
            state,
            LoopConfig::default(),
            TextRenderer::new(Vec::new()),
            ScriptedInput::new("qqq", 10),
            Unpaced,
        )
        .unwrap();
        let summary = game.run().unwrap();
        assert_eq!(summary.outcome, SessionOutcome::Quit);
        assert_eq!(summary.steps, 40);
    }

    #[test]
    fn test_scripted_session_runs_to_game_over() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        let game = GameLoop::new(
            state,
            LoopConfig {
                gravity_every: 2,
                ..LoopConfig::default()
            },
            TextRenderer::new(Vec::new()),
            ScriptedInput::new("", 1).keep_running(),
            Unpaced,
        )
        .unwrap();
        let summary = game.run().unwrap();
        assert_eq!(summary.outcome, SessionOutcome::GameOver);
        assert_eq!(summary.cleared_lines, 0);
    }
}
