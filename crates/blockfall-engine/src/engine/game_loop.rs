use std::io;

use log::{debug, info};
use serde::Serialize;

use crate::ConfigError;

use super::{
    command::Command,
    config::{GravityPacing, LoopConfig},
    game_state::GameState,
};

/// Produces frames from the session state.
pub trait Renderer {
    /// Redraws the current frame.
    fn draw(&mut self, state: &GameState) -> io::Result<()>;

    /// Reports the end of the session after the final frame has been drawn.
    fn report(&mut self, state: &GameState, summary: &SessionSummary) -> io::Result<()>;
}

/// Non-blocking source of commands.
pub trait CommandSource {
    /// Returns the next pending command, or `None` if nothing is pending.
    fn poll_command(&mut self) -> io::Result<Option<Command>>;
}

/// Waits out one loop step.
pub trait StepClock {
    fn wait_step(&mut self);
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    GameOver,
    Quit,
}

/// Final statistics of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub score: u64,
    pub level: usize,
    pub cleared_lines: u64,
    pub locked_pieces: u64,
    pub steps: u64,
}

/// Result of a single loop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    Continue,
    Finished(SessionOutcome),
}

/// Drives a session: waits, redraws, applies gravity and drains commands.
///
/// Everything happens on the caller's thread; each operation completes before
/// the next one starts.
#[derive(Debug)]
pub struct GameLoop<R, I, C> {
    state: GameState,
    renderer: R,
    input: I,
    clock: C,
    config: LoopConfig,
    steps: u64,
    steps_until_gravity: u32,
    paused: bool,
}

impl<R, I, C> GameLoop<R, I, C>
where
    R: Renderer,
    I: CommandSource,
    C: StepClock,
{
    /// Prepares the loop and spawns the first piece if none is falling yet.
    pub fn new(
        mut state: GameState,
        config: LoopConfig,
        renderer: R,
        input: I,
        clock: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if state.session_state().is_spawning() {
            state.spawn();
        }
        let mut this = Self {
            state,
            renderer,
            input,
            clock,
            config,
            steps: 0,
            steps_until_gravity: 0,
            paused: false,
        };
        this.steps_until_gravity = this.gravity_steps();
        Ok(this)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of steps between two gravity ticks at the current level.
    #[must_use]
    pub fn gravity_steps(&self) -> u32 {
        match self.config.pacing {
            GravityPacing::Fixed => self.config.gravity_every,
            GravityPacing::LevelScaled => {
                let base = u64::from(self.state.levels().base_tick_interval());
                let scaled = u64::from(self.config.gravity_every)
                    * u64::from(self.state.tick_interval())
                    / base;
                u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
            }
        }
    }

    /// Runs one step of the loop.
    pub fn step(&mut self) -> io::Result<StepOutcome> {
        if self.state.is_game_over() {
            return Ok(StepOutcome::Finished(SessionOutcome::GameOver));
        }

        self.clock.wait_step();
        self.steps += 1;

        if self.steps % u64::from(self.config.render_every) == 0 {
            self.renderer.draw(&self.state)?;
        }

        if !self.paused {
            self.steps_until_gravity = self.steps_until_gravity.saturating_sub(1);
            if self.steps_until_gravity == 0 {
                self.state.gravity_tick();
                self.state.check_lines();
                self.steps_until_gravity = self.gravity_steps();
            }
        }

        while let Some(command) = self.input.poll_command()? {
            match command {
                Command::Quit => {
                    info!("quit requested at step {}", self.steps);
                    return Ok(StepOutcome::Finished(SessionOutcome::Quit));
                }
                Command::TogglePause => {
                    self.paused = !self.paused;
                    debug!("paused: {}", self.paused);
                }
                command if !self.paused => self.state.apply(command),
                _ => {}
            }
        }

        self.state.update_level();

        if self.state.is_game_over() {
            return Ok(StepOutcome::Finished(SessionOutcome::GameOver));
        }
        Ok(StepOutcome::Continue)
    }

    /// Runs until the game is over or the player quits, then draws a final
    /// frame and reports the summary.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        let outcome = loop {
            if let StepOutcome::Finished(outcome) = self.step()? {
                break outcome;
            }
        };

        let summary = self.summary(outcome);
        info!(
            "session ended ({:?}) after {} steps: score {}, level {}",
            summary.outcome, summary.steps, summary.score, summary.level
        );
        self.renderer.draw(&self.state)?;
        self.renderer.report(&self.state, &summary)?;
        Ok(summary)
    }

    #[must_use]
    pub fn summary(&self, outcome: SessionOutcome) -> SessionSummary {
        SessionSummary {
            outcome,
            score: self.state.score(),
            level: self.state.level(),
            cleared_lines: self.state.cleared_lines(),
            locked_pieces: self.state.locked_pieces(),
            steps: self.steps,
        }
    }
}
