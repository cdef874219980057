use anyhow::Context as _;
use blockfall_engine::{GameLoop, GameState, SessionSummary};
use blockfall_term::{KeyboardInput, SleepClock, TerminalRenderer};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use crate::{command::GameArgs, logging, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(super) struct PlayArg {
    #[clap(flatten)]
    pub(super) game: GameArgs,
}

pub(super) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { game } = arg;

    logging::init(game.log_file.as_deref())?;
    let config = game.load_config()?;
    let state = GameState::new(&config).context("Invalid game configuration")?;
    info!(
        "starting interactive session: {}x{} board, seed {}",
        config.board.width, config.board.height, config.seed
    );

    let summary = ratatui::run(|terminal| -> anyhow::Result<SessionSummary> {
        let game = GameLoop::new(
            state,
            config.timing,
            TerminalRenderer::new(terminal),
            KeyboardInput,
            SleepClock::from_millis(config.timing.step_millis),
        )?;
        let summary = game.run().context("Terminal session failed")?;
        if summary.outcome.is_game_over() {
            wait_for_key_press().context("Failed to read terminal events")?;
        }
        Ok(summary)
    })?;

    println!(
        "Score: {} | Level: {} | Lines: {} | Pieces: {}",
        summary.score, summary.level, summary.cleared_lines, summary.locked_pieces
    );
    if let Some(path) = &game.summary {
        util::Output::save_json(&summary, path)?;
    }
    Ok(())
}

fn wait_for_key_press() -> std::io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
