use std::io;

use anyhow::Context as _;
use blockfall_engine::{GameLoop, GameState, Renderer, SessionSummary};
use blockfall_term::{ScriptedInput, TextRenderer, Unpaced};
use log::info;

use crate::{command::GameArgs, logging, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(super) struct HeadlessArg {
    /// Command codes to replay (`q` left, `d` right, `s` drop, space rotate)
    #[clap(long, default_value = "")]
    pub(super) script: String,
    /// Deliver one code every N steps
    #[clap(long, default_value_t = 1)]
    pub(super) input_every: u32,
    /// Print every redraw, not only the final frame
    #[clap(long)]
    pub(super) frames: bool,
    /// Keep running after the script until the game is over
    #[clap(long)]
    pub(super) until_game_over: bool,
    #[clap(flatten)]
    pub(super) game: GameArgs,
}

pub(super) fn run(arg: &HeadlessArg) -> anyhow::Result<()> {
    let HeadlessArg {
        script,
        input_every,
        frames,
        until_game_over,
        game,
    } = arg;

    logging::init(game.log_file.as_deref())?;
    let config = game.load_config()?;
    let state = GameState::new(&config).context("Invalid game configuration")?;
    info!(
        "starting headless session: {} codes, one every {input_every} steps",
        script.chars().count()
    );

    let input = if *until_game_over {
        ScriptedInput::new(script, *input_every).keep_running()
    } else {
        ScriptedInput::new(script, *input_every)
    };
    let renderer = TextRenderer::new(io::stdout().lock());
    let summary = if *frames {
        GameLoop::new(state, config.timing, renderer, input, Unpaced)?.run()
    } else {
        GameLoop::new(state, config.timing, FinalFrame(renderer), input, Unpaced)?.run()
    }
    .context("Failed to write frames to stdout")?;

    if let Some(path) = &game.summary {
        util::Output::save_json(&summary, path)?;
    }
    Ok(())
}

/// Skips periodic redraws and draws only once the session has ended.
#[derive(Debug)]
struct FinalFrame<R>(R);

impl<R> Renderer for FinalFrame<R>
where
    R: Renderer,
{
    fn draw(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }

    fn report(&mut self, state: &GameState, summary: &SessionSummary) -> io::Result<()> {
        self.0.draw(state)?;
        self.0.report(state, summary)
    }
}
