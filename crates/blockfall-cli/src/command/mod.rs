use std::path::PathBuf;

use blockfall_engine::{GameConfig, GravityPacing};
use clap::{Parser, Subcommand};

use crate::util;

use self::{headless::HeadlessArg, play::PlayArg};

mod headless;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Run a scripted session and print text frames
    Headless(#[clap(flatten)] HeadlessArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Headless(arg) => headless::run(&arg)?,
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum PacingArg {
    /// Gravity every `gravity_every` steps at any level
    Fixed,
    /// Gravity speeds up with the level
    LevelScaled,
}

impl From<PacingArg> for GravityPacing {
    fn from(arg: PacingArg) -> Self {
        match arg {
            PacingArg::Fixed => GravityPacing::Fixed,
            PacingArg::LevelScaled => GravityPacing::LevelScaled,
        }
    }
}

/// Session options shared by every mode.
///
/// Flags override the values read from `--config`.
#[derive(Default, Debug, Clone, clap::Args)]
struct GameArgs {
    /// Game configuration file (JSON format)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Board width in cells
    #[clap(long)]
    width: Option<u16>,
    /// Board height in cells
    #[clap(long)]
    height: Option<u16>,
    /// Seed of the piece sequence
    #[clap(long, conflicts_with = "random_seed")]
    seed: Option<u32>,
    /// Pick a random seed
    #[clap(long)]
    random_seed: bool,
    /// How gravity is paced
    #[clap(long, value_enum)]
    pacing: Option<PacingArg>,
    /// Redraw every N steps
    #[clap(long)]
    render_every: Option<u32>,
    /// Apply gravity every N steps
    #[clap(long)]
    gravity_every: Option<u32>,
    /// Duration of one loop step in milliseconds
    #[clap(long)]
    step_millis: Option<u64>,
    /// Write log records to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Write the session summary as JSON to this file (`-` for stdout)
    #[clap(long)]
    summary: Option<PathBuf>,
}

impl GameArgs {
    fn load_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_config_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.board.width = width;
        }
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.random_seed {
            config.seed = rand::random();
        }
        if let Some(pacing) = self.pacing {
            config.timing.pacing = pacing.into();
        }
        if let Some(render_every) = self.render_every {
            config.timing.render_every = render_every;
        }
        if let Some(gravity_every) = self.gravity_every {
            config.timing.gravity_every = gravity_every;
        }
        if let Some(step_millis) = self.step_millis {
            config.timing.step_millis = step_millis;
        }
        Ok(config)
    }
}
