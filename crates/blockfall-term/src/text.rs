use std::io::{self, Write};

use blockfall_engine::{GameState, Renderer, SessionOutcome, SessionSummary};

/// Writes frames as plain text.
///
/// Each frame is a `[LEVEL: n | SCORE: s]` header followed by the board
/// framed by `~` borders above and below and `!` walls on both sides. Every
/// cell takes two columns: its symbol and a space.
///
/// # Example
///
/// ```
/// use blockfall_engine::{BoardSize, GameConfig, GameState, Renderer};
/// use blockfall_term::TextRenderer;
///
/// let config = GameConfig {
///     board: BoardSize::new(4, 2),
///     ..GameConfig::default()
/// };
/// let mut state = GameState::new(&config).unwrap();
/// state.spawn();
///
/// let mut renderer = TextRenderer::new(Vec::new());
/// renderer.draw(&state).unwrap();
/// let text = String::from_utf8(renderer.into_inner()).unwrap();
/// assert_eq!(
///     text,
///     "[LEVEL: 1 | SCORE: 0]\n~~~~~~~~~~\n!@ @ @ @ !\n!        !\n~~~~~~~~~~\n"
/// );
/// ```
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    frames: u64,
}

impl<W> TextRenderer<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames written so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_border(&mut self, width: usize) -> io::Result<()> {
        writeln!(self.out, "{}", "~".repeat(2 * width + 2))
    }
}

impl<W> Renderer for TextRenderer<W>
where
    W: Write,
{
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let board = state.board();
        if self.frames > 0 {
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "[LEVEL: {} | SCORE: {}]",
            state.level(),
            state.score()
        )?;
        self.write_border(board.width())?;
        let mut line = String::with_capacity(2 * board.width() + 2);
        for y in 0..board.height() {
            line.clear();
            line.push('!');
            for x in 0..board.width() {
                line.push(state.visible_cell(x, y).symbol());
                line.push(' ');
            }
            line.push('!');
            writeln!(self.out, "{line}")?;
        }
        self.write_border(board.width())?;
        self.frames += 1;
        self.out.flush()
    }

    fn report(&mut self, _state: &GameState, summary: &SessionSummary) -> io::Result<()> {
        match summary.outcome {
            SessionOutcome::GameOver => writeln!(self.out, "*** GAME OVER ***")?,
            SessionOutcome::Quit => writeln!(self.out, "*** QUIT ***")?,
        }
        self.out.flush()
    }
}
