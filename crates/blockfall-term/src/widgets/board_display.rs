use blockfall_engine::{Cell, GameState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Columns taken by one board cell.
const CELL_WIDTH: u16 = 2;

/// The board with the falling piece overlaid.
///
/// Cells outside the render area are clipped.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    state: &'a GameState,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    #[must_use]
    pub fn new(state: &'a GameState) -> Self {
        Self { state, block: None }
    }

    #[must_use]
    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.state.board().size().width.saturating_mul(CELL_WIDTH)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.state.board().size().height + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let board = self.state.board();
        let rows = (0..board.height()).zip(area.top()..area.bottom());
        for (y, row) in rows {
            let columns = (0..board.width()).zip((area.left()..area.right()).step_by(2));
            for (x, column) in columns {
                let (symbol, style) = match self.state.visible_cell(x, y) {
                    Cell::Empty => ('.', style::EMPTY_DOT),
                    Cell::Filled(symbol) => (symbol, style::filled(symbol)),
                };
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_char(symbol).set_style(style);
                }
                if column + 1 < area.right()
                    && let Some(cell) = buf.cell_mut((column + 1, row))
                {
                    cell.set_char(' ').set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{BoardSize, GameConfig};
    use ratatui::widgets::Block;

    use super::*;

    fn spawned(width: u16, height: u16) -> GameState {
        let config = GameConfig {
            board: BoardSize::new(width, height),
            ..GameConfig::default()
        };
        let mut state = GameState::new(&config).unwrap();
        state.spawn();
        state
    }

    #[test]
    fn test_size_includes_border() {
        let state = spawned(10, 20);
        let display = BoardDisplay::new(&state);
        assert_eq!((display.width(), display.height()), (20, 20));
        let display = display.block(Block::bordered());
        assert_eq!((display.width(), display.height()), (22, 22));
    }

    #[test]
    fn test_renders_falling_piece_over_dots() {
        let state = spawned(6, 2);
        let display = BoardDisplay::new(&state);
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        // The first piece is the bar, spawned at x = 1.
        let top: String = (0..12).map(|x| buf[(x, 0)].symbol().to_owned()).collect();
        assert_eq!(top, ". @ @ @ @ . ");
        let bottom: String = (0..12).map(|x| buf[(x, 1)].symbol().to_owned()).collect();
        assert_eq!(bottom, ". . . . . . ");
        assert_eq!(buf[(2, 0)].style().bg, style::filled('@').bg);
    }

    #[test]
    fn test_clips_to_small_area() {
        let state = spawned(6, 4);
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        BoardDisplay::new(&state).render(area, &mut buf);
        let top: String = (0..5).map(|x| buf[(x, 0)].symbol().to_owned()).collect();
        assert_eq!(top, ". @ @");
    }
}
