use std::iter;

use blockfall_engine::GameState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

pub struct StatsDisplay<'a> {
    state: &'a GameState,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
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
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        ROWS_HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&GameState) -> String),
    LabelValue(&'static str, &'static dyn Fn(&GameState) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|state| state.score().to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|state| state.level().to_string()),
    Row::LabelValue("LINES:", &|state| state.cleared_lines().to_string()),
    Row::LabelValue("PIECES:", &|state| state.locked_pieces().to_string()),
];

#[allow(clippy::cast_possible_truncation)]
const ROWS_HEIGHT: u16 = ROWS.len() as u16;

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.state), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.state), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
