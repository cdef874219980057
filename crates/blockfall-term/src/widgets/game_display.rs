use blockfall_engine::{GameState, SessionOutcome, SessionSummary};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, StatsDisplay, color, style};

const HELP_TEXT: &str = "← → / Q D (Move) | ↓ / S (Drop) | ↑ / Space (Rotate) | P (Pause) | Esc (Quit)";

/// Full session screen: header, board, statistics and key help.
///
/// Once the game is over, or when a summary is attached, a popup covers the
/// middle of the board.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    state: &'a GameState,
    summary: Option<&'a SessionSummary>,
}

impl<'a> GameDisplay<'a> {
    #[must_use]
    pub fn new(state: &'a GameState) -> Self {
        Self {
            state,
            summary: None,
        }
    }

    #[must_use]
    pub fn summary(self, summary: &'a SessionSummary) -> Self {
        Self {
            summary: Some(summary),
            ..self
        }
    }

    fn popup(&self) -> Option<(String, ratatui::style::Style)> {
        match self.summary {
            Some(summary) => {
                let title = match summary.outcome {
                    SessionOutcome::GameOver => "GAME OVER",
                    SessionOutcome::Quit => "QUIT",
                };
                Some((format!("{title}\nSCORE {}", summary.score), style::GAME_OVER))
            }
            None if self.state.is_game_over() => Some(("GAME OVER".to_owned(), style::GAME_OVER)),
            None => None,
        }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.is_game_over() {
            color::RED
        } else {
            color::WHITE
        };

        let header = Line::styled(
            format!("LEVEL {} | SCORE {}", self.state.level(), self.state.score()),
            style::DEFAULT,
        )
        .centered();
        let board = BoardDisplay::new(self.state).block(
            Block::bordered()
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let stats = StatsDisplay::new(self.state).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let help = Line::styled(HELP_TEXT, style::HELP).centered();

        let [header_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board.height()),
            Constraint::Length(1),
        ])
        .areas(area);
        let [board_area, stats_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_area);

        let board_width = board.width();
        header.render(header_area, buf);
        board.render(board_area, buf);
        stats.render(stats_area, buf);
        help.render(help_area, buf);

        if let Some((text, style)) = self.popup() {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
            let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            let width = board_width.max(text_width.saturating_add(2)).min(area.width);
            let popup_height = height.saturating_add(2).min(board_area.height);
            let x = (board_area.x + board_area.width / 2)
                .saturating_sub(width / 2)
                .max(area.x);
            let y = board_area.y + (board_area.height - popup_height) / 2;
            let area = Rect::new(x, y, width, popup_height).intersection(area);
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(height)), buf);
        }
    }
}
