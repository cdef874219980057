//! ratatui widgets for a running session.

use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, game_display::*, stats_display::*};

mod board_display;
mod game_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const HELP: Style = fg_bg(color::GRAY, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);

    /// Style of a filled cell, keyed by the symbol its shape is drawn with.
    #[must_use]
    pub const fn filled(symbol: char) -> Style {
        let bg = match symbol {
            '#' => color::YELLOW,
            'X' => color::MAGENTA,
            '@' => color::CYAN,
            'O' => color::ORANGE,
            '&' => color::BLUE,
            'Z' => color::RED,
            _ => color::GREEN,
        };
        fg_bg(color::BLACK, bg)
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
