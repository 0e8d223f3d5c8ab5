//! Central theme configuration for the TUI.
//!
//! Two palettes exist, dark and light; the app picks one per frame so
//! dark mode can be toggled at runtime.

use ratatui::style::{Color, Modifier, Style};

use crate::model::{Color as PegColor, PegResult};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub background: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,

    // Board
    pub empty_slot: Color,
    pub slot_cursor: Color,
    pub palette_cursor: Color,
    pub row_number: Color,

    // Key pegs
    pub key_correct: Color,
    pub key_wrong_position: Color,
    pub key_incorrect: Color,

    // Modals
    pub modal_border: Color,
    pub modal_border_won: Color,
    pub modal_border_lost: Color,
    pub modal_headline: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_help: (Color, Color),
    pub mode_game_over: (Color, Color),

    pub disabled: Color,
    pub message: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Theme {
    /// Monokai
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(39, 40, 34),
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),
            title: Color::Rgb(248, 248, 242),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),

            empty_slot: Color::Rgb(73, 72, 62),
            slot_cursor: Color::Rgb(102, 217, 239),
            palette_cursor: Color::Rgb(230, 219, 116),
            row_number: Color::Rgb(117, 113, 94),

            key_correct: Color::Rgb(248, 248, 242),
            key_wrong_position: Color::Rgb(174, 129, 255),
            key_incorrect: Color::Rgb(73, 72, 62),

            modal_border: Color::Rgb(230, 219, 116),
            modal_border_won: Color::Rgb(166, 226, 46),
            modal_border_lost: Color::Rgb(249, 38, 114),
            modal_headline: Color::Rgb(174, 129, 255),

            mode_normal: (Color::Rgb(102, 217, 239), Color::Rgb(39, 40, 34)),
            mode_help: (Color::Rgb(230, 219, 116), Color::Rgb(39, 40, 34)),
            mode_game_over: (Color::Rgb(249, 38, 114), Color::Rgb(248, 248, 242)),

            disabled: Color::Rgb(117, 113, 94),
            message: Color::Rgb(166, 226, 46),

            help_key: Color::Rgb(102, 217, 239),
            help_border: Color::Rgb(230, 219, 116),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            border: Color::Rgb(148, 163, 184),
            border_focused: Color::Rgb(59, 130, 246),
            title: Color::Rgb(15, 23, 42),

            text: Color::Rgb(15, 23, 42),
            text_muted: Color::Rgb(115, 115, 115),

            empty_slot: Color::Rgb(209, 213, 219),
            slot_cursor: Color::Rgb(37, 99, 235),
            palette_cursor: Color::Rgb(217, 119, 6),
            row_number: Color::Rgb(148, 163, 184),

            key_correct: Color::Rgb(0, 0, 0),
            key_wrong_position: Color::Rgb(100, 116, 139),
            key_incorrect: Color::Rgb(209, 213, 219),

            modal_border: Color::Rgb(148, 163, 184),
            modal_border_won: Color::Rgb(22, 163, 74),
            modal_border_lost: Color::Rgb(220, 38, 38),
            modal_headline: Color::Rgb(168, 85, 247),

            mode_normal: (Color::Rgb(59, 130, 246), Color::Rgb(255, 255, 255)),
            mode_help: (Color::Rgb(234, 179, 8), Color::Rgb(15, 23, 42)),
            mode_game_over: (Color::Rgb(220, 38, 38), Color::Rgb(255, 255, 255)),

            disabled: Color::Rgb(163, 163, 163),
            message: Color::Rgb(22, 163, 74),

            help_key: Color::Rgb(37, 99, 235),
            help_border: Color::Rgb(148, 163, 184),
        }
    }

    /// Terminal color of a code peg
    pub fn peg_color(&self, color: PegColor) -> Color {
        let (r, g, b) = color.rgb();
        Color::Rgb(r, g, b)
    }

    /// Key peg (symbol, color)
    pub fn key_peg(&self, result: PegResult) -> (&'static str, Color) {
        match result {
            PegResult::Correct => ("●", self.key_correct),
            PegResult::WrongPosition => ("○", self.key_wrong_position),
            PegResult::Incorrect => ("·", self.key_incorrect),
        }
    }

    // Style builders

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn cursor_style(&self, color: Color) -> Style {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

static DARK: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();
static LIGHT: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the theme for the current mode
pub fn theme(dark_mode: bool) -> &'static Theme {
    if dark_mode {
        DARK.get_or_init(Theme::dark)
    } else {
        LIGHT.get_or_init(Theme::light)
    }
}
