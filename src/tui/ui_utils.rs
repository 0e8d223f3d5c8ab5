use super::theme::Theme;
use crate::model::{Code, Color as PegColor, Feedback};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
};

pub const PEG: &str = "●";
pub const EMPTY_PEG: &str = "○";

pub fn peg_span(color: PegColor, t: &Theme) -> Span<'static> {
    Span::styled(PEG, Style::default().fg(t.peg_color(color)))
}

/// Pegs of a code, separated by single spaces
pub fn code_spans(code: &Code, t: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(code.len() * 2);
    for (i, color) in code.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(peg_span(*color, t));
    }
    spans
}

pub fn feedback_spans(feedback: &Feedback, t: &Theme) -> Vec<Span<'static>> {
    feedback
        .results()
        .iter()
        .map(|r| {
            let (symbol, color) = t.key_peg(*r);
            Span::styled(symbol, Style::default().fg(color))
        })
        .collect()
}

/// Calculate a centered rectangle within a parent rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
