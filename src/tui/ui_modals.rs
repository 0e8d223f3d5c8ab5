use super::app::App;
use super::theme::Theme;
use super::ui_utils;
use crate::format::plural;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn draw_help_popup(f: &mut Frame, app: &App, t: &Theme) {
    let area = ui_utils::centered_rect(70, 80, f.area());
    let settings = app.session.state().settings();
    let key_style = Style::default().fg(t.help_key);
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
    };
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![Span::styled(k, key_style), Span::raw(desc)])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "How to Play Mastermind",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Objective"),
        Line::from(format!(
            "Guess the secret code set by the computer. The code is a sequence of {} colored pegs.",
            settings.code_length
        )),
        Line::from(""),
        heading("Game Rules"),
        Line::from(format!(
            "• You have {} to guess the secret code.",
            plural(settings.max_attempts, "attempt")
        )),
        Line::from(vec![
            Span::raw("• Each guess is scored: "),
            Span::styled("●", Style::default().fg(t.key_correct)),
            Span::raw(" right color in the right position, "),
            Span::styled("○", Style::default().fg(t.key_wrong_position)),
            Span::raw(" right color in the wrong position, "),
            Span::styled("·", Style::default().fg(t.key_incorrect)),
            Span::raw(" no match. Key pegs are not in guess order."),
        ]),
        Line::from("• Clear pegs one at a time or clear the whole current guess."),
        Line::from("• Crack the code to win. Run out of attempts and you lose."),
        Line::from(""),
        heading("Controls"),
        key("1-9       ", "Pick a color"),
        key("←/→ Space ", "Move through the palette / pick"),
        key("Tab       ", "Move the slot cursor"),
        key("x/Del     ", "Clear the slot under the cursor"),
        key("Backspace ", "Clear the last peg"),
        key("c         ", "Clear the current guess"),
        key("Enter     ", "Submit guess"),
        key("n         ", "New game"),
        key("d         ", "Toggle dark mode"),
        key("?/Esc     ", "Close help"),
        key("q         ", "Quit"),
        Line::from(""),
        Line::from("Good luck and have fun playing Mastermind!"),
    ];

    let help = Paragraph::new(help_text)
        .style(t.base_style())
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

pub fn draw_game_over_modal(f: &mut Frame, app: &App, t: &Theme) {
    let area = ui_utils::centered_rect(50, 40, f.area());
    let state = app.session.state();

    let headline_style = Style::default()
        .fg(t.modal_headline)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![Line::from("")];
    let border_color = if state.is_won() {
        content.push(Line::from(Span::styled("🎉 You Won! 🎉", headline_style)));
        content.push(Line::from(""));
        content.push(Line::from(format!(
            "You guessed the secret code in {}!",
            plural(state.attempts_used(), "attempt")
        )));
        t.modal_border_won
    } else {
        content.push(Line::from(Span::styled("Game Over", headline_style)));
        content.push(Line::from(""));
        content.push(Line::from("You've run out of attempts."));
        content.push(Line::from("The secret code was:"));
        content.push(Line::from(ui_utils::code_spans(state.secret(), t)));
        t.modal_border_lost
    };
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled(
            "n",
            Style::default().fg(t.help_key).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" = New game    "),
        Span::styled(
            "Esc",
            Style::default().fg(t.help_key).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" = View board"),
    ]));

    let paragraph = Paragraph::new(content)
        .style(t.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(border_color)),
        )
        .alignment(Alignment::Center);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
