use super::app::{App, InputMode};
use super::theme::{Theme, theme};
use super::ui_modals::{draw_game_over_modal, draw_help_popup};
use super::ui_utils::{self, EMPTY_PEG, PEG};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw(f: &mut Frame, app: &App) {
    let t = theme(app.dark_mode);
    f.render_widget(Block::default().style(t.base_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Palette
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_title(f, app, t, chunks[0]);
    draw_board(f, app, t, chunks[1]);
    draw_palette(f, app, t, chunks[2]);
    draw_footer(f, app, t, chunks[3]);

    match app.input_mode {
        InputMode::Help => draw_help_popup(f, app, t),
        InputMode::GameOver => draw_game_over_modal(f, app, t),
        InputMode::Normal => {}
    }

    if let Some(confetti) = &app.confetti {
        f.render_widget(confetti, f.area());
    }
}

fn draw_title(f: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ])
        .split(area);

    let mode = if app.dark_mode {
        "d: Light Mode"
    } else {
        "d: Dark Mode"
    };
    f.render_widget(
        Paragraph::new(Span::styled(mode, t.muted_style())).alignment(Alignment::Center),
        columns[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "Mastermind",
            Style::default().fg(t.title).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        columns[1],
    );
    f.render_widget(
        Paragraph::new(Span::styled("?: How to Play", t.muted_style()))
            .alignment(Alignment::Center),
        columns[2],
    );
}

fn draw_board(f: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let state = app.session.state();
    let settings = state.settings();
    let mut lines: Vec<Line> = Vec::with_capacity(settings.max_attempts + 1);

    for (i, record) in state.history().iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:>2}  ", i + 1),
            Style::default().fg(t.row_number),
        )];
        spans.extend(ui_utils::code_spans(record.guess(), t));
        spans.push(Span::raw("   "));
        spans.extend(ui_utils::feedback_spans(record.feedback(), t));
        lines.push(Line::from(spans));
    }

    if !state.is_over() {
        lines.push(current_guess_line(app, t));
    }

    // Placeholder rows for the attempts still available
    let shown = lines.len();
    for i in shown..settings.max_attempts {
        let mut spans = vec![Span::styled(
            format!("{:>2}  ", i + 1),
            Style::default().fg(t.row_number),
        )];
        for slot in 0..settings.code_length {
            if slot > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled("·", Style::default().fg(t.empty_slot)));
        }
        lines.push(Line::from(spans));
    }

    let attempt = if state.is_over() {
        state.attempts_used()
    } else {
        state.attempts_used() + 1
    };
    let title = format!(" Attempt {}/{} ", attempt, settings.max_attempts);
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(t.border_style(app.input_mode == InputMode::Normal)),
    );

    let width = (settings.code_length as u16 * 2 + settings.code_length as u16 + 12).max(28);
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    f.render_widget(board, column);
}

fn current_guess_line(app: &App, t: &Theme) -> Line<'static> {
    let state = app.session.state();
    let mut spans = vec![Span::styled(
        format!("{:>2} ", state.attempts_used() + 1),
        Style::default().fg(t.slot_cursor).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled("▸", Style::default().fg(t.slot_cursor)));

    for (i, slot) in state.current_guess().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let (symbol, color) = match slot {
            Some(color) => (PEG, t.peg_color(*color)),
            None => (EMPTY_PEG, t.empty_slot),
        };
        let style = if i == app.slot_cursor {
            t.cursor_style(color)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(symbol, style));
    }

    let clear_style = if state.is_guess_empty() {
        Style::default().fg(t.disabled)
    } else {
        t.muted_style()
    };
    spans.push(Span::styled("   [c]lear", clear_style));
    Line::from(spans)
}

fn draw_palette(f: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let mut spans = Vec::new();
    for (i, color) in app.palette().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let label = if i < 9 {
            format!("{} ", i + 1)
        } else {
            "  ".to_string()
        };
        spans.push(Span::styled(label, t.muted_style()));
        let style = if i == app.palette_cursor {
            t.cursor_style(t.peg_color(*color))
        } else {
            Style::default().fg(t.peg_color(*color))
        };
        spans.push(Span::styled(PEG, style));
    }

    let name = app
        .palette()
        .get(app.palette_cursor)
        .map(|c| format!(" {} ", c))
        .unwrap_or_default();

    let palette = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Colors ")
                .title_bottom(Line::from(name).centered())
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(false)),
        );
    f.render_widget(palette, area);
}

fn draw_footer(f: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let (mode_label, (bg, fg)) = match app.input_mode {
        InputMode::Normal => (" PLAY ", t.mode_normal),
        InputMode::Help => (" HELP ", t.mode_help),
        InputMode::GameOver => (" OVER ", t.mode_game_over),
    };

    let mut spans = vec![
        Span::styled(
            mode_label,
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let key_style = Style::default().fg(t.help_key);
    let state = app.session.state();
    let submit_style = if state.can_submit() {
        key_style
    } else {
        Style::default().fg(t.disabled)
    };

    match app.input_mode {
        InputMode::Normal => {
            spans.push(Span::styled("1-9/Space", key_style));
            spans.push(Span::styled(" pick  ", t.muted_style()));
            spans.push(Span::styled("Enter", submit_style));
            spans.push(Span::styled(" submit  ", t.muted_style()));
            spans.push(Span::styled("⌫", key_style));
            spans.push(Span::styled(" undo  ", t.muted_style()));
            spans.push(Span::styled("n", key_style));
            spans.push(Span::styled(" new  ", t.muted_style()));
            spans.push(Span::styled("q", key_style));
            spans.push(Span::styled(" quit", t.muted_style()));
        }
        InputMode::Help => {
            spans.push(Span::styled("Esc", key_style));
            spans.push(Span::styled(" close", t.muted_style()));
        }
        InputMode::GameOver => {
            spans.push(Span::styled("n", key_style));
            spans.push(Span::styled(" new game  ", t.muted_style()));
            spans.push(Span::styled("Esc", key_style));
            spans.push(Span::styled(" view board", t.muted_style()));
        }
    }

    let tally = app.session.tally();
    spans.push(Span::styled(
        format!("   won {} · lost {}", tally.won, tally.lost),
        t.muted_style(),
    ));

    if let Some(message) = &app.message {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(message.clone(), Style::default().fg(t.message)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
