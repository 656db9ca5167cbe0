//! Rendering logic for the TUI.

use num_format::{Locale, ToFormattedString};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use twenty48_core::types::Score;

use super::app::{App, UiMode};
use super::widgets::GridWidget;

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let [title, content, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(7),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_title(frame, title);
    render_content(frame, content, app);
    render_help_bar(frame, help, app);

    match app.ui_mode {
        UiMode::Hint => render_hint_popup(frame, app),
        UiMode::GameOver => render_game_over_popup(frame, app),
        UiMode::ConfirmQuit => render_quit_dialog(frame),
        UiMode::Normal => {}
    }
}

fn format_score(score: Score) -> String {
    score.to_formatted_string(&Locale::en)
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

/// Bordered block in the given frame color.
fn framed(color: Color) -> Block<'static> {
    Block::default().borders(Borders::ALL).border_style(fg(color))
}

/// A `label: value` line for the info panel.
fn field(label: &'static str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<7}")),
        Span::styled(value, style),
    ])
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" 2048 ", bold(Color::Yellow)),
        Span::styled(concat!("v", env!("CARGO_PKG_VERSION")), fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title).block(framed(Color::DarkGray)), area);
}

/// Grid on the left, info panel on the right.
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let size = app.game.session().size();
    let [grid_area, info_area] = Layout::horizontal([
        Constraint::Length(GridWidget::width(size) + 2),
        Constraint::Min(24),
    ])
    .areas(area);

    render_grid(frame, grid_area, app);
    render_info_panel(frame, info_area, app);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let size = app.game.session().size();
    let block = framed(Color::DarkGray).title(format!(" {size}x{size} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spawned: Vec<usize> = app
        .game
        .last_outcome()
        .map(|o| o.spawned.iter().map(|s| s.index).collect())
        .unwrap_or_default();
    frame.render_widget(
        GridWidget::new(app.game.session().grid()).highlight(&spawned),
        inner,
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = framed(Color::DarkGray).title(" Info ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = app.game.session();
    let mut lines = vec![
        Line::default(),
        field("Score:", format_score(session.score()), bold(Color::Cyan)),
    ];
    if let Some(outcome) = app.game.last_outcome()
        && outcome.gained > 0
    {
        lines.push(field(
            "",
            format!("+{}", format_score(outcome.gained)),
            fg(Color::Green),
        ));
    }
    lines.push(field("Best:", format_score(app.game.best()), fg(Color::Yellow)));
    lines.push(Line::default());
    lines.push(field(
        "Max:",
        session.grid().max_tile().to_string(),
        fg(Color::Magenta),
    ));

    let mut size_line = field("Size:", format!("{0}x{0}", session.size()), fg(Color::Cyan));
    if app.pending_size != session.size() {
        size_line.push_span(Span::styled(
            format!(" (next {0}x{0})", app.pending_size),
            fg(Color::DarkGray),
        ));
    }
    lines.push(size_line);
    lines.push(field("Undo:", session.history_len().to_string(), fg(Color::White)));
    lines.push(field(
        "Ties:",
        session.tie_break().to_string(),
        fg(Color::DarkGray),
    ));

    if session.is_game_over() {
        lines.push(Line::default());
        lines.push(Line::styled("*** Game Over ***", bold(Color::Red)));
    }
    if let Some(msg) = &app.status_message {
        lines.push(Line::default());
        lines.push(Line::styled(msg.clone(), fg(Color::Gray)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let keys: &[(&str, &str)] = match app.ui_mode {
        UiMode::ConfirmQuit => &[("Y", "Quit"), ("Any", "Cancel")],
        UiMode::GameOver => &[("U", "Undo"), ("N", "New"), ("+/-", "Size"), ("Q", "Quit")],
        _ => &[
            ("←↑↓→", "Move"),
            ("U", "Undo"),
            ("N", "New"),
            ("I", "Hint"),
            ("+/-", "Size"),
            ("Q", "Quit"),
        ],
    };

    let key_style = Style::default().fg(Color::Black).bg(Color::Cyan);
    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|&(key, action)| {
            [
                Span::styled(format!(" [{key}] "), key_style),
                Span::raw(format!("{action} ")),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(framed(Color::DarkGray)),
        area,
    );
}

/// Draws a centered popup over whatever is below it.
fn popup(frame: &mut Frame, width: u16, height: u16, title: &'static str, color: Color, lines: Vec<Line>) {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(framed(color).title(title));
    frame.render_widget(paragraph, area);
}

fn render_hint_popup(frame: &mut Frame, app: &App) {
    let mut lines = vec![Line::default()];
    if let Some(dir) = app.hint {
        lines.push(Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                format!("{} {}", dir.arrow(), dir.as_str().to_uppercase()),
                bold(Color::Cyan),
            ),
        ]));
    }
    lines.push(Line::default());

    for eval in &app.evaluations {
        let chosen = app.hint == Some(eval.direction);
        let style = match (chosen, eval.changed) {
            (true, _) => bold(Color::Cyan),
            (false, true) => fg(Color::White),
            (false, false) => fg(Color::DarkGray),
        };
        let gain = if eval.changed {
            format!("+{}", format_score(eval.score_gained))
        } else {
            "blocked".to_string()
        };
        let marker = if chosen { "▶" } else { " " };
        lines.push(Line::styled(
            format!(
                "{marker} {} {:<6}{gain:>9}",
                eval.direction.arrow(),
                eval.direction.as_str()
            ),
            style,
        ));
    }

    lines.push(Line::default());
    lines.push(Line::styled("Enter or Esc to close", fg(Color::DarkGray)));
    popup(frame, 40, 50, " Hint ", Color::Cyan, lines);
}

fn render_game_over_popup(frame: &mut Frame, app: &App) {
    let session = app.game.session();
    let lines = vec![
        Line::default(),
        Line::styled("No moves left", bold(Color::Red)),
        Line::default(),
        field("Score:", format_score(session.score()), fg(Color::Cyan)),
        field("Max:", session.grid().max_tile().to_string(), fg(Color::Magenta)),
        Line::default(),
        Line::styled("U: Undo  N: New game  Enter: Close", fg(Color::DarkGray)),
    ];
    popup(frame, 40, 30, " Game Over ", Color::Red, lines);
}

fn render_quit_dialog(frame: &mut Frame) {
    let lines = vec![
        Line::default(),
        Line::styled("Quit 2048?", bold(Color::Yellow)),
        Line::default(),
        Line::from("Y to quit, any other key to cancel"),
    ];
    popup(frame, 40, 15, " Confirm ", Color::Yellow, lines);
}

/// Rectangle covering the given percentages of `area`, centered.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
