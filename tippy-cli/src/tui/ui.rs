//! UI rendering for the calculator screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_input::Input;

use crate::tui::app::{App, Focus};
use crate::tui::components::{StatCard, TipSlider};
use crate::tui::theme::{icons, theme, to_color};

// ═══════════════════════════════════════════════════════════════════════════
// MAIN UI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════

/// Main UI rendering function.
pub fn ui(frame: &mut Frame, app: &App) {
    let t = theme();

    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Root Layout: Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root_layout[0]);
    render_content(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);

    if app.show_help {
        render_help_popup(frame);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header(frame: &mut Frame, area: Rect) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let brand = Line::from(vec![
        Span::styled("TIPPY", t.title()),
        Span::raw(" "),
        Span::styled(icons::RECEIPT, Style::default().fg(t.amber)),
        Span::raw("  "),
        Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
        Span::raw("  "),
        Span::styled("Tip Calculator", t.subtitle()),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), inner);
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTENT
// ═══════════════════════════════════════════════════════════════════════════

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_inputs(frame, columns[0], app);
    render_outputs(frame, columns[1], app);
}

fn render_inputs(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();
    let display = app.display();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bill
            Constraint::Length(3), // Slider
            Constraint::Length(3), // People
            Constraint::Min(0),
        ])
        .split(area);

    render_text_field(frame, rows[0], " Bill Amount ", &app.bill_input, app.focus == Focus::Bill);

    TipSlider::new(app.session.tip_percent(), app.slider_max(), &display.tip_percent)
        .track_color(to_color(display.tip_label_color))
        .focused(app.focus == Focus::TipSlider)
        .render(frame, rows[1]);

    render_text_field(frame, rows[2], " Number of People ", &app.people_input, app.focus == Focus::People);

    let hint = match app.focus {
        Focus::Bill => "Type the bill amount",
        Focus::TipSlider => "[←/→] ±1  [PgUp/PgDn] ±5  [Home/End] min/max",
        Focus::People => "Type how many people share the bill",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", icons::ARROW_RIGHT), t.accent_style()),
            Span::styled(hint, t.subtitle()),
        ]))
        .wrap(Wrap { trim: true }),
        rows[3],
    );
}

fn render_text_field(frame: &mut Frame, area: Rect, title: &str, input: &Input, focused: bool) {
    let t = theme();

    let block = Block::default()
        .title(title)
        .title_style(t.subtitle())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused { t.border_active() } else { t.border_inactive() })
        .style(t.bg());

    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    frame.render_widget(
        Paragraph::new(input.value())
            .style(t.text())
            .scroll((0, scroll as u16))
            .block(block),
        area,
    );

    if focused {
        let cursor = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((inner.x + cursor.min(inner.width.saturating_sub(1)), inner.y));
    }
}

fn render_outputs(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();
    let display = app.display();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tip
            Constraint::Length(3), // Total
            Constraint::Length(3), // Per person
            Constraint::Length(3), // Rating
            Constraint::Min(0),
        ])
        .split(area);

    StatCard::new("Tip", &display.tip_amount).render(frame, rows[0]);
    StatCard::new("Total", &display.total_amount)
        .value_color(t.amber)
        .render(frame, rows[1]);
    StatCard::new("Per Person", &display.bill_per_person)
        .value_color(t.success)
        .render(frame, rows[2]);

    let label = display.tip_label.to_string();
    StatCard::new("Rating", &label)
        .value_color(to_color(display.tip_label_color))
        .render(frame, rows[3]);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let t = theme();

    let mode = match app.focus {
        Focus::Bill => "BILL",
        Focus::TipSlider => "TIP",
        Focus::People => "PEOPLE",
    };

    let status = match &app.message {
        Some(msg) => Span::styled(format!(" {} ", msg), Style::default().bg(t.success).fg(t.slate)),
        None => Span::styled(format!(" {} ", mode), Style::default().bg(t.slate_light).fg(t.text_muted)),
    };

    let keys = Span::styled(
        " [Tab] Next field  [F1] Help  [Ctrl+R] Clear  [Esc] Quit ",
        Style::default().fg(t.text_muted),
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![status, Span::raw(" "), keys])).style(t.bg()),
        area,
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP
// ═══════════════════════════════════════════════════════════════════════════

fn render_help_popup(frame: &mut Frame) {
    let t = theme();
    let area = centered_rect(60, 60, frame.area());

    let key = |k: &'static str| Span::styled(format!("{:<14}", k), t.title());
    let lines = vec![
        Line::from(Span::styled("Help", t.title().add_modifier(Modifier::UNDERLINED))),
        Line::from(""),
        Line::from(vec![key("Tab / ↓"), Span::styled("Next field", t.text())]),
        Line::from(vec![key("Shift+Tab / ↑"), Span::styled("Previous field", t.text())]),
        Line::from(vec![key("← / →"), Span::styled("Move tip slider by 1%", t.text())]),
        Line::from(vec![key("PgUp / PgDn"), Span::styled("Move tip slider by 5%", t.text())]),
        Line::from(vec![key("Home / End"), Span::styled("Minimum / maximum tip", t.text())]),
        Line::from(vec![key("F1 / ?"), Span::styled("Show this help (? on the tip slider only)", t.text())]),
        Line::from(vec![key("Ctrl+R"), Span::styled("Clear all fields", t.text())]),
        Line::from(vec![key("Esc / Ctrl+C"), Span::styled("Quit", t.text())]),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", t.subtitle())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_active())
        .style(t.bg());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

// ═══════════════════════════════════════════════════════════════════════════
// UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Helper to center a rect within a parent.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

#[cfg(test)]
#[path = "ui_tests.rs"]
mod ui_tests;
