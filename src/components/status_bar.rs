//! Bottom bars: transient status line and the context-sensitive key hints

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Which set of key hints applies right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMode {
    Page,
    Form,
    Menu,
    Lightbox,
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(Color::Yellow),
    )));
    frame.render_widget(paragraph, area);
}

fn hint(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(
        key,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn hint_spans(mode: HintMode) -> Vec<Span<'static>> {
    match mode {
        HintMode::Form => vec![
            hint(" Tab ", Color::Cyan),
            Span::raw("Next field "),
            hint(" Ctrl+s ", Color::Green),
            Span::raw("Send "),
            hint(" Esc ", Color::Yellow),
            Span::raw("Stop typing"),
        ],
        HintMode::Menu => vec![
            hint(" ↑/↓ ", Color::Cyan),
            Span::raw("Choose "),
            hint(" Enter ", Color::Green),
            Span::raw("Go "),
            hint(" Esc ", Color::Yellow),
            Span::raw("Close menu"),
        ],
        HintMode::Lightbox => vec![
            hint(" Esc / x ", Color::Yellow),
            Span::raw("Close "),
            Span::styled("click outside the card to close", Style::default().fg(Color::DarkGray)),
        ],
        HintMode::Page => vec![
            hint(" q ", Color::Yellow),
            Span::raw("Quit "),
            hint(" 1-4 ", Color::Cyan),
            Span::raw("Sections "),
            hint(" ←/→ ", Color::Cyan),
            Span::raw("Works "),
            hint(" Enter ", Color::Green),
            Span::raw("Open "),
            hint(" i ", Color::Magenta),
            Span::raw("Write "),
            hint(" m ", Color::Magenta),
            Span::raw("Menu "),
            hint(" ? ", Color::White),
            Span::raw("Help"),
        ],
    }
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, mode: HintMode) {
    let paragraph = Paragraph::new(Line::from(hint_spans(mode))).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
