//! Help overlay listing every key binding of the page

use super::centered_popup;
use super::text::display_width;
use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Width of the key column
const KEY_COLUMN: usize = 16;

type Shortcuts = &'static [(&'static str, &'static str)];

const SHORTCUTS: &[(&str, Shortcuts)] = &[
    (
        "Scrolling",
        &[
            ("j / ↓", "Scroll down one line"),
            ("k / ↑", "Scroll up one line"),
            ("Space / PgDn", "Page down"),
            ("PgUp", "Page up"),
            ("Ctrl+d / u", "Page down / up"),
            ("g / G", "Top / bottom of the page"),
            ("Wheel", "Scroll"),
        ],
    ),
    (
        "Sections",
        &[
            ("1 - 4", "Главная, Обо мне, Портфолио, Контакты"),
            ("Home", "Back to the top"),
            ("p", "Jump to the portfolio"),
            ("c", "Jump to the contacts"),
            ("m", "Toggle the menu drawer"),
        ],
    ),
    (
        "Gallery",
        &[
            ("h / l / ← / →", "Select previous / next work"),
            ("Enter / click", "Open the selected work"),
            ("Esc / x", "Close the image"),
            ("Click outside", "Close the image"),
        ],
    ),
    (
        "Contact Form",
        &[
            ("i / Tab", "Start typing in the form"),
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("Enter", "Next field, new line or send"),
            ("Ctrl+s", "Send the message"),
            ("Esc", "Stop typing"),
        ],
    ),
    (
        "Links",
        &[
            ("P", "Call (tel:)"),
            ("E", "Write an email (mailto:)"),
            ("T", "Open Telegram"),
        ],
    ),
    (
        "Application",
        &[
            ("?", "Show this help"),
            ("q", "Quit / Close dialog"),
            ("Ctrl+c", "Quit immediately"),
        ],
    ),
];

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_by(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_by(-1);
                None
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_by(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_by(-10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let content_width = content.iter().map(Line::width).max().unwrap_or(0) as u16;

        let popup = centered_popup(
            area,
            (content_width + 4).min(area.width.saturating_sub(2)),
            (content.len() as u16 + 2).min(area.height.saturating_sub(2)),
        );
        frame.render_widget(Clear, popup);

        let total = content.len();
        let visible = popup.height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(visible));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_bottom(Line::from(" q / Esc / ? to close ").right_aligned())
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, popup);

        if total > visible {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible)).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                popup.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (title, shortcuts) in SHORTCUTS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!(" {}", title), heading)));
        lines.push(Line::from(Span::styled(
            format!(" {}", "─".repeat(display_width(title))),
            Style::default().fg(Color::DarkGray),
        )));
        for (key, description) in shortcuts.iter() {
            let pad = KEY_COLUMN.saturating_sub(display_width(key));
            lines.push(Line::from(vec![
                Span::styled(format!(" {}{}", key, " ".repeat(pad)), key_style),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_help_lists_page_shortcuts() {
        let text = plain(&build_help_content());
        assert!(text.contains("Ctrl+s"));
        assert!(text.contains("Toggle the menu drawer"));
        assert!(text.contains("Open Telegram"));
    }

    #[test]
    fn test_key_column_is_aligned() {
        let content = build_help_content();
        for line in content.iter().filter(|l| l.spans.len() == 2) {
            assert_eq!(display_width(&line.spans[0].content), KEY_COLUMN + 1);
        }
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut dialog = HelpDialog::default();
        for _ in 0..200 {
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE))
                .unwrap();
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();

        // 24 rows, one spare above and below, two for the border
        let visible = 24 - 2 - 2;
        assert_eq!(dialog.scroll_offset, build_help_content().len() - visible);
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(
                dialog.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap(),
                Some(Action::CloseModal)
            );
        }
    }
}
