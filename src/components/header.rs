//! Sticky header - brand, inline section links or the burger toggle

use super::layout::{contains, WIDE_LAYOUT_MIN_WIDTH};
use super::text::display_width;
use crate::action::Action;
use crate::component::Component;
use crate::model::navigation::NAV_LINKS;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderTarget {
    Brand,
    Link(&'static str),
    Burger,
}

#[derive(Default)]
pub struct HeaderComponent {
    /// Clickable regions from the last draw
    hits: Vec<(Rect, HeaderTarget)>,
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_with_state(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        brand: &str,
        menu_open: bool,
        active_section: Option<&str>,
    ) -> Result<()> {
        self.hits.clear();

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return Ok(());
        }
        let row = inner.y + inner.height / 2;

        let brand_text = format!(" {} ", brand);
        let brand_width = (display_width(&brand_text) as u16).min(inner.width);
        let brand_rect = Rect::new(inner.x, row, brand_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                brand_text,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            brand_rect,
        );
        self.hits.push((brand_rect, HeaderTarget::Brand));

        if area.width >= WIDE_LAYOUT_MIN_WIDTH {
            self.draw_links(frame, inner, row, active_section);
        } else {
            let label = if menu_open { " ✕ Закрыть " } else { " ☰ Меню " };
            let width = display_width(label) as u16;
            let x = inner.x + inner.width.saturating_sub(width + 1);
            let rect = Rect::new(x, row, width.min(inner.width), 1);
            let style = if menu_open {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            self.hits.push((rect, HeaderTarget::Burger));
        }
        Ok(())
    }

    fn draw_links(&mut self, frame: &mut Frame, inner: Rect, row: u16, active: Option<&str>) {
        let gap = 2u16;
        let labels: Vec<String> = NAV_LINKS.iter().map(|l| format!(" {} ", l.label)).collect();
        let total: u16 = labels.iter().map(|l| display_width(l) as u16).sum::<u16>()
            + gap * (labels.len() as u16).saturating_sub(1);

        let mut x = inner.x + inner.width.saturating_sub(total + 1);
        let mut spans = Vec::new();
        for (link, label) in NAV_LINKS.iter().zip(labels) {
            let width = display_width(&label) as u16;
            let style = if active == Some(link.target_id()) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            if !spans.is_empty() {
                spans.push(Span::raw(" ".repeat(gap as usize)));
            }
            spans.push(Span::styled(label, style));
            self.hits
                .push((Rect::new(x, row, width, 1), HeaderTarget::Link(link.href)));
            x += width + gap;
        }

        let start = inner.x + inner.width.saturating_sub(total + 1);
        let rect = Rect::new(start, row, total.min(inner.width), 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

impl Component for HeaderComponent {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let target = self
            .hits
            .iter()
            .find(|(rect, _)| contains(*rect, mouse.column, mouse.row))
            .map(|(_, target)| *target);

        let action = target.map(|target| match target {
            HeaderTarget::Brand => Action::Navigate("#home".to_string()),
            HeaderTarget::Link(href) => Action::Navigate(href.to_string()),
            HeaderTarget::Burger => Action::ToggleMenu,
        });
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Use draw_with_state instead
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render(header: &mut HeaderComponent, width: u16, menu_open: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| {
                header
                    .draw_with_state(frame, frame.area(), "Кретова Арина", menu_open, Some("about"))
                    .unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_narrow_header_shows_burger() {
        let mut header = HeaderComponent::new();
        let screen = render(&mut header, 60, false);
        assert!(screen.contains("Меню"));
        assert!(!screen.contains("Портфолио"));

        let (rect, _) = header
            .hits
            .iter()
            .find(|(_, t)| *t == HeaderTarget::Burger)
            .copied()
            .unwrap();
        let action = header.handle_mouse_event(click(rect.x + 1, rect.y)).unwrap();
        assert_eq!(action, Some(Action::ToggleMenu));

        let screen = render(&mut header, 60, true);
        assert!(screen.contains("Закрыть"));
    }

    #[test]
    fn test_wide_header_shows_links() {
        let mut header = HeaderComponent::new();
        let screen = render(&mut header, 120, false);
        for link in NAV_LINKS {
            assert!(screen.contains(link.label), "{}", link.label);
        }

        let (rect, _) = header
            .hits
            .iter()
            .find(|(_, t)| *t == HeaderTarget::Link("#portfolio"))
            .copied()
            .unwrap();
        let action = header.handle_mouse_event(click(rect.x, rect.y)).unwrap();
        assert_eq!(action, Some(Action::Navigate("#portfolio".to_string())));
    }

    #[test]
    fn test_brand_click_goes_home() {
        let mut header = HeaderComponent::new();
        render(&mut header, 60, false);
        let action = header.handle_mouse_event(click(2, 1)).unwrap();
        assert_eq!(action, Some(Action::Navigate("#home".to_string())));
        assert_eq!(header.handle_mouse_event(click(30, 2)).unwrap(), None);
    }
}
