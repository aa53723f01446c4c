//! Drawer menu shown under the header when the burger is toggled

use super::layout::contains;
use crate::action::Action;
use crate::component::Component;
use crate::model::navigation::NAV_LINKS;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DRAWER_WIDTH: u16 = 28;

#[derive(Default)]
pub struct DrawerComponent {
    pub cursor: usize,
    /// Drawer rectangle and link rows from the last draw
    area: Rect,
    rows: Vec<(Rect, &'static str)>,
}

impl DrawerComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Area the drawer occupies inside the page body
    pub fn area(body: Rect) -> Rect {
        let width = DRAWER_WIDTH.min(body.width);
        let height = (NAV_LINKS.len() as u16 + 2).min(body.height);
        Rect::new(body.x + body.width - width, body.y, width, height)
    }

    /// The pointer is over the drawer, border and title included
    pub fn contains(&self, column: u16, row: u16) -> bool {
        contains(self.area, column, row)
    }

    fn selected_href(&self) -> Option<&'static str> {
        NAV_LINKS.get(self.cursor).map(|link| link.href)
    }
}

impl Component for DrawerComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.cursor = (self.cursor + 1) % NAV_LINKS.len();
                None
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.cursor = (self.cursor + NAV_LINKS.len() - 1) % NAV_LINKS.len();
                None
            }
            KeyCode::Enter => self.selected_href().map(|href| Action::Navigate(href.to_string())),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                NAV_LINKS
                    .get(index)
                    .map(|link| Action::Navigate(link.href.to_string()))
            }
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::CloseMenu),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let action = self
            .rows
            .iter()
            .find(|(rect, _)| contains(*rect, mouse.column, mouse.row))
            .map(|(_, href)| Action::Navigate(href.to_string()));
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, body: Rect) -> Result<()> {
        let area = Self::area(body);
        self.area = area;
        self.rows.clear();
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Меню ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = NAV_LINKS
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let selected = i == self.cursor;
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!(" {} ", link.label), style),
                ])
            })
            .collect();

        for (i, link) in NAV_LINKS.iter().enumerate() {
            let row = inner.y + i as u16;
            if row < inner.y + inner.height {
                self.rows.push((Rect::new(inner.x, row, inner.width, 1), link.href));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_and_enter_navigates() {
        let mut drawer = DrawerComponent::new();
        assert_eq!(drawer.handle_key_event(key(KeyCode::Up)).unwrap(), None);
        assert_eq!(drawer.cursor, 3);
        assert_eq!(
            drawer.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::Navigate("#contacts".to_string()))
        );
        drawer.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(drawer.cursor, 0);
    }

    #[test]
    fn test_escape_closes() {
        let mut drawer = DrawerComponent::new();
        assert_eq!(
            drawer.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseMenu)
        );
        assert_eq!(
            drawer.handle_key_event(key(KeyCode::Char('2'))).unwrap(),
            Some(Action::Navigate("#about".to_string()))
        );
    }

    #[test]
    fn test_click_on_link() {
        let mut drawer = DrawerComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| drawer.draw(frame, Rect::new(0, 3, 60, 15)).unwrap())
            .unwrap();

        let area = DrawerComponent::area(Rect::new(0, 3, 60, 15));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + 3,
            row: area.y + 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            drawer.handle_mouse_event(click).unwrap(),
            Some(Action::Navigate("#portfolio".to_string()))
        );

        let outside = MouseEvent { column: 1, ..click };
        assert_eq!(drawer.handle_mouse_event(outside).unwrap(), None);
    }

    #[test]
    fn test_contains_covers_border_and_title() {
        let mut drawer = DrawerComponent::new();
        let body = Rect::new(0, 3, 60, 15);
        assert!(!drawer.contains(50, 3));

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| drawer.draw(frame, body).unwrap())
            .unwrap();

        let area = DrawerComponent::area(body);
        let bottom = area.y + area.height - 1;
        let right = area.x + area.width - 1;
        for (column, row) in [(area.x, area.y), (right, area.y), (area.x + 3, bottom), (right, bottom)] {
            assert!(drawer.contains(column, row));
            let click = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            };
            assert_eq!(drawer.handle_mouse_event(click).unwrap(), None);
        }
        assert!(!drawer.contains(area.x - 1, area.y));
        assert!(!drawer.contains(area.x, bottom + 1));
    }
}
