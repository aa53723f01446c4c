//! Quit prompt

use super::layout::contains;
use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const YES: &str = " y  Quit ";
const NO: &str = " n  Stay ";

#[derive(Default)]
pub struct QuitDialog {
    yes_button: Rect,
    no_button: Rect,
    popup: Rect,
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let action = if contains(self.yes_button, mouse.column, mouse.row) {
            Some(Action::ForceQuit)
        } else if contains(self.no_button, mouse.column, mouse.row)
            || !contains(self.popup, mouse.column, mouse.row)
        {
            Some(Action::CloseModal)
        } else {
            None
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 36, 7);
        self.popup = popup_area;

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Close the portfolio?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    YES,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    NO,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);

        // Button row is centered inside the border
        let row = popup_area.y + 4;
        let yes = YES.chars().count() as u16;
        let no = NO.chars().count() as u16;
        let total = yes + 3 + no;
        let start = popup_area.x + 1 + popup_area.width.saturating_sub(2 + total) / 2;
        self.yes_button = Rect::new(start, row, yes, 1);
        self.no_button = Rect::new(start + yes + 3, row, no, 1);
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

    #[test]
    fn test_keys() {
        let mut dialog = QuitDialog::default();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(key('y')).unwrap(), Some(Action::ForceQuit));
        assert_eq!(dialog.handle_key_event(key('n')).unwrap(), Some(Action::CloseModal));
        assert_eq!(dialog.handle_key_event(key('z')).unwrap(), None);
    }

    #[test]
    fn test_buttons_are_clickable() {
        let mut dialog = QuitDialog::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Close the portfolio?"));

        let yes = dialog.yes_button;
        assert_eq!(
            dialog.handle_mouse_event(click(yes.x + 1, yes.y)).unwrap(),
            Some(Action::ForceQuit)
        );
        let no = dialog.no_button;
        assert_eq!(
            dialog.handle_mouse_event(click(no.x + 1, no.y)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(
            dialog.handle_mouse_event(click(0, 0)).unwrap(),
            Some(Action::CloseModal)
        );
    }
}
