//! Submission confirmation dialog
//!
//! Shown after the form is accepted. Lists the values exactly as sent.

use super::layout::centered_popup;
use super::text::wrap;
use crate::action::Action;
use crate::component::Component;
use crate::model::form::Submission;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct ConfirmationDialog;

impl ConfirmationDialog {
    pub fn draw_with_submission(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        submission: &Submission,
    ) -> Result<()> {
        let width = area.width.saturating_sub(4).clamp(1, 56);
        let text_width = width.saturating_sub(4).max(1) as usize;

        let mut lines = vec![Line::from("")];
        for (i, paragraph) in submission.confirmation_text().lines().enumerate() {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            for row in wrap(paragraph, text_width) {
                lines.push(Line::from(Span::styled(format!(" {}", row), style)));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                " OK ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter / Esc", Style::default().fg(Color::DarkGray)),
        ]));

        let height = (lines.len() as u16 + 2).min(area.height);
        let popup = centered_popup(area, width, height);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title(" Сообщение ")
                    .title_style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
            ),
            popup,
        );
        Ok(())
    }
}

impl Component for ConfirmationDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Use draw_with_submission instead
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_shows_submitted_values() {
        let submission = Submission {
            name: "Anna".to_string(),
            email: "anna@mail.ru".to_string(),
            message: "hi".to_string(),
        };
        let mut dialog = ConfirmationDialog;
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| {
                dialog
                    .draw_with_submission(frame, frame.area(), &submission)
                    .unwrap();
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Сообщение отправлено!"));
        assert!(screen.contains("Имя: Anna"));
        assert!(screen.contains("Email: anna@mail.ru"));
        assert!(screen.contains("Текст: hi"));
    }

    #[test]
    fn test_enter_closes() {
        let mut dialog = ConfirmationDialog;
        assert_eq!(
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
                .unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
                .unwrap(),
            None
        );
    }
}
