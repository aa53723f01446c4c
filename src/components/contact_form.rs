//! Contact form component
//!
//! Owns only the focus cursor. Field values live in the form controller;
//! every edit is reported as the field's complete new value.

use super::document::{DocBuilder, DocTarget};
use super::text::wrap;
use crate::action::Action;
use crate::model::form::{FormController, FormField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Minimum rows shown for the message box
const MESSAGE_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Submit,
}

impl FormFocus {
    fn next(self) -> FormFocus {
        match self {
            FormFocus::Field(FormField::Name) => FormFocus::Field(FormField::Email),
            FormFocus::Field(FormField::Email) => FormFocus::Field(FormField::Message),
            FormFocus::Field(FormField::Message) => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Field(FormField::Name),
        }
    }

    fn previous(self) -> FormFocus {
        match self {
            FormFocus::Field(FormField::Name) => FormFocus::Submit,
            FormFocus::Field(FormField::Email) => FormFocus::Field(FormField::Name),
            FormFocus::Field(FormField::Message) => FormFocus::Field(FormField::Email),
            FormFocus::Submit => FormFocus::Field(FormField::Message),
        }
    }
}

pub struct ContactFormComponent {
    pub focus: FormFocus,
}

impl Default for ContactFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormComponent {
    pub fn new() -> Self {
        Self {
            focus: FormFocus::Field(FormField::Name),
        }
    }

    pub fn focus_field(&mut self, field: Option<FormField>) {
        self.focus = FormFocus::Field(field.unwrap_or(FormField::Name));
    }

    /// Translate a key press while the form has keyboard focus
    pub fn handle_key_with_form(
        &mut self,
        key: KeyEvent,
        form: &FormController,
    ) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            KeyCode::Esc => Some(Action::ExitForm),
            // Keyboard submit bypasses the button's disabled state
            KeyCode::Char('s') if ctrl => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Enter => match self.focus {
                FormFocus::Field(FormField::Message) => Some(Action::FieldChanged(
                    FormField::Message,
                    format!("{}\n", form.state.message),
                )),
                FormFocus::Field(_) => {
                    self.focus = self.focus.next();
                    None
                }
                FormFocus::Submit => form.can_submit().then_some(Action::SubmitForm),
            },
            KeyCode::Char(' ') if self.focus == FormFocus::Submit => {
                form.can_submit().then_some(Action::SubmitForm)
            }
            KeyCode::Backspace => match self.focus {
                FormFocus::Field(field) => {
                    let mut value = form.state.get(field).to_string();
                    value.pop();
                    Some(Action::FieldChanged(field, value))
                }
                FormFocus::Submit => None,
            },
            KeyCode::Char(c) if !ctrl => match self.focus {
                FormFocus::Field(field) => {
                    let mut value = form.state.get(field).to_string();
                    value.push(c);
                    Some(Action::FieldChanged(field, value))
                }
                FormFocus::Submit => None,
            },
            _ => None,
        };
        Ok(action)
    }

    /// Append the form to the page document
    pub fn render(&self, doc: &mut DocBuilder, form: &FormController, editing: bool) {
        doc.text(
            "Форма обратной связи",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        doc.blank();

        for field in FormField::all() {
            let focused = editing && self.focus == FormFocus::Field(field);
            let start = doc.current_line();

            let label_style = if focused {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            doc.text(
                format!("{} {}", if focused { "›" } else { " " }, field.label()),
                label_style,
            );

            let value = form.state.get(field);
            let box_width = doc.width.saturating_sub(4).max(1);
            let mut rows: Vec<Span<'static>> = Vec::new();
            if value.is_empty() && !focused {
                rows.push(Span::styled(
                    field.placeholder().to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                let shown = if focused {
                    format!("{}_", value)
                } else {
                    value.to_string()
                };
                for line in wrap(&shown, box_width) {
                    rows.push(Span::styled(line, Style::default().fg(Color::White)));
                }
            }
            if field == FormField::Message {
                while rows.len() < MESSAGE_ROWS {
                    rows.push(Span::raw(""));
                }
            }

            let bar = Style::default().fg(if focused { Color::Magenta } else { Color::DarkGray });
            for row in rows {
                doc.push(vec![Span::styled("  │ ", bar), row]);
            }

            if field == FormField::Email {
                if let Some(error) = &form.email_error {
                    doc.push(vec![Span::styled(
                        format!("  ⚠ {}", error),
                        Style::default().fg(Color::Red),
                    )]);
                }
            }

            let end = doc.current_line();
            let width = doc.width as u16;
            doc.hit(start..end, 0..width, DocTarget::Field(field));
        }
        doc.blank();

        let enabled = form.can_submit();
        let focused = editing && self.focus == FormFocus::Submit;
        let style = match (enabled, focused) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            (true, false) => Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        let label = " Отправить ";
        let line = doc.current_line();
        let mut spans = vec![Span::styled(label, style)];
        if !enabled {
            spans.push(Span::styled(
                "  (недоступно)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        doc.push(spans);
        if enabled {
            let width = super::text::display_width(label) as u16;
            doc.hit(line..line + 1, 0..width, DocTarget::Submit);
        }
        doc.blank();
        doc.push(vec![
            Span::styled(
                "Проверка email: обязательно наличие символа ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                "@",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", Style::default().fg(Color::DarkGray)),
        ]);
        doc.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn form_with(name: &str, email: &str, message: &str) -> FormController {
        let mut form = FormController::new();
        form.on_field_change(FormField::Name, name.to_string());
        form.on_field_change(FormField::Email, email.to_string());
        form.on_field_change(FormField::Message, message.to_string());
        form
    }

    #[test]
    fn test_typing_reports_full_value() {
        let mut component = ContactFormComponent::new();
        let form = form_with("Ann", "", "");
        let action = component
            .handle_key_with_form(key(KeyCode::Char('a')), &form)
            .unwrap();
        assert_eq!(
            action,
            Some(Action::FieldChanged(FormField::Name, "Anna".to_string()))
        );

        let action = component
            .handle_key_with_form(key(KeyCode::Backspace), &form)
            .unwrap();
        assert_eq!(
            action,
            Some(Action::FieldChanged(FormField::Name, "An".to_string()))
        );
    }

    #[test]
    fn test_focus_cycles() {
        let mut component = ContactFormComponent::new();
        let form = FormController::new();
        for expected in [
            FormFocus::Field(FormField::Email),
            FormFocus::Field(FormField::Message),
            FormFocus::Submit,
            FormFocus::Field(FormField::Name),
        ] {
            component.handle_key_with_form(key(KeyCode::Tab), &form).unwrap();
            assert_eq!(component.focus, expected);
        }
        component.handle_key_with_form(key(KeyCode::BackTab), &form).unwrap();
        assert_eq!(component.focus, FormFocus::Submit);
    }

    #[test]
    fn test_enter_in_message_adds_newline() {
        let mut component = ContactFormComponent::new();
        component.focus_field(Some(FormField::Message));
        let form = form_with("", "", "hi");
        let action = component.handle_key_with_form(key(KeyCode::Enter), &form).unwrap();
        assert_eq!(
            action,
            Some(Action::FieldChanged(FormField::Message, "hi\n".to_string()))
        );
    }

    #[test]
    fn test_disabled_button_ignores_enter() {
        let mut component = ContactFormComponent::new();
        component.focus = FormFocus::Submit;
        let form = form_with("Anna", "annamail.ru", "hi");
        assert_eq!(
            component.handle_key_with_form(key(KeyCode::Enter), &form).unwrap(),
            None
        );

        let form = form_with("Anna", "anna@mail.ru", "hi");
        assert_eq!(
            component.handle_key_with_form(key(KeyCode::Enter), &form).unwrap(),
            Some(Action::SubmitForm)
        );
    }

    #[test]
    fn test_ctrl_s_always_requests_submit() {
        let mut component = ContactFormComponent::new();
        let form = form_with("", "nope", "");
        assert_eq!(
            component.handle_key_with_form(ctrl('s'), &form).unwrap(),
            Some(Action::SubmitForm)
        );
    }

    #[test]
    fn test_render_shows_error_and_disabled_button() {
        let component = ContactFormComponent::new();
        let form = form_with("Anna", "annamail.ru", "hi");
        let mut doc = DocBuilder::new(50, 0);
        component.render(&mut doc, &form, false);
        let doc = doc.finish();

        let text: Vec<String> = (0..doc.height()).map(|i| doc.line_text(i)).collect();
        assert!(text.iter().any(|l| l.contains("⚠ Email должен содержать символ @")));
        assert!(text.iter().any(|l| l.contains("Отправить  (недоступно)")));
        assert!(!doc.hits.iter().any(|h| h.target == DocTarget::Submit));
    }

    #[test]
    fn test_render_enabled_button_is_clickable() {
        let component = ContactFormComponent::new();
        let form = form_with("Anna", "anna@mail.ru", "hi");
        let mut doc = DocBuilder::new(50, 0);
        component.render(&mut doc, &form, true);
        let doc = doc.finish();

        assert!(doc.hits.iter().any(|h| h.target == DocTarget::Submit));
        let fields: Vec<&DocTarget> = doc
            .hits
            .iter()
            .map(|h| &h.target)
            .filter(|t| matches!(t, DocTarget::Field(_)))
            .collect();
        assert_eq!(fields.len(), 3);
    }
}
