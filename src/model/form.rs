//! Contact form state and validation
//!
//! The form owns three text fields and one derived error. The email rule only
//! requires an `@` somewhere in the value.

/// Inline error shown under the email field
pub const EMAIL_ERROR: &str = "Email должен содержать символ @";

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn all() -> [FormField; 3] {
        [FormField::Name, FormField::Email, FormField::Message]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Имя",
            FormField::Email => "Email",
            FormField::Message => "Сообщение",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Ваше имя",
            FormField::Email => "example@mail.ru",
            FormField::Message => "Опишите задачу: формат, сроки, референсы…",
        }
    }
}

/// Raw field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }
}

/// Values captured by a successful submit, verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Confirmation text shown to the visitor
    pub fn confirmation_text(&self) -> String {
        format!(
            "Сообщение отправлено!\n\nИмя: {}\nEmail: {}\nТекст: {}",
            self.name, self.email, self.message
        )
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(Submission),
    Rejected { error: String },
}

/// Returns the error message for an email value, or `None` when it contains `@`
pub fn validate_email(value: &str) -> Option<String> {
    if value.contains('@') {
        None
    } else {
        Some(EMAIL_ERROR.to_string())
    }
}

/// Form controller: field values plus the derived email error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    pub state: FormState,
    pub email_error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a field's value. Email edits recompute the error immediately.
    pub fn on_field_change(&mut self, field: FormField, value: String) {
        if field == FormField::Email {
            self.email_error = validate_email(&value);
        }
        self.state.set(field, value);
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        FormField::all()
            .iter()
            .all(|field| !self.state.get(*field).trim().is_empty())
            && self.email_error.is_none()
    }

    /// Validate and, when accepted, capture the values and reset the form.
    ///
    /// This is the authoritative guard: it runs even when the submit control
    /// is rendered disabled.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.email_error = validate_email(&self.state.email);
        if let Some(error) = &self.email_error {
            return SubmitOutcome::Rejected {
                error: error.clone(),
            };
        }

        let FormState {
            name,
            email,
            message,
        } = std::mem::take(&mut self.state);

        SubmitOutcome::Sent(Submission {
            name,
            email,
            message,
        })
    }

    /// Put captured values back after a delivery failure
    pub fn restore(&mut self, submission: Submission) {
        let Submission {
            name,
            email,
            message,
        } = submission;
        self.email_error = validate_email(&email);
        self.state = FormState {
            name,
            email,
            message,
        };
    }
}
