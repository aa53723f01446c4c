//! Modal stack for app-level dialogs
//!
//! The lightbox and the drawer are page state, not modals. This stack only
//! holds dialogs that sit above the page: the submission confirmation, the
//! help overlay and the quit prompt.

use super::form::Submission;

/// A dialog displayed on top of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Confirmation shown after a successful form submission
    Confirmation(Submission),
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            name: "Anna".to_string(),
            email: "anna@mail.ru".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.push(Modal::Confirmation(submission()));
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(&Modal::Confirmation(submission())));
        assert_eq!(stack.pop(), Some(Modal::Confirmation(submission())));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = ModalStack::new();
        assert_eq!(stack.pop(), None);
        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));
    }
}
