//! Where accepted contact-form submissions go
//!
//! The page only needs validate, confirm, reset. Delivery is a collaborator
//! behind `SubmissionSink` so a real endpoint can be slotted in.

use crate::model::form::Submission;
use anyhow::Result;
use std::fmt;

pub trait SubmissionSink {
    fn deliver(&mut self, submission: &Submission) -> Result<()>;
}

/// Log form of a submission: field lengths only, never the typed values
pub struct SubmissionSummary<'a>(pub &'a Submission);

impl fmt::Display for SubmissionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Submission {
            name,
            email,
            message,
        } = self.0;
        write!(
            f,
            "name={} chars, email={} chars, message={} chars",
            name.chars().count(),
            email.chars().count(),
            message.chars().count()
        )
    }
}

/// Accepts every submission locally and records it in the log
#[derive(Debug, Default)]
pub struct LocalSink {
    delivered: usize,
}

impl LocalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl SubmissionSink for LocalSink {
    fn deliver(&mut self, submission: &Submission) -> Result<()> {
        self.delivered += 1;
        tracing::info!(summary = %SubmissionSummary(submission), "contact form submitted");
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use anyhow::bail;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Keeps delivered submissions in a shared list the test can inspect
    #[derive(Default, Clone)]
    pub struct MemorySink {
        pub received: Rc<RefCell<Vec<Submission>>>,
        pub fail: bool,
    }

    impl SubmissionSink for MemorySink {
        fn deliver(&mut self, submission: &Submission) -> Result<()> {
            if self.fail {
                bail!("endpoint unavailable");
            }
            self.received.borrow_mut().push(submission.clone());
            Ok(())
        }
    }
}
