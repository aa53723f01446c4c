//! External service interactions
//!
//! - Opening outbound links (tel:, mailto:, web) with the system opener
//! - Delivering contact-form submissions

pub mod opener;
pub mod submission;

pub use opener::{LinkOpener, SystemOpener};
pub use submission::{LocalSink, SubmissionSink};
