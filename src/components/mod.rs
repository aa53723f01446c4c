//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod confirmation_dialog;
pub mod contact_form;
pub mod document;
pub mod drawer;
pub mod gallery;
pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod lightbox;
pub mod page;
pub mod quit_dialog;
pub mod sections;
pub mod splash;
pub mod status_bar;
pub mod text;

pub use confirmation_dialog::ConfirmationDialog;
pub use contact_form::ContactFormComponent;
pub use drawer::DrawerComponent;
pub use header::HeaderComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_page_layout, centered_popup};
pub use lightbox::LightboxComponent;
pub use page::{PageComponent, PageRenderContext};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use status_bar::{render_help_bar, render_status_bar, HintMode};
