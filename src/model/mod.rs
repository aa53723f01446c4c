//! Model layer - centralized state management
//!
//! - `PageState` - the observed page state (form, lightbox, menu)
//! - `SiteContent` - static page content and assets
//! - `PageViewport` - scroll position and section anchors
//! - `ModalStack` - app-level dialogs

pub mod content;
pub mod form;
pub mod lightbox;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod store;
pub mod ui;
pub mod viewport;

pub use content::{AssetBase, GalleryItem, SiteContent};
pub use form::{FormController, FormField, SubmitOutcome, Submission};
pub use lightbox::{Lightbox, PointerTarget};
pub use navigation::{MenuState, NavLink, NAV_LINKS};
pub use page::PageState;
pub use store::Store;
