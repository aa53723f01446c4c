//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::form::FormField;
use crate::model::lightbox::PointerTarget;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to the page
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation & Menu
    // ─────────────────────────────────────────────────────────────────────────
    /// Activate an in-page link (`#section`)
    Navigate(String),
    /// Flip the drawer menu
    ToggleMenu,
    /// Close the drawer without navigating
    CloseMenu,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery & Lightbox
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the tile cursor right
    NextTile,
    /// Move the tile cursor left
    PrevTile,
    /// Open the lightbox on a gallery item
    OpenImage(u32),
    /// Dismiss the lightbox
    CloseLightbox,
    /// Pointer press while the lightbox is open
    LightboxPress(PointerTarget),

    // ─────────────────────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Route typing into the form, optionally focusing a field
    EnterForm(Option<FormField>),
    /// Return keyboard to page shortcuts
    ExitForm,
    /// A field's full new value
    FieldChanged(FormField, String),
    /// Submit the form (validated inside the form controller)
    SubmitForm,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Outbound Links
    // ─────────────────────────────────────────────────────────────────────────
    /// Hand a URI (`tel:`, `mailto:`, `https:`) to the system opener
    OpenLink(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ScrollTop => write!(f, "ScrollTop"),
            Action::ScrollBottom => write!(f, "ScrollBottom"),
            Action::Navigate(href) => write!(f, "Navigate({})", href),
            Action::ToggleMenu => write!(f, "ToggleMenu"),
            Action::CloseMenu => write!(f, "CloseMenu"),
            Action::NextTile => write!(f, "NextTile"),
            Action::PrevTile => write!(f, "PrevTile"),
            Action::OpenImage(id) => write!(f, "OpenImage({})", id),
            Action::CloseLightbox => write!(f, "CloseLightbox"),
            Action::LightboxPress(target) => write!(f, "LightboxPress({:?})", target),
            Action::EnterForm(Some(field)) => write!(f, "EnterForm({:?})", field),
            Action::EnterForm(None) => write!(f, "EnterForm"),
            Action::ExitForm => write!(f, "ExitForm"),
            // Field values are visitor input; keep them out of logs
            Action::FieldChanged(field, value) => {
                write!(f, "FieldChanged({:?}, {} chars)", field, value.chars().count())
            }
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::OpenLink(uri) => write!(f, "OpenLink({})", uri),
        }
    }
}
