//! Lightbox state machine
//!
//! Two states: closed (no active image) and open (one active image).

use super::content::GalleryItem;

/// Where a pointer press landed while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the card
    Backdrop,
    /// The explicit close control
    CloseButton,
    /// Anywhere inside the content card (image or caption)
    Card,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    active: Option<GalleryItem>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&GalleryItem> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Show an item. Opening while open replaces the active item.
    pub fn open(&mut self, item: GalleryItem) {
        self.active = Some(item);
    }

    /// Dismiss the lightbox. No-op when already closed.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// Apply a pointer press. Presses on the card stop at the card boundary.
    ///
    /// Returns true when the lightbox was closed by this press.
    pub fn press(&mut self, target: PointerTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        match target {
            PointerTarget::Backdrop | PointerTarget::CloseButton => {
                self.close();
                true
            }
            PointerTarget::Card => false,
        }
    }
}
