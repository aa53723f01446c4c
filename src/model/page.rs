//! Page state - the observed state behind the whole page

use super::form::FormController;
use super::lightbox::Lightbox;
use super::navigation::MenuState;

/// Independent controller states, read-modify-written one action at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub form: FormController,
    pub lightbox: Lightbox,
    pub menu: MenuState,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }
}
