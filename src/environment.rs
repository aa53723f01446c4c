//! View environment - the page-level capabilities controllers may use
//!
//! Controllers never touch the terminal directly. They look elements up by
//! id, ask for them to be scrolled into view, and register page-wide key
//! listeners through this trait, so they can be driven by a fake in tests.

use crate::action::Action;
use crate::model::viewport::PageViewport;
use crossterm::event::KeyEvent;

/// A located page element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    /// First document line of the element
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    #[cfg(test)]
    Instant,
}

/// Which edge of the element lines up with the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Handle for a registered key listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A page-wide key listener. It sees every key press and may emit an action.
pub type KeyListener = Box<dyn Fn(&KeyEvent) -> Option<Action>>;

pub trait ViewEnvironment {
    fn element_by_id(&self, id: &str) -> Option<Element>;

    fn scroll_into_view(&mut self, element: &Element, options: ScrollOptions);

    fn add_key_listener(&mut self, listener: KeyListener) -> ListenerId;

    /// Returns false if the listener was not registered
    fn remove_key_listener(&mut self, id: ListenerId) -> bool;
}

/// Registered key listeners, in registration order
#[derive(Default)]
pub struct KeyListeners {
    listeners: Vec<(ListenerId, KeyListener)>,
    next_id: u64,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: KeyListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Offer a key to every listener and collect the actions they emit
    pub fn dispatch(&self, key: &KeyEvent) -> Vec<Action> {
        self.listeners
            .iter()
            .filter_map(|(_, listener)| listener(key))
            .collect()
    }
}

/// Terminal implementation: the page viewport plus the listener registry
#[derive(Default)]
pub struct TerminalEnvironment {
    pub viewport: PageViewport,
    pub key_listeners: KeyListeners,
}

impl TerminalEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewEnvironment for TerminalEnvironment {
    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.viewport.anchor(id).map(|line| Element {
            id: id.to_string(),
            line,
        })
    }

    fn scroll_into_view(&mut self, element: &Element, options: ScrollOptions) {
        let line = match options.block {
            ScrollBlock::Start => element.line,
            ScrollBlock::Center => element
                .line
                .saturating_sub(self.viewport.viewport_height() / 2),
        };
        match options.behavior {
            ScrollBehavior::Smooth => self.viewport.animate_to(line),
            #[cfg(test)]
            ScrollBehavior::Instant => self.viewport.jump_to(line),
        }
    }

    fn add_key_listener(&mut self, listener: KeyListener) -> ListenerId {
        self.key_listeners.add(listener)
    }

    fn remove_key_listener(&mut self, id: ListenerId) -> bool {
        self.key_listeners.remove(id)
    }
}
