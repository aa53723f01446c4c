//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use crate::environment::ViewEnvironment;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The lifecycle is:
/// 1. `mount` - acquire page-level resources (key listeners)
/// 2. `handle_key_event` / `handle_mouse_event` - convert events to Actions
/// 3. `update` - process Actions and update state
/// 4. `draw` - render the component
/// 5. `unmount` - release whatever `mount` acquired
pub trait Component {
    /// Called once when the component joins the view
    fn mount(&mut self, env: &mut dyn ViewEnvironment) -> Result<()> {
        let _ = env;
        Ok(())
    }

    /// Called when the view is torn down. Must undo `mount`.
    fn unmount(&mut self, env: &mut dyn ViewEnvironment) {
        let _ = env;
    }

    /// Handle a key event, returning an optional Action
    ///
    /// The component may adjust purely local presentation state (cursors)
    /// here, but shared state only changes through the returned Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
