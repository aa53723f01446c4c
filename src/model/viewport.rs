//! Page viewport - scroll position over the rendered document
//!
//! The page is one long column of lines. Section anchors are recorded every
//! time the document is laid out; scrolling targets a line and, for smooth
//! scrolling, approaches it a little on every tick.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct PageViewport {
    /// Section id -> first document line of that section
    anchors: HashMap<String, usize>,
    /// Total document height in lines
    content_height: usize,
    /// Visible height in lines
    viewport_height: usize,
    /// Current top line
    offset: usize,
    /// Line the smooth scroll is heading to
    target: Option<usize>,
}

impl PageViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest layout and re-clamp the scroll position
    pub fn set_layout(
        &mut self,
        anchors: HashMap<String, usize>,
        content_height: usize,
        viewport_height: usize,
    ) {
        self.anchors = anchors;
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.clamp(self.offset);
        self.target = self.target.map(|t| self.clamp(t));
    }

    pub fn anchor(&self, id: &str) -> Option<usize> {
        self.anchors.get(id).copied()
    }

    /// Section whose anchor is the last one at or above the top line
    pub fn current_section(&self) -> Option<&str> {
        self.anchors
            .iter()
            .filter(|(_, line)| **line <= self.offset)
            .max_by_key(|(_, line)| **line)
            .map(|(id, _)| id.as_str())
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    fn clamp(&self, line: usize) -> usize {
        line.min(self.max_offset())
    }

    /// Jump straight to a line, cancelling any animation
    pub fn jump_to(&mut self, line: usize) {
        self.target = None;
        self.offset = self.clamp(line);
    }

    /// Start an animated scroll towards a line
    pub fn animate_to(&mut self, line: usize) {
        let target = self.clamp(line);
        if target == self.offset {
            self.target = None;
        } else {
            self.target = Some(target);
        }
    }

    /// Manual scrolling cancels any animation
    pub fn scroll_by(&mut self, delta: isize) {
        let line = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.jump_to(line);
    }

    /// Advance the animation by one step. Returns true if the offset moved.
    ///
    /// Each step covers a third of the remaining distance (at least one
    /// line), so the scroll eases out and always terminates.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let distance = target.abs_diff(self.offset);
        let step = (distance / 3).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.target = None;
        }
        true
    }
}
