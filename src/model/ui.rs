//! UI state - presentation state separate from page data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Where keyboard input goes when no overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page shortcuts: scrolling, navigation, gallery selection
    #[default]
    Page,
    /// Typing goes into the contact form
    Form,
}
