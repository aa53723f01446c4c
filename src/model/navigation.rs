//! In-page navigation and the mobile drawer menu

use crate::environment::{ScrollBehavior, ScrollBlock, ScrollOptions, ViewEnvironment};

/// A link to a page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Section id the link points to
    pub fn target_id(&self) -> &'static str {
        section_id(self.href)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        href: "#home",
        label: "Главная",
    },
    NavLink {
        href: "#about",
        label: "Обо мне",
    },
    NavLink {
        href: "#portfolio",
        label: "Портфолио",
    },
    NavLink {
        href: "#contacts",
        label: "Контакты",
    },
];

/// Strip the fragment marker from an href
pub fn section_id(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Mobile drawer state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// What a link activation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOutcome {
    /// Section the activation resolved to
    pub target: String,
    /// False when no element carries that id
    pub scrolled: bool,
}

/// Handle a link activation.
///
/// The activation is always consumed here: the page never jumps on its own.
/// A found target is smooth-scrolled to its start edge; a missing one is
/// skipped silently. The drawer closes either way.
pub fn navigate(env: &mut dyn ViewEnvironment, menu: &mut MenuState, href: &str) -> NavOutcome {
    let target = section_id(href).to_string();

    let scrolled = match env.element_by_id(&target) {
        Some(element) => {
            env.scroll_into_view(
                &element,
                ScrollOptions {
                    behavior: ScrollBehavior::Smooth,
                    block: ScrollBlock::Start,
                },
            );
            true
        }
        None => {
            tracing::debug!(%target, "navigation target not found");
            false
        }
    };

    menu.close();
    NavOutcome { target, scrolled }
}
