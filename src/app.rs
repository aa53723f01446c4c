//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_page_layout, render_help_bar, render_status_bar, ConfirmationDialog,
    DrawerComponent, HeaderComponent, HelpDialog, HintMode, LightboxComponent, PageComponent,
    PageRenderContext, QuitDialog, SplashComponent,
};
use crate::environment::TerminalEnvironment;
use crate::model::content::{AssetBase, SiteContent};
use crate::model::form::SubmitOutcome;
use crate::model::modal::{Modal, ModalStack};
use crate::model::navigation::{navigate, section_id};
use crate::model::page::PageState;
use crate::model::store::Store;
use crate::model::ui::{AppMode, Focus};
use crate::services::{LinkOpener, LocalSink, SubmissionSink, SystemOpener};
use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::cell::Cell;
use std::rc::Rc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Static page content
    pub content: SiteContent,

    /// Prefix for asset URLs
    pub assets: AssetBase,

    /// Observed page state (form, lightbox, menu)
    pub store: Store<PageState>,

    /// Viewport and page-wide key listeners
    pub env: TerminalEnvironment,

    /// Where keys go when no overlay is open
    pub focus: Focus,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Set by store notifications and presentational changes, cleared after a draw
    dirty: Rc<Cell<bool>>,

    sink: Box<dyn SubmissionSink>,
    opener: Box<dyn LinkOpener>,
    year: i32,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub header: HeaderComponent,
    pub page: PageComponent,
    pub drawer: DrawerComponent,
    pub lightbox: LightboxComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub confirmation_dialog: ConfirmationDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(content: SiteContent, assets: AssetBase) -> App {
        let dirty = Rc::new(Cell::new(true));
        let mut store = Store::new(PageState::new());
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));
        store.subscribe(|state: &PageState| {
            tracing::trace!(
                menu_open = state.menu.open,
                image = ?state.lightbox.active().map(|item| item.id),
                email_error = state.form.email_error.is_some(),
                "page state changed"
            );
        });

        let splash = SplashComponent::new(content.brand.clone(), content.hero.subtitle.clone());
        let page = PageComponent::new(&content);

        App {
            mode: AppMode::Splash,
            content,
            assets,
            store,
            env: TerminalEnvironment::new(),
            focus: Focus::Page,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            dirty,
            sink: Box::new(LocalSink::new()),
            opener: Box::new(SystemOpener::from_env()),
            year: Local::now().year(),
            splash,
            header: HeaderComponent::new(),
            page,
            drawer: DrawerComponent::new(),
            lightbox: LightboxComponent::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            confirmation_dialog: ConfirmationDialog,
        }
    }

    pub fn with_splash(mut self, show: bool) -> Self {
        self.mode = if show { AppMode::Splash } else { AppMode::Running };
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn SubmissionSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_opener(mut self, opener: Box<dyn LinkOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Mount page-lifetime components. Safe to call more than once.
    pub fn init(&mut self) -> Result<()> {
        self.splash.mount(&mut self.env)?;
        self.lightbox.mount(&mut self.env)?;
        Ok(())
    }

    /// Undo `init`; the page-wide Escape listener is released here
    pub fn teardown(&mut self) {
        self.lightbox.unmount(&mut self.env);
        self.splash.unmount(&mut self.env);
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_drawn(&self) {
        self.dirty.set(false);
    }

    fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Run an action and every follow-up action it produces
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(action) = current {
            current = self.update(action)?;
        }
        Ok(())
    }

    fn hint_mode(&self) -> HintMode {
        let state = self.store.get();
        if state.lightbox.is_open() {
            HintMode::Lightbox
        } else if state.menu.open {
            HintMode::Menu
        } else if self.focus == Focus::Form {
            HintMode::Form
        } else {
            HintMode::Page
        }
    }

    fn submit_form(&mut self) {
        match self.store.update(|state| state.form.on_submit()) {
            SubmitOutcome::Sent(submission) => match self.sink.deliver(&submission) {
                Ok(()) => {
                    self.status_message = None;
                    self.focus = Focus::Page;
                    self.page.form.focus_field(None);
                    self.modals.push(Modal::Confirmation(submission));
                }
                Err(err) => {
                    tracing::warn!("submission failed: {:#}", err);
                    self.status_message = Some(format!("Could not send the message: {:#}", err));
                    self.store.update(|state| state.form.restore(submission));
                }
            },
            SubmitOutcome::Rejected { error } => {
                tracing::debug!(%error, "submission rejected");
            }
        }
    }

    fn open_link(&mut self, uri: &str) {
        self.status_message = Some(match self.opener.open(uri) {
            Ok(()) => format!("Opened {}", uri),
            Err(err) => {
                tracing::warn!(%uri, "could not open link: {:#}", err);
                format!("Could not open {}: {:#}", uri, err)
            }
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                let lightbox_was_open = self.store.get().lightbox.is_open();

                // Page-wide listeners see every key before normal routing
                for action in self.env.key_listeners.dispatch(&key) {
                    self.apply(action)?;
                }

                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if lightbox_was_open {
                    self.lightbox.handle_key_event(key)
                } else if self.store.get().menu.open {
                    self.drawer.handle_key_event(key)
                } else if self.focus == Focus::Form {
                    self.page
                        .form
                        .handle_key_with_form(key, &self.store.get().form)
                } else {
                    self.page.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running {
            return Ok(None);
        }

        if let Some(modal) = self.modals.top().cloned() {
            return match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_mouse_event(mouse),
                Modal::Confirmation(_) => self.confirmation_dialog.handle_mouse_event(mouse),
                Modal::Help => self.help_dialog.handle_mouse_event(mouse),
            };
        }
        if self.store.get().lightbox.is_open() {
            return self.lightbox.handle_mouse_event(mouse);
        }
        if self.store.get().menu.open {
            if let Some(action) = self.drawer.handle_mouse_event(mouse)? {
                return Ok(Some(action));
            }
            if self.drawer.contains(mouse.column, mouse.row) {
                return Ok(None);
            }
        }
        if let Some(action) = self.header.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        self.page.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            tracing::debug!(%action, "update");
        }

        // Store-backed changes redraw through the store subscription
        let redraw = !matches!(
            action,
            Action::Tick
                | Action::ForceQuit
                | Action::Navigate(_)
                | Action::ToggleMenu
                | Action::CloseMenu
                | Action::OpenImage(_)
                | Action::CloseLightbox
                | Action::LightboxPress(_)
                | Action::FieldChanged(..)
        );

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
                if self.env.viewport.tick() {
                    self.mark_dirty();
                }
            }
            Action::Resize(_, _) => self.mark_dirty(),
            Action::ForceQuit => self.should_quit = true,
            Action::SplashComplete => {
                self.mode = AppMode::Running;
                self.mark_dirty();
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => self.env.viewport.scroll_by(-1),
            Action::ScrollDown => self.env.viewport.scroll_by(1),
            Action::PageUp | Action::PageDown => {
                let page = self.env.viewport.viewport_height().saturating_sub(2).max(1) as isize;
                let delta = if action == Action::PageUp { -page } else { page };
                self.env.viewport.scroll_by(delta);
            }
            Action::ScrollTop => self.env.viewport.jump_to(0),
            Action::ScrollBottom => {
                let bottom = self.env.viewport.max_offset();
                self.env.viewport.jump_to(bottom);
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation & Menu
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(href) => {
                if section_id(&href) != "contacts" {
                    self.focus = Focus::Page;
                }
                let env = &mut self.env;
                let outcome = self
                    .store
                    .update(|state| navigate(env, &mut state.menu, &href));
                tracing::debug!(section = %outcome.target, scrolled = outcome.scrolled, "navigated");
            }
            Action::ToggleMenu => {
                self.drawer.cursor = 0;
                self.store.update(|state| state.menu.toggle());
            }
            Action::CloseMenu => {
                if self.store.get().menu.open {
                    self.store.update(|state| state.menu.close());
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Gallery & Lightbox
            // ─────────────────────────────────────────────────────────────────
            Action::NextTile | Action::PrevTile => {
                self.page.update(action)?;
            }
            Action::OpenImage(id) => match self.content.gallery_item(id).cloned() {
                Some(item) => self.store.update(|state| state.lightbox.open(item)),
                None => tracing::warn!(id, "no gallery item with this id"),
            },
            Action::CloseLightbox => {
                if self.store.get().lightbox.is_open() {
                    self.store.update(|state| state.lightbox.close());
                }
            }
            Action::LightboxPress(target) => {
                let closed = self.store.update(|state| state.lightbox.press(target));
                tracing::debug!(?target, closed, "lightbox press");
            }

            // ─────────────────────────────────────────────────────────────────
            // Contact Form
            // ─────────────────────────────────────────────────────────────────
            Action::EnterForm(field) => {
                self.focus = Focus::Form;
                self.page.form.focus_field(field);
                if field.is_none() {
                    self.mark_dirty();
                    return Ok(Some(Action::Navigate("#contacts".to_string())));
                }
            }
            Action::ExitForm => self.focus = Focus::Page,
            Action::FieldChanged(field, value) => {
                self.store
                    .update(|state| state.form.on_field_change(field, value));
            }
            Action::SubmitForm => self.submit_form(),

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog = HelpDialog::default();
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Outbound Links
            // ─────────────────────────────────────────────────────────────────
            Action::OpenLink(uri) => self.open_link(&uri),
        }

        if redraw {
            self.mark_dirty();
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_page_layout(area, self.status_message.is_some());
                let state = self.store.get();

                let ctx = PageRenderContext {
                    content: &self.content,
                    assets: &self.assets,
                    state,
                    focus: self.focus,
                    year: self.year,
                };
                self.page
                    .draw_with_context(frame, layout.body, &ctx, &mut self.env.viewport)?;

                self.header.draw_with_state(
                    frame,
                    layout.header,
                    &self.content.brand,
                    state.menu.open,
                    self.env.viewport.current_section(),
                )?;

                if let (Some(status_area), Some(message)) = (layout.status, &self.status_message) {
                    render_status_bar(frame, status_area, message);
                }
                render_help_bar(frame, layout.help, self.hint_mode());

                if state.menu.open {
                    self.drawer.draw(frame, layout.body)?;
                }
                if let Some(item) = state.lightbox.active() {
                    self.lightbox
                        .draw_with_item(frame, area, item, &self.assets)?;
                }

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Confirmation(_) => self.confirmation_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Confirmation(submission) => {
                self.confirmation_dialog
                    .draw_with_submission(frame, area, submission)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}
