//! Lightbox overlay - one enlarged artwork above a dimmed page
//!
//! The overlay itself is drawn only while an image is active, but the
//! component is mounted for the whole page lifetime: mounting registers the
//! page-wide Escape listener, unmounting removes it.

use super::centered_popup;
use super::layout::contains;
use super::text::{display_width, truncate, wrap};
use crate::action::Action;
use crate::component::Component;
use crate::environment::{ListenerId, ViewEnvironment};
use crate::model::content::{AssetBase, GalleryItem};
use crate::model::lightbox::PointerTarget;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CLOSE_LABEL: &str = " ✕ ";

#[derive(Default)]
pub struct LightboxComponent {
    listener: Option<ListenerId>,
    /// Card and close control from the last draw
    card: Rect,
    close_button: Rect,
}

impl LightboxComponent {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Which part of the overlay a pointer press landed on
    pub fn classify(&self, column: u16, row: u16) -> PointerTarget {
        if contains(self.close_button, column, row) {
            PointerTarget::CloseButton
        } else if contains(self.card, column, row) {
            PointerTarget::Card
        } else {
            PointerTarget::Backdrop
        }
    }

    pub fn draw_with_item(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        item: &GalleryItem,
        assets: &AssetBase,
    ) -> Result<()> {
        // Backdrop
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Black).fg(Color::DarkGray)),
            area,
        );

        let width = area.width.saturating_sub(8).clamp(1, 72);
        let height = area.height.saturating_sub(4).clamp(1, 18);
        let card = centered_popup(area, width, height);
        self.card = card;

        frame.render_widget(Clear, card);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(Span::styled(
                format!(" {} ", item.alt),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let close_width = display_width(CLOSE_LABEL) as u16;
        self.close_button = Rect::new(
            card.x + card.width.saturating_sub(close_width + 1),
            card.y,
            close_width.min(card.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                CLOSE_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            self.close_button,
        );

        // Image frame: the terminal shows the source, the caption sits below
        let url = assets.resolve(&item.src);
        let frame_width = inner.width.saturating_sub(2) as usize;
        let image_rows = inner.height.saturating_sub(3) as usize;
        let mut lines = Vec::new();
        for row in 0..image_rows {
            let text = if row == image_rows / 2 {
                truncate(&url, frame_width)
            } else {
                String::new()
            };
            lines.push(Line::from(Span::styled(
                format!(" {} ", text),
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        for caption in wrap(&item.alt, inner.width as usize) {
            lines.push(Line::from(Span::styled(
                caption,
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Esc / x / click outside to close",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false }),
            inner,
        );
        Ok(())
    }
}

impl Component for LightboxComponent {
    fn mount(&mut self, env: &mut dyn ViewEnvironment) -> Result<()> {
        if self.listener.is_some() {
            return Ok(());
        }
        let id = env.add_key_listener(Box::new(|key: &KeyEvent| {
            (key.code == KeyCode::Esc).then_some(Action::CloseLightbox)
        }));
        self.listener = Some(id);
        Ok(())
    }

    fn unmount(&mut self, env: &mut dyn ViewEnvironment) {
        if let Some(id) = self.listener.take() {
            env.remove_key_listener(id);
        }
    }

    /// Escape comes through the page-wide listener, so only `x` is handled here
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('x') | KeyCode::Char('X') => Some(Action::CloseLightbox),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(Some(Action::LightboxPress(
            self.classify(mouse.column, mouse.row),
        )))
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Use draw_with_item instead
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::testing::FakeEnvironment;
    use crate::model::content::SiteContent;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drawn(lightbox: &mut LightboxComponent) -> String {
        let content = SiteContent::default();
        let item = content.gallery_item(3).unwrap().clone();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                lightbox
                    .draw_with_item(frame, frame.area(), &item, &AssetBase::new("/site"))
                    .unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_mount_registers_listener_once() {
        let mut env = FakeEnvironment::default();
        let mut lightbox = LightboxComponent::new();

        lightbox.mount(&mut env).unwrap();
        lightbox.mount(&mut env).unwrap();
        assert_eq!(env.listeners.len(), 1);
        assert!(lightbox.is_mounted());

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(env.listeners.dispatch(&esc), vec![Action::CloseLightbox]);
        let other = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(env.listeners.dispatch(&other).is_empty());

        lightbox.unmount(&mut env);
        assert!(env.listeners.is_empty());
        assert!(!lightbox.is_mounted());

        // Unmounting again is harmless; remounting registers a fresh listener
        lightbox.unmount(&mut env);
        lightbox.mount(&mut env).unwrap();
        assert_eq!(env.listeners.len(), 1);
    }

    #[test]
    fn test_draw_shows_item() {
        let mut lightbox = LightboxComponent::new();
        let screen = drawn(&mut lightbox);
        assert!(screen.contains("Работа 3"));
        assert!(screen.contains("/site/works/Art3.jpg"));
    }

    #[test]
    fn test_press_classification() {
        let mut lightbox = LightboxComponent::new();
        drawn(&mut lightbox);

        let close = lightbox.close_button;
        assert_eq!(
            lightbox.handle_mouse_event(press(close.x + 1, close.y)).unwrap(),
            Some(Action::LightboxPress(PointerTarget::CloseButton))
        );

        let card = lightbox.card;
        assert_eq!(
            lightbox
                .handle_mouse_event(press(card.x + card.width / 2, card.y + card.height / 2))
                .unwrap(),
            Some(Action::LightboxPress(PointerTarget::Card))
        );
        assert_eq!(
            lightbox.handle_mouse_event(press(0, 0)).unwrap(),
            Some(Action::LightboxPress(PointerTarget::Backdrop))
        );
    }

    #[test]
    fn test_x_closes() {
        let mut lightbox = LightboxComponent::new();
        assert_eq!(
            lightbox
                .handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
                .unwrap(),
            Some(Action::CloseLightbox)
        );
        assert_eq!(
            lightbox
                .handle_key_event(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE))
                .unwrap(),
            None
        );
    }
}
