//! Page component - the scrolling single-page document
//!
//! Builds the whole page (hero, about, gallery, contacts, footer) from the
//! current state, records section anchors in the viewport and renders the
//! visible window. Owns the gallery cursor and the contact form focus.

use super::contact_form::ContactFormComponent;
use super::document::{DocBuilder, DocTarget, PageDocument};
use super::gallery::{gallery, GalleryCursor};
use super::layout::contains;
use super::sections;
use crate::action::Action;
use crate::component::Component;
use crate::model::content::{AssetBase, SiteContent};
use crate::model::navigation::NAV_LINKS;
use crate::model::page::PageState;
use crate::model::ui::Focus;
use crate::model::viewport::PageViewport;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Left and right margin of the page text
const PAGE_INDENT: u16 = 2;

/// Everything the page needs to render
pub struct PageRenderContext<'a> {
    pub content: &'a SiteContent,
    pub assets: &'a AssetBase,
    pub state: &'a PageState,
    pub focus: Focus,
    pub year: i32,
}

/// Build the full page document for a given body width
pub fn build_document(
    ctx: &PageRenderContext<'_>,
    width: u16,
    cursor: GalleryCursor,
    form: &ContactFormComponent,
) -> PageDocument {
    let content_width = width.saturating_sub(PAGE_INDENT * 2).max(1) as usize;
    let mut doc = DocBuilder::new(content_width, PAGE_INDENT);

    sections::hero(&mut doc, ctx.content, ctx.assets);
    sections::about(&mut doc, ctx.content);
    gallery(&mut doc, &ctx.content.gallery, ctx.assets, cursor);
    sections::contact_details(&mut doc, ctx.content);
    form.render(&mut doc, &ctx.state.form, ctx.focus == Focus::Form);
    sections::footer(&mut doc, ctx.content, ctx.year);

    doc.finish()
}

pub struct PageComponent {
    pub cursor: GalleryCursor,
    pub form: ContactFormComponent,
    gallery_ids: Vec<u32>,
    tel_uri: String,
    mailto_uri: String,
    social_url: Option<String>,
    /// Last rendered document, for mouse hit-testing
    document: PageDocument,
    last_area: Rect,
    last_offset: usize,
}

impl PageComponent {
    pub fn new(content: &SiteContent) -> Self {
        Self {
            cursor: GalleryCursor::default(),
            form: ContactFormComponent::new(),
            gallery_ids: content.gallery.iter().map(|item| item.id).collect(),
            tel_uri: content.contacts.tel_uri(),
            mailto_uri: content.contacts.mailto_uri(),
            social_url: content.contacts.socials.first().map(|s| s.url.clone()),
            document: PageDocument::default(),
            last_area: Rect::default(),
            last_offset: 0,
        }
    }

    pub fn selected_image(&self) -> Option<u32> {
        self.cursor.selected(&self.gallery_ids).copied()
    }

    /// Rebuild the document for `area` and publish its anchors to the viewport
    pub fn layout(
        &mut self,
        area: Rect,
        ctx: &PageRenderContext<'_>,
        viewport: &mut PageViewport,
    ) {
        let document = build_document(ctx, area.width, self.cursor, &self.form);
        viewport.set_layout(
            document.anchors.clone(),
            document.height(),
            area.height as usize,
        );
        self.document = document;
        self.last_area = area;
        self.last_offset = viewport.offset();
    }

    pub fn draw_with_context(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &PageRenderContext<'_>,
        viewport: &mut PageViewport,
    ) -> Result<()> {
        self.layout(area, ctx, viewport);

        let offset = self.last_offset;
        let visible = area.height as usize;
        let end = (offset + visible).min(self.document.height());
        let lines = self.document.lines[offset.min(end)..end].to_vec();
        frame.render_widget(Paragraph::new(lines), area);

        let total = self.document.height();
        if total > visible {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible)).position(offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                area,
                &mut scrollbar_state,
            );
        }
        Ok(())
    }

    fn target_action(&self, target: &DocTarget) -> Action {
        match target {
            DocTarget::Nav(href) => Action::Navigate(href.to_string()),
            DocTarget::Tile(id) => Action::OpenImage(*id),
            DocTarget::Field(field) => Action::EnterForm(Some(*field)),
            DocTarget::Submit => Action::SubmitForm,
            DocTarget::Link(uri) => Action::OpenLink(uri.clone()),
        }
    }
}

impl Component for PageComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('d') if ctrl => Some(Action::PageDown),
            KeyCode::Char('u') if ctrl => Some(Action::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') => Some(Action::ScrollTop),
            KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),

            // Section links
            KeyCode::Home => Some(Action::Navigate("#home".to_string())),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                NAV_LINKS.get(index).map(|link| Action::Navigate(link.href.to_string()))
            }
            KeyCode::Char('p') => Some(Action::Navigate("#portfolio".to_string())),
            KeyCode::Char('c') => Some(Action::Navigate("#contacts".to_string())),
            KeyCode::Char('m') => Some(Action::ToggleMenu),

            // Gallery
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTile),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTile),
            KeyCode::Enter => self.selected_image().map(Action::OpenImage),

            // Form
            KeyCode::Char('i') | KeyCode::Tab => Some(Action::EnterForm(None)),

            // Outbound links
            KeyCode::Char('P') => Some(Action::OpenLink(self.tel_uri.clone())),
            KeyCode::Char('E') => Some(Action::OpenLink(self.mailto_uri.clone())),
            KeyCode::Char('T') => self.social_url.clone().map(Action::OpenLink),

            // Dialogs
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !contains(self.last_area, mouse.column, mouse.row) {
            return Ok(None);
        }

        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::Down(MouseButton::Left) => {
                let line = self.last_offset + (mouse.row - self.last_area.y) as usize;
                let column = mouse.column - self.last_area.x;
                self.document
                    .hit(line, column)
                    .map(|target| self.target_action(target))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let len = self.gallery_ids.len();
        match action {
            Action::NextTile => self.cursor.next(len),
            Action::PrevTile => self.cursor.previous(len),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Use draw_with_context instead
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::FormField;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render(page: &mut PageComponent, state: &PageState, viewport: &mut PageViewport) -> String {
        let content = SiteContent::default();
        let assets = AssetBase::default();
        let ctx = PageRenderContext {
            content: &content,
            assets: &assets,
            state,
            focus: Focus::Page,
            year: 2026,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| {
                page.draw_with_context(frame, frame.area(), &ctx, viewport)
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
    fn test_document_has_all_sections() {
        let content = SiteContent::default();
        let assets = AssetBase::default();
        let state = PageState::new();
        let ctx = PageRenderContext {
            content: &content,
            assets: &assets,
            state: &state,
            focus: Focus::Page,
            year: 2026,
        };
        let doc = build_document(&ctx, 80, GalleryCursor::default(), &ContactFormComponent::new());

        let mut lines: Vec<usize> = ["home", "about", "portfolio", "contacts"]
            .iter()
            .map(|id| doc.anchors[*id])
            .collect();
        let sorted = {
            let mut s = lines.clone();
            s.sort();
            s
        };
        assert_eq!(lines, sorted, "sections render in page order");
        lines.dedup();
        assert_eq!(lines.len(), 4);

        let tiles = doc
            .hits
            .iter()
            .filter(|h| matches!(h.target, DocTarget::Tile(_)))
            .count();
        assert_eq!(tiles, 5);
    }

    #[test]
    fn test_render_top_of_page() {
        let content = SiteContent::default();
        let mut page = PageComponent::new(&content);
        let mut viewport = PageViewport::new();
        let screen = render(&mut page, &PageState::new(), &mut viewport);

        assert!(screen.contains("Кретова Арина"));
        assert!(screen.contains("живопись, графика, портреты"));
        assert!(viewport.anchor("contacts").is_some());
        assert!(viewport.max_offset() > 0);
    }

    #[test]
    fn test_render_scrolled_to_gallery() {
        let content = SiteContent::default();
        let mut page = PageComponent::new(&content);
        let mut viewport = PageViewport::new();
        let state = PageState::new();
        render(&mut page, &state, &mut viewport);

        viewport.jump_to(viewport.anchor("portfolio").unwrap());
        let screen = render(&mut page, &state, &mut viewport);
        assert!(screen.contains("Портфолио"));
        assert!(screen.contains("Работа 5"));
    }

    #[test]
    fn test_click_tile_opens_image() {
        let content = SiteContent::default();
        let mut page = PageComponent::new(&content);
        let mut viewport = PageViewport::new();
        let state = PageState::new();
        render(&mut page, &state, &mut viewport);

        let tile_hit = |page: &PageComponent, id: u32| {
            page.document
                .hits
                .iter()
                .find(|h| h.target == DocTarget::Tile(id))
                .cloned()
                .unwrap()
        };
        viewport.jump_to(tile_hit(&page, 1).lines.start);
        render(&mut page, &state, &mut viewport);

        for id in [1, 2] {
            let hit = tile_hit(&page, id);
            let row = (hit.lines.start + 1 - viewport.offset()) as u16;
            let action = page.handle_mouse_event(click(hit.columns.start + 1, row)).unwrap();
            assert_eq!(action, Some(Action::OpenImage(id)));
        }

        // The gap between tiles hits nothing
        let hit = tile_hit(&page, 1);
        let row = (hit.lines.start - viewport.offset()) as u16;
        let action = page.handle_mouse_event(click(hit.columns.end, row)).unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_click_form_field_focuses_it() {
        let content = SiteContent::default();
        let mut page = PageComponent::new(&content);
        let mut viewport = PageViewport::new();
        let state = PageState::new();
        render(&mut page, &state, &mut viewport);

        let field_line = page
            .document
            .hits
            .iter()
            .find(|h| h.target == DocTarget::Field(FormField::Email))
            .map(|h| h.lines.start)
            .unwrap();
        viewport.jump_to(field_line);
        render(&mut page, &state, &mut viewport);

        let row = (field_line - viewport.offset()) as u16;
        let action = page.handle_mouse_event(click(PAGE_INDENT + 1, row)).unwrap();
        assert_eq!(action, Some(Action::EnterForm(Some(FormField::Email))));
    }

    #[test]
    fn test_keys_map_to_actions() {
        let content = SiteContent::default();
        let mut page = PageComponent::new(&content);
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        assert_eq!(
            page.handle_key_event(key('3')).unwrap(),
            Some(Action::Navigate("#portfolio".to_string()))
        );
        assert_eq!(page.handle_key_event(key('m')).unwrap(), Some(Action::ToggleMenu));
        assert_eq!(
            page.handle_key_event(key('P')).unwrap(),
            Some(Action::OpenLink("tel:+79119163364".to_string()))
        );

        page.update(Action::NextTile).unwrap();
        page.update(Action::NextTile).unwrap();
        assert_eq!(
            page.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
                .unwrap(),
            Some(Action::OpenImage(3))
        );
    }
}
