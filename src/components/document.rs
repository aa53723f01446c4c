//! Page document - the rendered page as lines, anchors and hit regions
//!
//! Sections append styled lines to a [`DocBuilder`]. Elements with an id get
//! an anchor at their first line; clickable things record the lines and
//! columns they occupy so mouse presses can be mapped back to a target.

use crate::model::form::FormField;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::collections::HashMap;
use std::ops::Range;

/// Something a click on the page can hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocTarget {
    /// In-page link (`#section`)
    Nav(&'static str),
    /// Gallery tile by item id
    Tile(u32),
    /// Form input
    Field(FormField),
    /// Enabled submit button
    Submit,
    /// Outbound URI
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocHit {
    pub lines: Range<usize>,
    pub columns: Range<u16>,
    pub target: DocTarget,
}

/// Finished document
#[derive(Debug, Default)]
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub anchors: HashMap<String, usize>,
    pub hits: Vec<DocHit>,
}

impl PageDocument {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Topmost target under a document cell
    pub fn hit(&self, line: usize, column: u16) -> Option<&DocTarget> {
        self.hits
            .iter()
            .find(|hit| hit.lines.contains(&line) && hit.columns.contains(&column))
            .map(|hit| &hit.target)
    }

    /// Plain text of a line
    #[cfg(test)]
    pub fn line_text(&self, index: usize) -> String {
        self.lines
            .get(index)
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .unwrap_or_default()
    }
}

pub struct DocBuilder {
    doc: PageDocument,
    /// Usable content width in columns
    pub width: usize,
    /// Left margin in columns
    pub indent: u16,
}

impl DocBuilder {
    pub fn new(width: usize, indent: u16) -> Self {
        Self {
            doc: PageDocument::default(),
            width,
            indent,
        }
    }

    pub fn current_line(&self) -> usize {
        self.doc.lines.len()
    }

    /// Mark the next line as the start of element `id`
    pub fn anchor(&mut self, id: &str) {
        let line = self.current_line();
        self.doc.anchors.insert(id.to_string(), line);
    }

    pub fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        if self.indent > 0 {
            all.push(Span::raw(" ".repeat(self.indent as usize)));
        }
        all.extend(spans);
        self.doc.lines.push(Line::from(all));
    }

    pub fn text(&mut self, text: impl Into<String>, style: Style) {
        self.push(vec![Span::styled(text.into(), style)]);
    }

    pub fn blank(&mut self) {
        self.doc.lines.push(Line::from(""));
    }

    /// Wrapped paragraph
    pub fn paragraph(&mut self, text: &str, style: Style) {
        for line in super::text::wrap(text, self.width) {
            self.text(line, style);
        }
    }

    /// Section heading with an underline
    pub fn heading(&mut self, title: &str) {
        self.text(
            title.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
        self.text(
            "─".repeat(super::text::display_width(title).max(1)),
            Style::default().fg(Color::DarkGray),
        );
    }

    /// Register a target over `lines`, columns relative to the content edge
    pub fn hit(&mut self, lines: Range<usize>, columns: Range<u16>, target: DocTarget) {
        let columns = columns.start + self.indent..columns.end + self.indent;
        self.doc.hits.push(DocHit {
            lines,
            columns,
            target,
        });
    }

    /// Register a target over a single full-width line
    pub fn hit_line(&mut self, line: usize, target: DocTarget) {
        let width = self.width as u16;
        self.hit(line..line + 1, 0..width, target);
    }

    pub fn finish(self) -> PageDocument {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_and_hits() {
        let mut builder = DocBuilder::new(20, 2);
        builder.text("top", Style::default());
        builder.anchor("about");
        builder.heading("Обо мне");
        let line = builder.current_line();
        builder.text("[ go ]", Style::default());
        builder.hit(line..line + 1, 0..6, DocTarget::Nav("#about"));
        let doc = builder.finish();

        assert_eq!(doc.anchors.get("about"), Some(&1));
        assert_eq!(doc.height(), 4);
        assert_eq!(doc.line_text(1), "  Обо мне");
        assert_eq!(doc.line_text(2), "  ───────");
        assert_eq!(doc.hit(3, 2), Some(&DocTarget::Nav("#about")));
        assert_eq!(doc.hit(3, 1), None);
        assert_eq!(doc.hit(3, 8), None);
        assert_eq!(doc.hit(2, 3), None);
    }

    #[test]
    fn test_paragraph_wraps_to_width() {
        let mut builder = DocBuilder::new(10, 0);
        builder.paragraph("alpha beta gamma", Style::default());
        let doc = builder.finish();
        assert_eq!(doc.height(), 2);
        assert_eq!(doc.line_text(0), "alpha beta");
        assert_eq!(doc.line_text(1), "gamma");
    }
}
