//! Gallery grid - artwork tiles with a keyboard cursor

use super::document::{DocBuilder, DocTarget};
use super::text::fit;
use crate::model::content::{AssetBase, GalleryItem};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

const TILE_WIDTH: usize = 26;
const TILE_GAP: usize = 2;
const TILE_HEIGHT: usize = 4;

/// Tile cursor for keyboard selection
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    pub index: usize,
}

impl GalleryCursor {
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
        }
    }

    pub fn selected<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

/// How many tiles fit side by side
pub fn columns_for(width: usize) -> usize {
    ((width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)).max(1)
}

pub fn gallery(
    doc: &mut DocBuilder,
    items: &[GalleryItem],
    assets: &AssetBase,
    cursor: GalleryCursor,
) {
    doc.anchor("portfolio");
    doc.heading("Портфолио");
    doc.blank();

    let columns = columns_for(doc.width);
    let inner = TILE_WIDTH - 4;

    for (row, chunk) in items.chunks(columns).enumerate() {
        let top = doc.current_line();
        let mut rows: [Vec<Span<'static>>; TILE_HEIGHT] = Default::default();

        for (col, item) in chunk.iter().enumerate() {
            let selected = row * columns + col == cursor.index;
            let border = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let marker = if selected { "▶ " } else { "▣ " };

            if col > 0 {
                for line in rows.iter_mut() {
                    line.push(Span::raw(" ".repeat(TILE_GAP)));
                }
            }
            rows[0].push(Span::styled(format!("╭{}╮", "─".repeat(TILE_WIDTH - 2)), border));
            rows[1].push(Span::styled("│ ", border));
            rows[1].push(Span::styled(
                fit(&format!("{}{}", marker, item.alt), inner),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            rows[1].push(Span::styled(" │", border));
            rows[2].push(Span::styled("│ ", border));
            rows[2].push(Span::styled(
                fit(&assets.resolve(&item.src), inner),
                Style::default().fg(Color::DarkGray),
            ));
            rows[2].push(Span::styled(" │", border));
            rows[3].push(Span::styled(format!("╰{}╯", "─".repeat(TILE_WIDTH - 2)), border));

            let left = (col * (TILE_WIDTH + TILE_GAP)) as u16;
            doc.hit(
                top..top + TILE_HEIGHT,
                left..left + TILE_WIDTH as u16,
                DocTarget::Tile(item.id),
            );
        }

        for line in rows {
            doc.push(line);
        }
    }

    doc.text(
        "←/→ select · Enter open",
        Style::default().fg(Color::DarkGray),
    );
    doc.blank();
}
