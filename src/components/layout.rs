//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals at least this wide show the inline nav links instead of the burger
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 90;

/// Main screen layout areas
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Whether a terminal cell lies inside a rect
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Fixed header, scrolling body, optional status line, help bar
pub fn calculate_page_layout(area: Rect, has_status: bool) -> PageLayout {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (status, help) = if has_status {
        (Some(chunks[2]), chunks[3])
    } else {
        (None, chunks[2])
    };

    PageLayout {
        header: chunks[0],
        body: chunks[1],
        status,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let small = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(small, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(5, 5, 3, 2);
        assert!(contains(rect, 5, 5));
        assert!(contains(rect, 7, 6));
        assert!(!contains(rect, 8, 6));
        assert!(!contains(rect, 5, 7));
        assert!(!contains(rect, 4, 5));
    }

    #[test]
    fn test_page_layout() {
        let layout = calculate_page_layout(Rect::new(0, 0, 80, 30), true);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.height, 25);
        assert_eq!(layout.status.map(|r| r.height), Some(1));
        assert_eq!(layout.help.y, 29);

        let layout = calculate_page_layout(Rect::new(0, 0, 80, 30), false);
        assert!(layout.status.is_none());
        assert_eq!(layout.body.height, 26);
    }
}
