//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Nav bar height: top border + nav row + bottom border
pub const NAV_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Sticky nav bar
    pub nav: Rect,

    /// Scrolling page viewport
    pub page: Rect,

    /// Single-row status / key hint bar
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        page: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.nav.height, NAV_HEIGHT);
        assert_eq!(layout.status.height, 1);
        // Page viewport gets the rest: 24 - 3 - 1
        assert_eq!(layout.page.height, 20);
        assert_eq!(layout.page.y, NAV_HEIGHT);
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let layout = create(Rect::new(0, 0, 20, 5));
        assert!(layout.page.height >= 1);
        assert_eq!(layout.status.y + layout.status.height, 5);
    }
}
