//! Sticky nav bar
//!
//! Brand on the left, one entry per nav section with its jump key. From the
//! `Selector` variant on, the entry for the section at the top of the
//! viewport is highlighted as the page scrolls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use catworld_app::Section;
use catworld_core::PageVariant;

use crate::theme::{palette, styles};

pub struct NavBar {
    variant: PageVariant,
    active: Section,
}

impl NavBar {
    pub fn new(variant: PageVariant, active: Section) -> Self {
        Self { variant, active }
    }

    /// The plain first iteration has a static nav
    fn tracks_scroll(&self) -> bool {
        self.variant != PageVariant::Classic
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_inactive())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled("🐱 CatWorld", styles::accent_bold()),
            Span::raw("  "),
        ];

        for section in Section::NAV {
            let key = section.nav_key().map(String::from).unwrap_or_default();
            let label = format!(" {} ", section.title());
            let style = if self.tracks_scroll() && section == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_nav_lists_sections_with_keys() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(NavBar::new(PageVariant::Full, Section::Home), term.area());

        assert!(term.buffer_contains("CatWorld"));
        assert!(term.buffer_contains("[g] Home"));
        assert!(term.buffer_contains("[c] Characteristics"));
        assert!(term.buffer_contains("[b] Breeds"));
        assert!(term.buffer_contains("[a] Facts"));
    }

    #[test]
    fn test_active_section_highlighted() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(NavBar::new(PageVariant::Full, Section::Breeds), term.area());

        let buffer = term.buffer();
        let row: Vec<_> = (0..100).map(|x| &buffer[(x, 1)]).collect();
        let highlighted: String = row
            .iter()
            .filter(|c| c.bg == palette::ACCENT)
            .map(|c| c.symbol())
            .collect();
        assert_eq!(highlighted.trim(), "Breeds");
    }

    #[test]
    fn test_classic_nav_is_static() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(NavBar::new(PageVariant::Classic, Section::Breeds), term.area());

        let buffer = term.buffer();
        assert!((0..100).all(|x| buffer[(x, 1)].bg != palette::ACCENT));
    }
}
