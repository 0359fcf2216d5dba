//! Hero banner with parallax and fade.
//!
//! The banner content lags behind the scroll by half (parallax) and fades
//! out over the banner's height. Both effects are pure functions of the
//! scroll offset.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use catworld_app::page::{hero_opacity, parallax_offset};
use catworld_core::{HERO_IMAGE_URL, HERO_SUBTITLE, HERO_TITLE};

use crate::theme::{palette, styles};

use super::truncate;

const CAT_ART: [&str; 3] = [r" /\_/\ ", r"( o.o )", r" > ^ < "];

/// Row of the first art line inside the banner, before parallax
const CONTENT_TOP: u16 = 1;

pub struct Hero {
    scroll: u16,
}

impl Hero {
    pub fn new(scroll: u16) -> Self {
        Self { scroll }
    }
}

impl Widget for Hero {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::HERO_BG));
        let style = styles::hero_fade(hero_opacity(self.scroll));
        let mut lines: Vec<Line> = CAT_ART
            .iter()
            .map(|row| Line::styled(*row, style).centered())
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(HERO_TITLE, style).centered());
        lines.push(Line::styled(HERO_SUBTITLE, style).centered());

        let top = CONTENT_TOP.saturating_add(parallax_offset(self.scroll));

        // Backdrop credit on the bottom row while the content stays above it
        if top.saturating_add(lines.len() as u16) < area.height {
            let credit_row = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            let credit = format!(
                " backdrop: {}",
                truncate(HERO_IMAGE_URL, (area.width as usize).saturating_sub(12))
            );
            Line::styled(credit, styles::text_muted()).render(credit_row, buf);
        }

        if top >= area.height {
            return;
        }
        let content = Rect {
            x: area.x,
            y: area.y + top,
            width: area.width,
            height: area.height - top,
        };
        Paragraph::new(lines).render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hero_renders_title_at_top() {
        let mut term = TestTerminal::with_size(80, 9);
        term.render_widget(Hero::new(0), term.area());

        assert!(term.buffer_contains(HERO_TITLE));
        assert!(term.buffer_contains(HERO_SUBTITLE));
        assert_eq!(term.find_line(HERO_TITLE), Some(CONTENT_TOP + 4));
    }

    #[test]
    fn test_hero_content_moves_at_half_speed() {
        let mut term = TestTerminal::with_size(80, 9);
        term.render_widget(Hero::new(4), term.area());

        // Scrolled 4 rows: content shifted down 2 within the banner
        assert_eq!(term.find_line(HERO_TITLE), Some(CONTENT_TOP + 4 + 2));
    }

    #[test]
    fn test_hero_credit_pinned_to_bottom() {
        let mut term = TestTerminal::with_size(80, 9);
        term.render_widget(Hero::new(0), term.area());
        assert!(term.line_contains(8, "backdrop:"));
    }

    #[test]
    fn test_hero_fades_with_scroll() {
        let mut term = TestTerminal::with_size(80, 9);
        term.render_widget(Hero::new(0), term.area());
        let y = term.find_line(HERO_TITLE).unwrap();
        let x = (0..80)
            .find(|x| term.buffer()[(*x, y)].symbol() == "A")
            .unwrap();
        assert_eq!(term.buffer()[(x, y)].fg, palette::TEXT_BRIGHT);

        let mut term = TestTerminal::with_size(80, 9);
        term.render_widget(Hero::new(5), term.area());
        let y = term.find_line("All").unwrap();
        let x = (0..80)
            .find(|x| term.buffer()[(*x, y)].symbol() == "A")
            .unwrap();
        assert_eq!(term.buffer()[(x, y)].fg, palette::TEXT_SECONDARY);
    }
}
