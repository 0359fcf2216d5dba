//! Page footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use catworld_core::{FOOTER_COPYRIGHT, FOOTER_TAGLINE};

use crate::theme::styles;

pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::styled(FOOTER_COPYRIGHT, styles::text_secondary()).centered(),
            Line::styled(FOOTER_TAGLINE, styles::text_muted()).centered(),
        ])
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_text() {
        let mut term = TestTerminal::with_size(80, 4);
        term.render_widget(Footer, term.area());

        assert!(term.buffer_contains("CatWorld. All rights reserved."));
        assert!(term.buffer_contains("for cat lovers everywhere."));
    }
}
