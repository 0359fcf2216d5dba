//! Characteristics bullet list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use catworld_core::CHARACTERISTICS;

use crate::theme::styles;

pub struct Characteristics;

impl Widget for Characteristics {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Characteristics", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::styled(
            "What makes cats special:",
            styles::text_secondary(),
        )];
        let text_width = inner.width.saturating_sub(4) as usize;
        lines.extend(CHARACTERISTICS.iter().map(|item| {
            Line::from(vec![
                Span::styled("  • ", styles::accent()),
                Span::styled(super::truncate(item, text_width), styles::text_primary()),
            ])
        }));

        Paragraph::new(lines).render(inner, buf);
    }
}
