//! Cat of the day section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use catworld_app::CatOfTheDayView;

use crate::theme::styles;

use super::truncate;

pub struct CatOfTheDay<'a> {
    view: CatOfTheDayView<'a>,
}

impl<'a> CatOfTheDay<'a> {
    pub fn new(view: CatOfTheDayView<'a>) -> Self {
        Self { view }
    }
}

impl Widget for CatOfTheDay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Cat of the Day", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.view {
            CatOfTheDayView::Loading => vec![
                Line::raw(""),
                Line::styled("Loading cat of the day…", styles::text_muted()).centered(),
            ],
            CatOfTheDayView::Ready(url) => vec![
                Line::styled("Today's featured cat", styles::text_bright()).centered(),
                Line::raw(""),
                Line::from(vec![
                    Span::styled(" 📷 ", styles::accent()),
                    Span::styled(
                        truncate(url, (inner.width as usize).saturating_sub(5)),
                        styles::link(),
                    ),
                ]),
            ],
            CatOfTheDayView::Unavailable => vec![
                Line::raw(""),
                Line::styled("Cat of the day is unavailable", styles::error_text()).centered(),
            ],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(view: CatOfTheDayView<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 6);
        term.render_widget(CatOfTheDay::new(view), term.area());
        term
    }

    #[test]
    fn test_loading() {
        assert!(render(CatOfTheDayView::Loading).buffer_contains("Loading cat of the day"));
    }

    #[test]
    fn test_ready_shows_url() {
        let term = render(CatOfTheDayView::Ready("https://cdn.test/cat.jpg"));
        assert!(term.buffer_contains("https://cdn.test/cat.jpg"));
        assert!(!term.buffer_contains("Loading"));
    }

    #[test]
    fn test_unavailable_is_distinct_from_loading() {
        let term = render(CatOfTheDayView::Unavailable);
        assert!(term.buffer_contains("unavailable"));
        assert!(!term.buffer_contains("Loading"));
    }
}
