//! Bottom status bar: mounted variant, focus and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use catworld_app::{AppState, Focus};
use catworld_core::PageVariant;

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let variant = self.state.variant;
        let mut hints = vec![("j/k", "scroll")];
        if self.state.focus == Focus::Accordion {
            hints = vec![("↑/↓", "move"), ("Enter", "toggle")];
        }
        if variant.has_carousel() || variant.has_breed_selector() {
            hints.push(("←/→", "breed"));
        }
        if self.state.fact_batch_size().is_some() {
            hints.push(("f", "facts"));
        }
        if self.state.focus_order().len() > 1 {
            hints.push(("Tab", "focus"));
        }
        hints.push(("Space", "like"));
        hints.push(("1-4", "variant"));
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let mut spans = vec![];
        for (i, variant) in PageVariant::ALL.iter().enumerate() {
            let style = if *variant == self.state.variant {
                styles::focused_selected()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, variant), style));
        }
        spans.push(Span::raw("  "));

        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(160, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_lists_variants() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains("1 classic"));
        assert!(term.buffer_contains("4 full"));
    }

    #[test]
    fn test_hints_follow_variant() {
        let full = AppState::new();
        let term = render(&full);
        assert!(term.buffer_contains("f facts"));
        assert!(!term.buffer_contains("Tab focus"));

        let mut classic = AppState::new();
        classic.variant = PageVariant::Classic;
        let term = render(&classic);
        assert!(!term.buffer_contains("f facts"));
        assert!(term.buffer_contains("Tab focus"));
    }

    #[test]
    fn test_accordion_focus_hints() {
        let mut state = AppState::new();
        state.variant = PageVariant::Classic;
        state.focus = Focus::Accordion;

        let term = render(&state);
        assert!(term.buffer_contains("Enter toggle"));
        assert!(!term.buffer_contains("j/k scroll"));
    }
}
