//! Fact section widgets: the static accordion and the remote fact list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use catworld_app::accordion::AccordionState;
use catworld_app::facts::FactsState;
use catworld_app::page::{fact_text_width, wrap_words, FACT_MARKER_WIDTH};
use catworld_core::STATIC_FACTS;

use crate::theme::styles;

/// Single-open accordion over the static facts
pub struct FactAccordion<'a> {
    accordion: &'a AccordionState,
    focused: bool,
}

impl<'a> FactAccordion<'a> {
    pub fn new(accordion: &'a AccordionState, focused: bool) -> Self {
        Self { accordion, focused }
    }
}

impl Widget for FactAccordion<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Cat Facts", self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut lines = Vec::new();
        for (i, fact) in STATIC_FACTS.iter().enumerate() {
            let open = self.accordion.is_open(i);
            let marker = if open { "▾" } else { "▸" };
            let title_style = if self.focused && i == self.accordion.cursor {
                styles::focused_selected()
            } else if open {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", marker), styles::accent()),
                Span::styled(fact.title, title_style),
            ]));
            if open {
                lines.push(Line::styled(
                    format!("   {}", fact.body),
                    styles::text_secondary(),
                ));
            }
        }

        let body = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        let hint = if self.focused {
            "[↑/↓] move  [Enter] toggle  [Tab] back to page"
        } else {
            "[Tab] focus facts"
        };
        let hint_row = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        Line::styled(format!(" {}", hint), styles::text_muted()).render(hint_row, buf);
    }
}

/// Remotely fetched facts, replaced wholesale on every refresh
pub struct RemoteFacts<'a> {
    facts: &'a FactsState,
}

impl<'a> RemoteFacts<'a> {
    pub fn new(facts: &'a FactsState) -> Self {
        Self { facts }
    }

    fn title(&self) -> &'static str {
        if self.facts.batch_size() > 1 {
            "Random Cat Facts"
        } else {
            "Random Cat Fact"
        }
    }
}

impl Widget for RemoteFacts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block(self.title(), false);
        let inner = block.inner(area);
        block.render(area, buf);

        let text_width = fact_text_width(area.width);
        let indent = " ".repeat(FACT_MARKER_WIDTH as usize);
        let mut lines: Vec<Line> = Vec::new();
        if self.facts.facts().is_empty() {
            lines.push(Line::styled(" Fetching cat facts…", styles::text_muted()));
        } else if self.facts.failed {
            for fact in self.facts.facts() {
                for row in wrap_words(fact, text_width) {
                    lines.push(Line::styled(
                        format!("{}{}", indent, row),
                        styles::error_text(),
                    ));
                }
            }
        } else {
            for (i, fact) in self.facts.facts().iter().enumerate() {
                for (n, row) in wrap_words(fact, text_width).into_iter().enumerate() {
                    // Continuation rows hang under the text, not the number
                    let marker = if n == 0 {
                        Span::styled(format!(" {:>2}. ", i + 1), styles::accent())
                    } else {
                        Span::raw(indent.clone())
                    };
                    lines.push(Line::from(vec![
                        marker,
                        Span::styled(row, styles::text_primary()),
                    ]));
                }
            }
        }

        lines.push(Line::raw(""));
        let status = if self.facts.is_loading() {
            Line::styled(" ⟳ Loading…", styles::keybinding())
        } else {
            let mut spans = vec![
                Span::styled(" [f]", styles::keybinding()),
                Span::styled(" new facts", styles::text_muted()),
            ];
            if let Some(at) = self.facts.last_updated {
                spans.push(Span::styled(
                    format!("  · updated {}", at.format("%H:%M:%S")),
                    styles::text_muted(),
                ));
            }
            Line::from(spans)
        };
        lines.push(status);

        Paragraph::new(lines).render(inner, buf);
    }
}
