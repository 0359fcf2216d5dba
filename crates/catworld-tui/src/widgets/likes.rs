//! Like controls: the plain button and the full meter with tier and gauge

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use catworld_app::animation::AnimationState;
use catworld_app::likes::LikeCounter;
use catworld_core::{like_progress_ratio, LIKE_PROGRESS_MAX};

use crate::theme::{palette, styles};

/// Heart glyph and style; it pulses while the like animation plays
fn heart(likes: &LikeCounter) -> Span<'static> {
    match likes.animation {
        AnimationState::Playing { remaining_ticks } => {
            let glyph = if remaining_ticks % 2 == 0 { "♥" } else { "❤" };
            Span::styled(
                glyph,
                Style::default()
                    .fg(palette::HEART)
                    .add_modifier(Modifier::BOLD),
            )
        }
        AnimationState::Idle => {
            Span::styled("♥", Style::default().fg(palette::HEART))
        }
    }
}

fn button(likes: &LikeCounter) -> Span<'static> {
    if likes.is_enabled() {
        Span::styled(" Like ", styles::focused_selected())
    } else {
        Span::styled(" Like ", Style::default().fg(palette::HEART_DIM))
    }
}

fn count_label(count: u64) -> String {
    if count == 1 {
        "1 like".to_string()
    } else {
        format!("{} likes", count)
    }
}

/// Single-row like button with its count
pub struct LikeButton<'a> {
    likes: &'a LikeCounter,
}

impl<'a> LikeButton<'a> {
    pub fn new(likes: &'a LikeCounter) -> Self {
        Self { likes }
    }
}

impl Widget for LikeButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Do you like cats?", false);
        let inner = block.inner(area);
        block.render(area, buf);

        Line::from(vec![
            Span::raw(" "),
            heart(self.likes),
            Span::raw(" "),
            button(self.likes),
            Span::raw("  "),
            Span::styled(count_label(self.likes.count()), styles::text_primary()),
            Span::styled("   [Space] like", styles::text_muted()),
        ])
        .render(inner, buf);
    }
}

/// Like meter: count, display tier, and progress toward the maximum
pub struct LikeMeter<'a> {
    likes: &'a LikeCounter,
}

impl<'a> LikeMeter<'a> {
    pub fn new(likes: &'a LikeCounter) -> Self {
        Self { likes }
    }
}

impl Widget for LikeMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::section_block("Cat Love Meter", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            return;
        }

        let tier = self.likes.tier();
        Paragraph::new(vec![
            Line::from(vec![
                Span::raw(" "),
                heart(self.likes),
                Span::raw(" "),
                button(self.likes),
                Span::raw("  "),
                Span::styled(count_label(self.likes.count()), styles::text_bright()),
            ]),
            Line::from(vec![
                Span::styled(" Tier: ", styles::text_muted()),
                Span::styled(tier.label(), styles::tier_style(tier)),
            ]),
        ])
        .render(inner, buf);

        let gauge_area = Rect {
            x: inner.x + 1,
            y: inner.y + 2,
            width: inner.width.saturating_sub(2),
            height: 1,
        };
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(palette::GAUGE_FILL)
                    .bg(palette::GAUGE_BG),
            )
            .ratio(like_progress_ratio(self.likes.count()))
            .label(format!("{}/{}", self.likes.progress(), LIKE_PROGRESS_MAX))
            .render(gauge_area, buf);

        if inner.height >= 5 {
            let hint = if self.likes.is_enabled() {
                " [Space] like"
            } else {
                " …"
            };
            let hint_row = Rect {
                y: inner.y + 4,
                height: 1,
                ..inner
            };
            Line::styled(hint, styles::text_muted()).render(hint_row, buf);
        }
    }
}
