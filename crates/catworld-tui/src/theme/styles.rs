//! Semantic style builders for the page theme.

use catworld_core::DisplayTier;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on amber" - active nav entry and selected items
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Key hint in the status bar and section footers
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn section_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

// --- Hero fade ---

/// Map hero opacity in `[0.0, 1.0]` to a text style.
///
/// Terminals have no alpha channel, so opacity is quantized into four steps.
pub fn hero_fade(opacity: f64) -> Style {
    let base = Style::default().bg(palette::HERO_BG);
    if opacity > 0.66 {
        base.fg(palette::TEXT_BRIGHT).add_modifier(Modifier::BOLD)
    } else if opacity > 0.33 {
        base.fg(palette::TEXT_SECONDARY)
    } else if opacity > 0.0 {
        base.fg(palette::TEXT_MUTED).add_modifier(Modifier::DIM)
    } else {
        base.fg(palette::HERO_BG)
    }
}

// --- Tier mapping ---

/// Style for the like tier label
pub fn tier_style(tier: DisplayTier) -> Style {
    match tier {
        DisplayTier::NoviceCatAdmirer => text_secondary(),
        DisplayTier::CatEnthusiast => Style::default().fg(palette::STATUS_GREEN),
        DisplayTier::FelineAficionado => accent(),
        DisplayTier::UltimateCatLover => Style::default()
            .fg(palette::HEART)
            .add_modifier(Modifier::BOLD),
    }
}
