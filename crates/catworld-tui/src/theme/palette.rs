//! Color palette for the page theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Section card backgrounds
pub const HERO_BG: Color = Color::Rgb(40, 24, 16); // Warm hero backdrop

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Yellow; // Focused section

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(245, 158, 11); // Amber, the page's brand color
pub const ACCENT_DIM: Color = Color::Rgb(146, 94, 8);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Likes ---
pub const HEART: Color = Color::Rgb(244, 63, 94);
pub const HEART_DIM: Color = Color::Rgb(120, 40, 56);
pub const GAUGE_FILL: Color = Color::Rgb(244, 63, 94);
pub const GAUGE_BG: Color = Color::Rgb(40, 40, 50);

// --- Links ---
pub const LINK: Color = Color::Cyan;
