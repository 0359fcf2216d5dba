//! Page composition and scroll projections
//!
//! The page is a vertical stack of sections whose order and heights depend
//! on the mounted variant. Scroll offset is the only stored value; parallax,
//! hero fade and the active nav item are projections of it.

use catworld_core::{PageVariant, CHARACTERISTICS, STATIC_FACTS};

/// Hero banner height in rows
pub const HERO_HEIGHT: u16 = 9;

/// A page section, in top-to-bottom order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Characteristics,
    Breeds,
    Facts,
    CatOfTheDay,
    Likes,
    Footer,
}

impl Section {
    /// Nav bar entries
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Characteristics,
        Section::Breeds,
        Section::Facts,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Characteristics => "Characteristics",
            Section::Breeds => "Breeds",
            Section::Facts => "Facts",
            Section::CatOfTheDay => "Cat of the Day",
            Section::Likes => "Likes",
            Section::Footer => "",
        }
    }

    /// Key that jumps to this section from the nav bar
    pub fn nav_key(&self) -> Option<char> {
        match self {
            Section::Home => Some('g'),
            Section::Characteristics => Some('c'),
            Section::Breeds => Some('b'),
            Section::Facts => Some('a'),
            _ => None,
        }
    }
}

/// One section placed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

/// Columns reserved for the list marker in front of each remote fact
pub const FACT_MARKER_WIDTH: u16 = 5;

/// Text columns left for a remote fact in a section `section_width` wide
/// (rounded borders plus the list marker)
pub fn fact_text_width(section_width: u16) -> usize {
    section_width.saturating_sub(2 + FACT_MARKER_WIDTH) as usize
}

/// Greedy word wrap at `width` columns. Words longer than a line are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        let needed = if line_len == 0 { chars.len() } else { line_len + 1 + chars.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars.iter());
        line_len += chars.len();
    }

    if line_len > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Lay out the sections of `variant`. `fact_rows` is the number of rows the
/// remote fact list needs, or `None` for the static accordion.
pub fn layout(variant: PageVariant, fact_rows: Option<usize>) -> Vec<Placement> {
    let mut sections = vec![
        (Section::Home, HERO_HEIGHT),
        (Section::Characteristics, CHARACTERISTICS.len() as u16 + 4),
        (Section::Breeds, 9),
    ];

    let facts_height = match fact_rows {
        Some(rows) => u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(5),
        None => STATIC_FACTS.len() as u16 + 5,
    };
    sections.push((Section::Facts, facts_height));

    if variant.has_cat_of_the_day() {
        sections.push((Section::CatOfTheDay, 6));
    }

    let likes_height = if variant.has_like_meter() { 7 } else { 3 };
    sections.push((Section::Likes, likes_height));
    sections.push((Section::Footer, 4));

    let mut top = 0u16;
    sections
        .into_iter()
        .map(|(section, height)| {
            let placement = Placement {
                section,
                top,
                height,
            };
            top = top.saturating_add(height);
            placement
        })
        .collect()
}

/// Total page height in rows
pub fn page_height(placements: &[Placement]) -> u16 {
    placements
        .last()
        .map(|p| p.top.saturating_add(p.height))
        .unwrap_or(0)
}

/// Row offset of `section`, if the variant has it
pub fn anchor(placements: &[Placement], section: Section) -> Option<u16> {
    placements
        .iter()
        .find(|p| p.section == section)
        .map(|p| p.top)
}

/// Scroll position of the page viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    /// Visible rows; updated by the renderer
    pub viewport_height: u16,
    /// Visible columns; updated by the renderer, 0 until the first frame
    pub viewport_width: u16,
    /// Total rows; updated by the renderer
    pub page_height: u16,
}

impl ScrollState {
    pub fn max_offset(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(2).max(1));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn jump_to(&mut self, row: u16) {
        self.offset = row.min(self.max_offset());
    }

    /// Re-clamp after the page or viewport changed size
    pub fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Rows the hero content lags behind the scroll (half speed)
pub fn parallax_offset(scroll: u16) -> u16 {
    scroll / 2
}

/// Hero opacity in `[0.0, 1.0]`: 1 at the top, 0 once the hero scrolled away
pub fn hero_opacity(scroll: u16) -> f64 {
    1.0 - (scroll.min(HERO_HEIGHT) as f64 / HERO_HEIGHT as f64)
}

/// Nav entry for the section at the top of the viewport
pub fn active_section(placements: &[Placement], scroll: u16) -> Section {
    placements
        .iter()
        .filter(|p| Section::NAV.contains(&p.section))
        .take_while(|p| p.top <= scroll)
        .last()
        .map(|p| p.section)
        .unwrap_or(Section::Home)
}
