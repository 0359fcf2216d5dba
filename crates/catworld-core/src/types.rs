//! Core domain types shared by the app and tui crates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// One of the four iterations of the page, from plainest to richest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Static lists, fact accordion, like button
    Classic,
    /// Adds animated nav and a breed selector
    Selector,
    /// Breed carousel, a single remote fact, cat of the day
    Showcase,
    /// Carousel, remote fact list, cat of the day, like meter
    #[default]
    Full,
}

impl PageVariant {
    pub const ALL: [PageVariant; 4] = [
        PageVariant::Classic,
        PageVariant::Selector,
        PageVariant::Showcase,
        PageVariant::Full,
    ];

    /// Number of remote facts this variant shows (`None` = static accordion)
    pub fn remote_fact_count(&self, configured: usize) -> Option<usize> {
        match self {
            PageVariant::Classic | PageVariant::Selector => None,
            PageVariant::Showcase => Some(1),
            PageVariant::Full => Some(configured.max(1)),
        }
    }

    pub fn has_carousel(&self) -> bool {
        matches!(self, PageVariant::Showcase | PageVariant::Full)
    }

    pub fn has_breed_selector(&self) -> bool {
        matches!(self, PageVariant::Selector)
    }

    pub fn has_cat_of_the_day(&self) -> bool {
        matches!(self, PageVariant::Showcase | PageVariant::Full)
    }

    pub fn has_like_meter(&self) -> bool {
        matches!(self, PageVariant::Full)
    }

    /// Variant bound to the digit keys `1`-`4`
    pub fn from_digit(digit: char) -> Option<Self> {
        digit
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageVariant::Classic => "classic",
            PageVariant::Selector => "selector",
            PageVariant::Showcase => "showcase",
            PageVariant::Full => "full",
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageVariant::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown page variant '{}' (expected classic, selector, showcase or full)",
                    s
                )
            })
    }
}

/// Mount generation of the page view.
///
/// Bumped whenever the view is torn down. Fetch results carry the token they
/// were issued under so late responses for a dead view can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewToken(pub u64);

impl ViewToken {
    pub fn next(self) -> Self {
        ViewToken(self.0.wrapping_add(1))
    }
}

impl fmt::Display for ViewToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_digit() {
        assert_eq!(PageVariant::from_digit('1'), Some(PageVariant::Classic));
        assert_eq!(PageVariant::from_digit('4'), Some(PageVariant::Full));
        assert_eq!(PageVariant::from_digit('0'), None);
        assert_eq!(PageVariant::from_digit('5'), None);
        assert_eq!(PageVariant::from_digit('x'), None);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Showcase".parse::<PageVariant>(), Ok(PageVariant::Showcase));
        assert!("deluxe".parse::<PageVariant>().is_err());
    }

    #[test]
    fn test_remote_fact_count_per_variant() {
        assert_eq!(PageVariant::Classic.remote_fact_count(5), None);
        assert_eq!(PageVariant::Showcase.remote_fact_count(5), Some(1));
        assert_eq!(PageVariant::Full.remote_fact_count(5), Some(5));
        assert_eq!(PageVariant::Full.remote_fact_count(0), Some(1));
    }

    #[test]
    fn test_view_token_advances() {
        let t = ViewToken::default();
        assert_ne!(t, t.next());
        assert_eq!(t.next(), ViewToken(1));
    }
}
