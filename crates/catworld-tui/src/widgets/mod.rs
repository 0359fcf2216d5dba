//! Custom widget components, one per page section

mod breeds;
mod cat_of_the_day;
mod characteristics;
mod facts;
mod footer;
mod hero;
mod likes;
mod nav;
mod status_bar;

pub use breeds::{BreedCarousel, BreedList, BreedSelector};
pub use cat_of_the_day::CatOfTheDay;
pub use characteristics::Characteristics;
pub use facts::{FactAccordion, RemoteFacts};
pub use footer::Footer;
pub use hero::Hero;
pub use likes::{LikeButton, LikeMeter};
pub use nav::NavBar;
pub use status_bar::StatusBar;

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            // Make room for the ellipsis
            while width + 1 > max_width && !out.is_empty() {
                if let Some(last) = out.pop() {
                    width -= last.width().unwrap_or(0);
                }
            }
            if max_width > 0 {
                out.push('…');
            }
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("cats", 10), "cats");
        assert_eq!(truncate("cats", 4), "cats");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("whiskers", 5), "whis…");
        assert_eq!(truncate("whiskers", 1), "…");
        assert_eq!(truncate("whiskers", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate("猫猫猫", 4), "猫…");
    }
}
