//! Display tier and progress derived from the like count

use std::fmt;

/// Fixed maximum of the like progress gauge
pub const LIKE_PROGRESS_MAX: u64 = 100;

/// Gamified label derived from the like count.
///
/// Never stored; recomputed from the counter on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DisplayTier {
    NoviceCatAdmirer,
    CatEnthusiast,
    FelineAficionado,
    UltimateCatLover,
}

impl DisplayTier {
    /// Map a like count to its tier. Boundaries are closed-open.
    pub fn from_likes(likes: u64) -> Self {
        match likes {
            0..=19 => DisplayTier::NoviceCatAdmirer,
            20..=49 => DisplayTier::CatEnthusiast,
            50..=79 => DisplayTier::FelineAficionado,
            _ => DisplayTier::UltimateCatLover,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayTier::NoviceCatAdmirer => "Novice Cat Admirer",
            DisplayTier::CatEnthusiast => "Cat Enthusiast",
            DisplayTier::FelineAficionado => "Feline Aficionado",
            DisplayTier::UltimateCatLover => "Ultimate Cat Lover",
        }
    }
}

impl fmt::Display for DisplayTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress gauge value: `min(likes, 100)`
pub fn like_progress(likes: u64) -> u64 {
    likes.min(LIKE_PROGRESS_MAX)
}

/// Progress as a ratio in `[0.0, 1.0]` for gauge widgets
pub fn like_progress_ratio(likes: u64) -> f64 {
    like_progress(likes) as f64 / LIKE_PROGRESS_MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_closed_open() {
        assert_eq!(DisplayTier::from_likes(0).label(), "Novice Cat Admirer");
        assert_eq!(DisplayTier::from_likes(19).label(), "Novice Cat Admirer");
        assert_eq!(DisplayTier::from_likes(20).label(), "Cat Enthusiast");
        assert_eq!(DisplayTier::from_likes(49).label(), "Cat Enthusiast");
        assert_eq!(DisplayTier::from_likes(50).label(), "Feline Aficionado");
        assert_eq!(DisplayTier::from_likes(79).label(), "Feline Aficionado");
        assert_eq!(DisplayTier::from_likes(80).label(), "Ultimate Cat Lover");
        assert_eq!(DisplayTier::from_likes(u64::MAX).label(), "Ultimate Cat Lover");
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut prev = DisplayTier::from_likes(0);
        for v in 1..200 {
            let tier = DisplayTier::from_likes(v);
            assert!(tier >= prev);
            prev = tier;
        }
    }

    #[test]
    fn test_progress_clamps_at_max() {
        assert_eq!(like_progress(0), 0);
        assert_eq!(like_progress(42), 42);
        assert_eq!(like_progress(100), 100);
        assert_eq!(like_progress(150), like_progress(100));
        assert_eq!(like_progress(u64::MAX), 100);
    }

    #[test]
    fn test_progress_ratio_never_exceeds_one() {
        assert_eq!(like_progress_ratio(0), 0.0);
        assert_eq!(like_progress_ratio(50), 0.5);
        assert_eq!(like_progress_ratio(1_000), 1.0);
    }
}
