//! Like counter with a re-entrancy guarded animation

use catworld_core::{like_progress, DisplayTier};

use crate::animation::AnimationState;

/// Outcome of a like attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Counter advanced and the animation started
    Accepted { count: u64 },
    /// An animation is in flight; the control is disabled
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct LikeCounter {
    count: u64,
    pub animation: AnimationState,
}

impl LikeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// The like control is disabled while its animation plays
    pub fn is_enabled(&self) -> bool {
        !self.animation.is_playing()
    }

    /// Add one like and start the animation, unless one is already playing
    pub fn increment(&mut self, animation_ticks: u16) -> LikeOutcome {
        if !self.is_enabled() {
            return LikeOutcome::Rejected;
        }
        self.count = self.count.saturating_add(1);
        self.animation.start(animation_ticks);
        LikeOutcome::Accepted { count: self.count }
    }

    /// Animation completion event re-enables the control
    pub fn finish_animation(&mut self) {
        self.animation.finish();
    }

    pub fn tier(&self) -> DisplayTier {
        DisplayTier::from_likes(self.count)
    }

    pub fn progress(&self) -> u64 {
        like_progress(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_by_one() {
        let mut likes = LikeCounter::new();
        assert_eq!(likes.increment(3), LikeOutcome::Accepted { count: 1 });
        assert_eq!(likes.count(), 1);
        assert!(!likes.is_enabled());
    }

    #[test]
    fn test_guard_rejects_while_playing() {
        let mut likes = LikeCounter::new();
        likes.increment(3);
        assert_eq!(likes.increment(3), LikeOutcome::Rejected);
        assert_eq!(likes.increment(3), LikeOutcome::Rejected);
        assert_eq!(likes.count(), 1);
    }

    #[test]
    fn test_rejected_attempts_do_not_corrupt_next_accepted() {
        let mut likes = LikeCounter::new();
        likes.increment(2);
        likes.increment(2);
        likes.finish_animation();
        assert_eq!(likes.increment(2), LikeOutcome::Accepted { count: 2 });
    }

    #[test]
    fn test_tier_and_progress_follow_count() {
        let mut likes = LikeCounter::new();
        for _ in 0..150 {
            likes.increment(1);
            likes.finish_animation();
        }
        assert_eq!(likes.count(), 150);
        assert_eq!(likes.progress(), 100);
        assert_eq!(likes.tier(), DisplayTier::UltimateCatLover);
    }
}
