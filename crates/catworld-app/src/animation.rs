//! Two-state animation machine for transient UI effects
//!
//! Animated controls are either `Idle` or `Playing`. Ticks count a playing
//! animation down; reaching zero is reported to the caller, which turns it
//! into an explicit completion message. Nothing else moves a control back to
//! `Idle`.

/// Animation state of one animated control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Playing { remaining_ticks: u16 },
}

impl AnimationState {
    pub fn is_playing(&self) -> bool {
        matches!(self, AnimationState::Playing { .. })
    }

    /// Start playing for `ticks` ticks (at least one)
    pub fn start(&mut self, ticks: u16) {
        *self = AnimationState::Playing {
            remaining_ticks: ticks.max(1),
        };
    }

    /// Advance one tick.
    ///
    /// Returns `true` once the countdown has reached zero, and keeps
    /// returning `true` on every later tick until [`finish`](Self::finish)
    /// acknowledges the completion.
    pub fn tick(&mut self) -> bool {
        match self {
            AnimationState::Playing { remaining_ticks } => {
                *remaining_ticks = remaining_ticks.saturating_sub(1);
                *remaining_ticks == 0
            }
            AnimationState::Idle => false,
        }
    }

    /// Completion event: return to `Idle`
    pub fn finish(&mut self) {
        *self = AnimationState::Idle;
    }

    /// Progress through the animation in `[0.0, 1.0]`, given its total length
    pub fn progress(&self, total_ticks: u16) -> f64 {
        match self {
            AnimationState::Idle => 1.0,
            AnimationState::Playing { remaining_ticks } => {
                let total = total_ticks.max(1) as f64;
                (1.0 - *remaining_ticks as f64 / total).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_tick_is_noop() {
        let mut anim = AnimationState::Idle;
        assert!(!anim.tick());
        assert_eq!(anim, AnimationState::Idle);
    }

    #[test]
    fn test_tick_reports_completion_until_finished() {
        let mut anim = AnimationState::default();
        anim.start(3);
        assert!(!anim.tick());
        assert!(!anim.tick());
        assert!(anim.tick());
        // Still playing until the completion event is applied
        assert!(anim.is_playing());
        assert!(anim.tick());
        anim.finish();
        assert_eq!(anim, AnimationState::Idle);
        assert!(!anim.tick());
    }

    #[test]
    fn test_start_zero_ticks_plays_one() {
        let mut anim = AnimationState::default();
        anim.start(0);
        assert!(anim.tick());
    }

    #[test]
    fn test_progress() {
        let mut anim = AnimationState::default();
        assert_eq!(anim.progress(4), 1.0);
        anim.start(4);
        assert_eq!(anim.progress(4), 0.0);
        anim.tick();
        assert_eq!(anim.progress(4), 0.25);
    }
}
