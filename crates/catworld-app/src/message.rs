//! Message types for the application (TEA pattern)

use catworld_core::{PageVariant, ViewToken};

use crate::input_key::InputKey;
use crate::page::Section;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animations
    Tick,

    /// Request to quit
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Mount the current variant's view and kick off its fetches
    Mount,
    /// Mount the cat-of-the-day section (issues the fetch on a cache miss)
    MountCatOfTheDay,
    /// Tear the current view down and mount another variant
    SwitchVariant(PageVariant),

    // ─────────────────────────────────────────────────────────
    // Scroll / Navigation
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    /// Jump to a nav anchor
    JumpTo(Section),
    /// Move focus to the next interactive control
    FocusNext,
    /// Move focus to the previous interactive control
    FocusPrevious,

    // ─────────────────────────────────────────────────────────
    // Carousel / Breed Selector
    // ─────────────────────────────────────────────────────────
    CarouselNext,
    CarouselPrevious,
    /// Slide animation completed
    CarouselSlideFinished,

    // ─────────────────────────────────────────────────────────
    // Static Fact Accordion
    // ─────────────────────────────────────────────────────────
    AccordionUp,
    AccordionDown,
    AccordionToggle,

    // ─────────────────────────────────────────────────────────
    // Remote Facts
    // ─────────────────────────────────────────────────────────
    /// User asked for a new batch of facts
    RefreshFacts,
    /// A batch finished; `failed` means `facts` is the placeholder
    FactsLoaded {
        token: ViewToken,
        facts: Vec<String>,
        failed: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Cat of the Day
    // ─────────────────────────────────────────────────────────
    /// Image search finished; `None` when it failed
    CatOfTheDayLoaded { url: Option<String> },

    // ─────────────────────────────────────────────────────────
    // Likes
    // ─────────────────────────────────────────────────────────
    Like,
    /// Like animation completed; re-enables the control
    LikeAnimationFinished,
}
