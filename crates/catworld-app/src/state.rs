//! Application state (Model in TEA pattern)
//!
//! State splits into two lifetimes:
//! - session-scoped: settings, the query cache, the scroll position
//! - view-scoped: carousel, accordion, facts, likes, focus
//!
//! View-scoped state is rebuilt on every mount. Tearing a view down bumps
//! the [`ViewToken`] so results issued for the old view are dropped.

use catworld_core::{AppPhase, PageVariant, ViewToken};

use crate::accordion::AccordionState;
use crate::carousel::CarouselState;
use crate::config::Settings;
use crate::facts::FactsState;
use crate::likes::LikeCounter;
use crate::page::{self, Placement, ScrollState};
use crate::query_cache::{QueryCache, QueryStatus, CAT_OF_THE_DAY_KEY};

/// Interactive control holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys scroll the page
    #[default]
    Page,
    /// Arrow keys move the static fact accordion cursor
    Accordion,
}

/// What the cat-of-the-day section shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatOfTheDayView<'a> {
    Loading,
    Ready(&'a str),
    Unavailable,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub variant: PageVariant,
    pub view: ViewToken,
    pub scroll: ScrollState,
    pub query_cache: QueryCache,

    // View-scoped
    pub focus: Focus,
    pub carousel: CarouselState,
    pub accordion: AccordionState,
    pub facts: FactsState,
    pub likes: LikeCounter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let variant = settings.ui.variant;
        let facts = FactsState::new(settings.facts.count);
        Self {
            phase: AppPhase::Running,
            settings,
            variant,
            view: ViewToken::default(),
            scroll: ScrollState::default(),
            query_cache: QueryCache::new(),
            focus: Focus::Page,
            carousel: CarouselState::default(),
            accordion: AccordionState::default(),
            facts,
            likes: LikeCounter::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Remote facts per refresh for the mounted variant (`None` = static)
    pub fn fact_batch_size(&self) -> Option<usize> {
        self.variant.remote_fact_count(self.settings.facts.count)
    }

    /// Section layout for the mounted variant
    pub fn placements(&self) -> Vec<Placement> {
        let text_width = page::fact_text_width(self.scroll.viewport_width);
        let fact_rows = self
            .fact_batch_size()
            .map(|_| self.facts.rows(text_width));
        page::layout(self.variant, fact_rows)
    }

    /// Controls that accept focus in the mounted variant
    pub fn focus_order(&self) -> &'static [Focus] {
        match self.variant {
            PageVariant::Classic | PageVariant::Selector => &[Focus::Page, Focus::Accordion],
            PageVariant::Showcase | PageVariant::Full => &[Focus::Page],
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Drop the mounted view's state and invalidate its outstanding results
    pub fn teardown_view(&mut self) {
        self.view = self.view.next();
        self.focus = Focus::Page;
        self.carousel = CarouselState::default();
        self.accordion = AccordionState::default();
        self.facts = FactsState::new(self.fact_batch_size().unwrap_or(1));
        self.likes = LikeCounter::new();
        self.scroll.to_top();
    }

    /// Rebuild view-scoped state for the mounted variant
    pub fn reset_view_state(&mut self) {
        self.facts = FactsState::new(self.fact_batch_size().unwrap_or(1));
    }

    pub fn cat_of_the_day(&self) -> CatOfTheDayView<'_> {
        match self.query_cache.get(CAT_OF_THE_DAY_KEY) {
            Some(QueryStatus::Ready(url)) => CatOfTheDayView::Ready(url),
            Some(QueryStatus::Failed) => CatOfTheDayView::Unavailable,
            Some(QueryStatus::Pending) | None => CatOfTheDayView::Loading,
        }
    }

    pub fn like_animation_ticks(&self) -> u16 {
        self.settings.ui.like_animation_ticks
    }

    pub fn carousel_animation_ticks(&self) -> u16 {
        self.settings.ui.carousel_animation_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert_eq!(state.variant, PageVariant::Full);
        assert_eq!(state.fact_batch_size(), Some(5));
        assert!(!state.should_quit());
        assert_eq!(state.cat_of_the_day(), CatOfTheDayView::Loading);
    }

    #[test]
    fn test_teardown_bumps_token_and_resets_view() {
        let mut state = AppState::new();
        state.carousel.next(1);
        state.likes.increment(1);
        let before = state.view;

        state.teardown_view();

        assert_ne!(state.view, before);
        assert_eq!(state.carousel.current_index(), 0);
        assert_eq!(state.likes.count(), 0);
    }

    #[test]
    fn test_teardown_keeps_query_cache() {
        let mut state = AppState::new();
        state.query_cache.begin(CAT_OF_THE_DAY_KEY);
        state
            .query_cache
            .resolve(CAT_OF_THE_DAY_KEY, Some("https://x.test/c.jpg".into()));

        state.teardown_view();

        assert_eq!(
            state.cat_of_the_day(),
            CatOfTheDayView::Ready("https://x.test/c.jpg")
        );
    }

    #[test]
    fn test_focus_cycles_within_variant() {
        let mut state = AppState::new();
        state.variant = PageVariant::Classic;
        state.cycle_focus(true);
        assert_eq!(state.focus, Focus::Accordion);
        state.cycle_focus(true);
        assert_eq!(state.focus, Focus::Page);
        state.cycle_focus(false);
        assert_eq!(state.focus, Focus::Accordion);

        state.variant = PageVariant::Full;
        state.focus = Focus::Page;
        state.cycle_focus(true);
        assert_eq!(state.focus, Focus::Page);
    }
}
