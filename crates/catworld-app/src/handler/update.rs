//! Main update function - handles state transitions (TEA pattern)

use catworld_core::prelude::*;

use crate::likes::LikeOutcome;
use crate::message::Message;
use crate::page;
use crate::state::AppState;

use super::{keys::handle_key, view, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::RequestQuit | Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Tick => handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // View Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Mount => view::handle_mount(state),
        Message::MountCatOfTheDay => view::handle_mount_cat_of_the_day(state),
        Message::SwitchVariant(variant) => view::handle_switch_variant(state, variant),

        // ─────────────────────────────────────────────────────────
        // Scroll / Navigation
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll.scroll_down(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.scroll.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.scroll.page_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll.to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.scroll.to_bottom();
            UpdateResult::none()
        }
        Message::JumpTo(section) => {
            if let Some(row) = page::anchor(&state.placements(), section) {
                state.scroll.jump_to(row);
            }
            UpdateResult::none()
        }
        Message::FocusNext => {
            state.cycle_focus(true);
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.cycle_focus(false);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Carousel / Breed Selector
        // ─────────────────────────────────────────────────────────
        Message::CarouselNext => {
            let ticks = state.carousel_animation_ticks();
            state.carousel.next(ticks);
            debug!("Carousel -> {}", state.carousel.current().name);
            UpdateResult::none()
        }
        Message::CarouselPrevious => {
            let ticks = state.carousel_animation_ticks();
            state.carousel.previous(ticks);
            debug!("Carousel -> {}", state.carousel.current().name);
            UpdateResult::none()
        }
        Message::CarouselSlideFinished => {
            state.carousel.slide.finish();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Static Fact Accordion
        // ─────────────────────────────────────────────────────────
        Message::AccordionUp => {
            state.accordion.cursor_up();
            UpdateResult::none()
        }
        Message::AccordionDown => {
            state.accordion.cursor_down();
            UpdateResult::none()
        }
        Message::AccordionToggle => {
            state.accordion.toggle();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Remote Facts / Cat of the Day
        // ─────────────────────────────────────────────────────────
        Message::RefreshFacts => view::handle_refresh_facts(state),
        Message::FactsLoaded {
            token,
            facts,
            failed,
        } => view::handle_facts_loaded(state, token, facts, failed),
        Message::CatOfTheDayLoaded { url } => view::handle_cat_of_the_day_loaded(state, url),

        // ─────────────────────────────────────────────────────────
        // Likes
        // ─────────────────────────────────────────────────────────
        Message::Like => {
            let ticks = state.like_animation_ticks();
            match state.likes.increment(ticks) {
                LikeOutcome::Accepted { count } => debug!("Liked ({} total)", count),
                LikeOutcome::Rejected => trace!("Like ignored while animation plays"),
            }
            UpdateResult::none()
        }
        Message::LikeAnimationFinished => {
            state.likes.finish_animation();
            UpdateResult::none()
        }
    }
}

/// Advance animations; completions become explicit follow-up messages.
///
/// Only one completion is reported per tick. An unacknowledged completion
/// keeps reporting, so a slide finishing on the same tick as a like is
/// picked up on the next tick.
fn handle_tick(state: &mut AppState) -> UpdateResult {
    let like_done = state.likes.animation.tick();
    let slide_done = state.carousel.slide.tick();

    if like_done {
        UpdateResult::message(Message::LikeAnimationFinished)
    } else if slide_done {
        UpdateResult::message(Message::CarouselSlideFinished)
    } else {
        UpdateResult::none()
    }
}
