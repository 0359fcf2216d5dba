//! Breed carousel controller
//!
//! Holds an index into the fixed breed catalog. `next` and `previous` wrap
//! modulo the catalog length; neither can fail. The slide animation only
//! records a direction for rendering and never gates input.

use catworld_core::{BreedRecord, BREEDS};

use crate::animation::AnimationState;

/// Direction of the last carousel transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
    pub slide: AnimationState,
    pub direction: Option<SlideDirection>,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(BREEDS.len())
    }
}

// Never empty: `new` clamps the length to at least 1
#[allow(clippy::len_without_is_empty)]
impl CarouselState {
    /// Carousel over `len` items, starting at index 0
    pub fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len: len.max(1),
            slide: AnimationState::Idle,
            direction: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// `index = (index + 1) mod N`
    pub fn next(&mut self, slide_ticks: u16) {
        self.current_index = (self.current_index + 1) % self.len;
        self.direction = Some(SlideDirection::Forward);
        self.slide.start(slide_ticks);
    }

    /// `index = (index - 1 + N) mod N`
    pub fn previous(&mut self, slide_ticks: u16) {
        self.current_index = (self.current_index + self.len - 1) % self.len;
        self.direction = Some(SlideDirection::Backward);
        self.slide.start(slide_ticks);
    }

    /// Breed record under the cursor (catalog-backed carousels only)
    pub fn current(&self) -> &'static BreedRecord {
        &BREEDS[self.current_index % BREEDS.len()]
    }
}
