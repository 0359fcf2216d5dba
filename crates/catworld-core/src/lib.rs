//! # catworld-core - Core Domain Types
//!
//! Foundation crate for CatWorld. Provides the static page catalog, the
//! derived display tier, shared domain types, error handling, and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Breed`] - Breed identifier from the fixed catalog
//! - [`BreedRecord`] - Name, image URL and description of one breed
//! - [`BREEDS`], [`CHARACTERISTICS`], [`STATIC_FACTS`] - Fixed page content
//!
//! ### Tier (`tier`)
//! - [`DisplayTier`] - Label derived from the like count
//! - [`like_progress()`] - Gauge value clamped to [`LIKE_PROGRESS_MAX`]
//!
//! ### Types (`types`)
//! - [`PageVariant`] - Which iteration of the page is mounted
//! - [`ViewToken`] - Mount generation used to drop late fetch results
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with the fetch failure taxonomy
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use catworld_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod tier;
pub mod types;

pub use catalog::{
    Breed, BreedRecord, StaticFact, BREEDS, CHARACTERISTICS, FOOTER_COPYRIGHT, FOOTER_TAGLINE,
    HERO_IMAGE_URL, HERO_SUBTITLE, HERO_TITLE, STATIC_FACTS,
};
pub use error::{Error, Result, ResultExt};
pub use tier::{like_progress, like_progress_ratio, DisplayTier, LIKE_PROGRESS_MAX};
pub use types::{AppPhase, PageVariant, ViewToken};
