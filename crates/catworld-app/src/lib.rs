//! catworld-app - Application state and orchestration for CatWorld
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the page:
//! state, messages, the update function, and the actions that run the remote
//! fetches. It also owns configuration loading.

pub mod accordion;
pub mod actions;
pub mod animation;
pub mod carousel;
pub mod config;
pub mod facts;
pub mod handler;
pub mod input_key;
pub mod likes;
pub mod message;
pub mod page;
pub mod process;
pub mod query_cache;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page::{Placement, ScrollState, Section};
pub use process::process_message;
pub use state::{AppState, CatOfTheDayView, Focus};
