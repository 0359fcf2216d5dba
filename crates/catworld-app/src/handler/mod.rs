//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event mapping
//! - `view`: Mount/teardown and fetch result handling

pub(crate) mod keys;
pub(crate) mod update;
pub(crate) mod view;


use catworld_core::ViewToken;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch a batch of `count` facts for the view identified by `token`
    FetchFacts { token: ViewToken, count: usize },

    /// Run the cat-of-the-day image search.
    ///
    /// Only returned on a query cache miss, so at most once per session.
    FetchCatOfTheDay,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn then(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
