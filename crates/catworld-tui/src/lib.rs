//! catworld-tui - Terminal UI for CatWorld
//!
//! This crate provides the ratatui-based page: terminal setup, event polling,
//! the scrolling page renderer, and one widget per page section. State and
//! update logic live in catworld-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
