//! Remote fact list owned by the mounted view

use chrono::{DateTime, Local};

use crate::page::wrap_words;

/// Whether a refresh is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactsStatus {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone)]
pub struct FactsState {
    batch_size: usize,
    facts: Vec<String>,
    pub status: FactsStatus,
    /// Last refresh fell back to the placeholder
    pub failed: bool,
    pub last_updated: Option<DateTime<Local>>,
}

impl FactsState {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            facts: Vec::new(),
            status: FactsStatus::Idle,
            failed: false,
            last_updated: None,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn is_loading(&self) -> bool {
        self.status == FactsStatus::Loading
    }

    /// Rows the list takes with each fact wrapped at `text_width` columns.
    ///
    /// Never fewer than the batch size, so the section keeps its height while
    /// the first batch loads. A width of 0 (nothing rendered yet) counts one
    /// row per fact.
    pub fn rows(&self, text_width: usize) -> usize {
        let wrapped = if text_width == 0 {
            self.facts.len()
        } else {
            self.facts
                .iter()
                .map(|f| wrap_words(f, text_width).len())
                .sum()
        };
        wrapped.max(self.batch_size)
    }

    /// Mark a refresh as started. Returns `false` if one is already in flight.
    pub fn begin_refresh(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = FactsStatus::Loading;
        true
    }

    /// Replace the whole list with a finished batch
    pub fn apply(&mut self, facts: Vec<String>, failed: bool) {
        self.facts = facts;
        self.failed = failed;
        self.status = FactsStatus::Idle;
        self.last_updated = Some(Local::now());
    }
}
