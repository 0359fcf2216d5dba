//! Single-open, collapsible accordion over the static facts

use catworld_core::STATIC_FACTS;

#[derive(Debug, Clone, Default)]
pub struct AccordionState {
    pub cursor: usize,
    pub open: Option<usize>,
}

impl AccordionState {
    pub fn len(&self) -> usize {
        STATIC_FACTS.len()
    }

    pub fn is_empty(&self) -> bool {
        STATIC_FACTS.is_empty()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
        }
    }

    /// Open the item under the cursor, closing any other; close it if open
    pub fn toggle(&mut self) {
        self.open = if self.open == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
