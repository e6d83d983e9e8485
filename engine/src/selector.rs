//! Tab selection among the architecture presets.

use embedscope_types::Architecture;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelSelector {
    selected: Architecture,
}

impl ModelSelector {
    #[must_use]
    pub fn new(selected: Architecture) -> Self {
        Self { selected }
    }

    #[must_use]
    pub fn selected(&self) -> Architecture {
        self.selected
    }

    pub fn select(&mut self, architecture: Architecture) {
        self.selected = architecture;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Select by 0-based tab index. Out-of-range indices leave the selection alone.
    pub fn select_index(&mut self, index: usize) -> bool {
        match Architecture::from_index(index) {
            Some(architecture) => {
                self.selected = architecture;
                true
            }
            None => false,
        }
    }
}
