use crate::core::data::colour::Colour;

/// Sparse per-step override colouring for the indices touched by the last
/// mutation. Presence of an index is an exact membership check; a step's
/// map holds at most two entries and is consumed by exactly one render
/// call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightMap {
    entries: Vec<(usize, Colour)>,
}

impl HighlightMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, index: usize, colour: Colour) {
        if let Some(entry) = self.entries.iter_mut().find(|(i, _)| *i == index) {
            entry.1 = colour;
            return;
        }

        self.entries.push((index, colour));
    }

    #[must_use]
    pub fn colour_for(&self, index: usize) -> Option<Colour> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, colour)| *colour)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
