use crate::types::DisplayRecord;

/// Placeholder records for layouts that need a fixed number of slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackPolicy {
    slots: Option<usize>,
    placeholders: Vec<DisplayRecord>,
    seeded: bool,
}

impl FallbackPolicy {
    /// No slot requirement and no placeholders.
    pub fn none() -> Self {
        Self::default()
    }

    /// Exactly `placeholders.len()` slots, filled positionally.
    pub fn slots(placeholders: Vec<DisplayRecord>) -> Self {
        Self {
            slots: Some(placeholders.len()),
            placeholders,
            seeded: false,
        }
    }

    /// Show the placeholder set before the fetch resolves, and keep it when
    /// the fetch fails.
    pub fn seeded(mut self) -> Self {
        self.seeded = true;
        self
    }

    pub fn slot_count(&self) -> Option<usize> {
        self.slots
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Placeholder for a slot index.
    pub fn placeholder(&self, slot: usize) -> Option<&DisplayRecord> {
        self.placeholders.get(slot)
    }

    pub fn initial_items(&self) -> Vec<DisplayRecord> {
        if self.seeded {
            self.placeholders.clone()
        } else {
            Vec::new()
        }
    }

    /// Keeps the first `slots` records in received order and pads the rest
    /// with the placeholder of each remaining slot.
    pub fn apply(&self, mut records: Vec<DisplayRecord>) -> Vec<DisplayRecord> {
        let Some(slots) = self.slots else {
            return records;
        };
        records.truncate(slots);
        let live = records.len();
        records.extend(self.placeholders.iter().skip(live).take(slots - live).cloned());
        records
    }
}
