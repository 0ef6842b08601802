//! Bounded, ordered pollen inventory carried by each bee.

use std::collections::{BTreeSet, VecDeque};

use game_bee_core::{FlowerColor, FlowerId, Pollen};

/// Pollen held by a single bee, oldest first.
///
/// The capacity bounds the inventory after every [`add`](Inventory::add);
/// overflow drops the oldest token rather than refusing the new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    pollen: VecDeque<Pollen>,
    pending_removal: BTreeSet<FlowerId>,
    capacity: usize,
}

impl Inventory {
    /// Creates an empty inventory holding at most `capacity` tokens.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pollen: VecDeque::with_capacity(capacity.saturating_add(1)),
            pending_removal: BTreeSet::new(),
            capacity,
        }
    }

    /// Maximum number of tokens kept after maintenance.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a token, evicting and returning the oldest one on overflow.
    pub fn add(&mut self, pollen: Pollen) -> Option<Pollen> {
        self.pollen.push_back(pollen);
        if self.pollen.len() > self.capacity {
            self.pollen.pop_front()
        } else {
            None
        }
    }

    /// Drops the oldest tokens until the inventory fits its capacity.
    pub fn trim_overflow(&mut self) -> Vec<Pollen> {
        let excess = self.pollen.len().saturating_sub(self.capacity);
        self.pollen.drain(..excess).collect()
    }

    /// Empties the whole inventory if any held token is tainted.
    ///
    /// Returns the number of discarded tokens, zero when nothing was tainted.
    pub fn scan_and_clear_if_tainted(&mut self) -> usize {
        if !self.pollen.iter().any(|pollen| pollen.tainted) {
            return 0;
        }

        let discarded = self.pollen.len();
        self.pollen.clear();
        discarded
    }

    /// Schedules the token harvested from `flower` for removal.
    pub fn mark_for_removal(&mut self, flower: FlowerId) {
        let _ = self.pending_removal.insert(flower);
    }

    /// Removes every scheduled token and clears the schedule.
    ///
    /// Returns the number of tokens removed.
    pub fn remove_matched(&mut self) -> usize {
        if self.pending_removal.is_empty() {
            return 0;
        }

        let pending = std::mem::take(&mut self.pending_removal);
        let before = self.pollen.len();
        self.pollen.retain(|pollen| !pending.contains(&pollen.flower));
        before - self.pollen.len()
    }

    /// Iterates held tokens, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Pollen> {
        self.pollen.iter()
    }

    /// Number of held tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pollen.len()
    }

    /// Reports whether the inventory holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pollen.is_empty()
    }

    /// Reports whether a token harvested from `flower` is held.
    #[must_use]
    pub fn contains(&self, flower: FlowerId) -> bool {
        self.pollen.iter().any(|pollen| pollen.flower == flower)
    }

    /// Reports whether any held token has the provided color.
    #[must_use]
    pub fn holds_color(&self, color: FlowerColor) -> bool {
        self.pollen.iter().any(|pollen| pollen.color == color)
    }

    /// Copies the held tokens into a vector, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Pollen> {
        self.pollen.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pollen(id: u32, tainted: bool) -> Pollen {
        Pollen {
            flower: FlowerId::new(id),
            color: FlowerColor::ALL[id as usize % FlowerColor::ALL.len()],
            tainted,
        }
    }

    fn held_ids(inventory: &Inventory) -> Vec<u32> {
        inventory.iter().map(|pollen| pollen.flower.get()).collect()
    }

    #[test]
    fn overflow_keeps_the_most_recent_tokens() {
        let mut inventory = Inventory::with_capacity(6);
        let mut evicted = Vec::new();
        for id in 0..10 {
            if let Some(dropped) = inventory.add(pollen(id, false)) {
                evicted.push(dropped.flower.get());
            }
            assert!(inventory.len() <= 6);
        }

        assert_eq!(inventory.capacity(), 6);
        assert_eq!(held_ids(&inventory), vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(evicted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn one_tainted_token_voids_everything() {
        let mut inventory = Inventory::with_capacity(6);
        let _ = inventory.add(pollen(0, false));
        let _ = inventory.add(pollen(1, true));
        let _ = inventory.add(pollen(2, false));

        assert_eq!(inventory.scan_and_clear_if_tainted(), 3);
        assert!(inventory.is_empty());
    }

    #[test]
    fn clean_inventory_survives_the_scan() {
        let mut inventory = Inventory::with_capacity(6);
        let _ = inventory.add(pollen(0, false));
        let _ = inventory.add(pollen(1, false));

        assert_eq!(inventory.scan_and_clear_if_tainted(), 0);
        assert_eq!(held_ids(&inventory), vec![0, 1]);
    }

    #[test]
    fn matched_tokens_are_removed_and_schedule_cleared() {
        let mut inventory = Inventory::with_capacity(6);
        for id in 0..4 {
            let _ = inventory.add(pollen(id, false));
        }
        inventory.mark_for_removal(FlowerId::new(1));
        inventory.mark_for_removal(FlowerId::new(3));
        inventory.mark_for_removal(FlowerId::new(42));

        assert_eq!(inventory.remove_matched(), 2);
        assert_eq!(held_ids(&inventory), vec![0, 2]);
        assert_eq!(inventory.remove_matched(), 0);
    }

    #[test]
    fn trimming_is_a_no_op_within_capacity() {
        let mut inventory = Inventory::with_capacity(2);
        let _ = inventory.add(pollen(0, false));
        assert!(inventory.trim_overflow().is_empty());
        assert!(inventory.contains(FlowerId::new(0)));
        assert!(inventory.holds_color(FlowerColor::LightCoral));
    }
}
