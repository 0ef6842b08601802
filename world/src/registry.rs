//! Live collection of flowers keyed by monotonically assigned identifiers.

use std::collections::BTreeSet;

use game_bee_core::{FlowerColor, FlowerId, FlowerKind, FlowerRole, FlowerSnapshot, Point};

/// Parameters describing a flower about to be planted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerSeed {
    /// Location of the new flower.
    pub position: Point,
    /// Palette entry assigned to the flower.
    pub color: FlowerColor,
    /// Role the flower plays.
    pub role: FlowerRole,
    /// Whether the flower's pollen contaminates inventories.
    pub tainted: bool,
    /// Starting growth radius.
    pub radius: f32,
}

/// Flower stored in the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct Flower {
    id: FlowerId,
    pub(crate) position: Point,
    color: FlowerColor,
    pub(crate) kind: FlowerKind,
    tainted: bool,
    radius: f32,
}

impl Flower {
    /// Identifier assigned at spawn.
    #[must_use]
    pub const fn id(&self) -> FlowerId {
        self.id
    }

    /// Current location.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Palette entry.
    #[must_use]
    pub const fn color(&self) -> FlowerColor {
        self.color
    }

    /// Role and harvest state.
    #[must_use]
    pub const fn kind(&self) -> FlowerKind {
        self.kind
    }

    /// Whether the flower's pollen contaminates inventories.
    #[must_use]
    pub const fn tainted(&self) -> bool {
        self.tainted
    }

    /// Current growth radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Grows the radius by `step`, never past `cap`.
    pub fn grow(&mut self, step: f32, cap: f32) {
        self.radius = (self.radius + step).min(cap);
    }

    /// Captures an immutable snapshot of the flower.
    #[must_use]
    pub fn snapshot(&self) -> FlowerSnapshot {
        FlowerSnapshot {
            id: self.id,
            position: self.position,
            color: self.color,
            kind: self.kind,
            tainted: self.tainted,
            radius: self.radius,
        }
    }
}

/// Registry of live flowers.
///
/// Identifiers are handed out by a counter that only moves forward, so an
/// identifier that left the registry never names a different flower later.
/// Removal is two-phase: flowers are marked during the tick and dropped in a
/// single [`compact`](FlowerRegistry::compact) pass.
#[derive(Clone, Debug, Default)]
pub struct FlowerRegistry {
    flowers: Vec<Flower>,
    pending_removal: BTreeSet<FlowerId>,
    next_id: u32,
}

impl FlowerRegistry {
    /// Creates an empty registry whose first flower receives identifier zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plants a flower and returns its fresh identifier.
    ///
    /// Returns `None` without planting once the identifier space is used up.
    pub fn spawn(&mut self, seed: FlowerSeed) -> Option<FlowerId> {
        let id = FlowerId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1)?;
        self.flowers.push(Flower {
            id,
            position: seed.position,
            color: seed.color,
            kind: FlowerKind::from_role(seed.role),
            tainted: seed.tainted,
            radius: seed.radius,
        });
        Some(id)
    }

    /// Schedules a flower for removal at the next compaction.
    pub fn mark_for_removal(&mut self, id: FlowerId) {
        let _ = self.pending_removal.insert(id);
    }

    /// Drops every marked flower, keeping survivors in their original order.
    ///
    /// Returns the removed identifiers in registry order.
    pub fn compact(&mut self) -> Vec<FlowerId> {
        if self.pending_removal.is_empty() {
            return Vec::new();
        }

        let pending = std::mem::take(&mut self.pending_removal);
        let mut removed = Vec::with_capacity(pending.len());
        self.flowers.retain(|flower| {
            if pending.contains(&flower.id) {
                removed.push(flower.id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Iterates the live flowers in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Flower> {
        self.flowers.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Flower> {
        self.flowers.iter_mut()
    }

    /// Looks up a live flower by identifier.
    #[must_use]
    pub fn get(&self, id: FlowerId) -> Option<&Flower> {
        let index = self.index_of(id)?;
        self.flowers.get(index)
    }

    /// Looks up a live flower by identifier for mutation.
    pub fn get_mut(&mut self, id: FlowerId) -> Option<&mut Flower> {
        let index = self.index_of(id)?;
        self.flowers.get_mut(index)
    }

    /// Reports whether the flower is still live.
    #[must_use]
    pub fn contains(&self, id: FlowerId) -> bool {
        self.index_of(id).is_some()
    }

    /// Reports whether no flowers are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Removes every live flower without rewinding the identifier counter.
    pub fn clear(&mut self) {
        self.flowers.clear();
        self.pending_removal.clear();
    }

    // Spawn order is identifier order and compaction preserves it.
    fn index_of(&self, id: FlowerId) -> Option<usize> {
        self.flowers.binary_search_by_key(&id, |flower| flower.id).ok()
    }
}
