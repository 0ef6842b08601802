//! Running tallies of the events a session produced.

use game_bee_core::Event;
use serde::Serialize;

/// Counters accumulated from every event the simulation emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SessionStats {
    /// Ticks simulated since the field was last configured.
    pub ticks: u64,
    /// Flowers planted by the spawning system or by explicit commands.
    pub flowers_spawned: u64,
    /// Flowers that drifted out of bounds and were removed.
    pub flowers_expired: u64,
    /// Sources harvested by any bee.
    pub pollen_gathered: u64,
    /// Individual pollen tokens delivered to matching sinks.
    pub deliveries: u64,
    /// Pollen tokens dropped because an inventory was full.
    pub evictions: u64,
    /// Inventories voided because they held tainted pollen.
    pub contaminations: u64,
    /// Pollen tokens lost to contamination.
    pub discarded_pollen: u64,
}

impl SessionStats {
    /// Folds a single event into the tallies.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::FieldConfigured { .. } => *self = Self::default(),
            Event::TimeAdvanced { tick } => self.ticks = *tick,
            Event::FlowerSpawned { .. } => self.flowers_spawned += 1,
            Event::FlowerExpired { .. } => self.flowers_expired += 1,
            Event::PollenGathered { .. } => self.pollen_gathered += 1,
            Event::PollenDelivered { .. } => self.deliveries += 1,
            Event::PollenEvicted { .. } => self.evictions += 1,
            Event::InventoryContaminated { discarded, .. } => {
                self.contaminations += 1;
                self.discarded_pollen += u64::try_from(*discarded).unwrap_or(u64::MAX);
            }
            Event::ConfigurationRejected { .. } | Event::ObjectiveChanged { .. } => {}
        }
    }
}
