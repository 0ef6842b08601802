#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Game Bee simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! views, and respond exclusively with new command batches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Game Bee.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the field configuration, clearing flowers and resetting the roster.
    ConfigureField {
        /// Configuration the world should adopt.
        config: FieldConfig,
    },
    /// Advances the simulation by a single frame.
    Tick {
        /// Pointer position sampled by the host for this frame, if any.
        pointer: Option<Point>,
    },
    /// Requests that a new flower be planted in the field.
    SpawnFlower {
        /// Location of the new flower.
        position: Point,
        /// Palette entry assigned to the flower.
        color: FlowerColor,
        /// Role the flower plays in the pollination loop.
        role: FlowerRole,
        /// Whether the flower's pollen contaminates inventories.
        tainted: bool,
    },
    /// Sets or clears the objective pursued by a helper bee.
    AssignObjective {
        /// Bee receiving the objective.
        bee: BeeId,
        /// Flower to pursue, or `None` to go idle.
        objective: Option<FlowerId>,
    },
    /// Discards every inventory holding tainted pollen.
    SettleInventories,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the world adopted a new field configuration.
    FieldConfigured {
        /// Width of the visible field in world units.
        width: f32,
        /// Height of the visible field in world units.
        height: f32,
        /// Number of bees placed from the roster.
        bees: usize,
    },
    /// Reports that a configuration was rejected and the world left untouched.
    ConfigurationRejected {
        /// Validation failure that caused the rejection.
        reason: ConfigError,
    },
    /// Indicates that the simulation advanced by one frame.
    TimeAdvanced {
        /// Index of the frame that just completed, starting at one.
        tick: u64,
    },
    /// Confirms that a flower was planted.
    FlowerSpawned {
        /// Identifier assigned to the flower.
        flower: FlowerId,
        /// Location of the flower when planted.
        position: Point,
        /// Palette entry assigned to the flower.
        color: FlowerColor,
        /// Role the flower plays.
        role: FlowerRole,
    },
    /// A bee harvested the pollen of a source flower.
    PollenGathered {
        /// Bee that harvested the pollen.
        bee: BeeId,
        /// Source flower that was harvested.
        flower: FlowerId,
        /// Color of the harvested pollen.
        color: FlowerColor,
    },
    /// A bee delivered pollen to a matching sink flower.
    PollenDelivered {
        /// Bee that delivered the pollen.
        bee: BeeId,
        /// Sink flower that received the pollen.
        sink: FlowerId,
        /// Source flower the pollen was harvested from.
        source: FlowerId,
    },
    /// The oldest pollen of a full inventory was dropped.
    PollenEvicted {
        /// Bee whose inventory overflowed.
        bee: BeeId,
        /// Source flower of the dropped pollen.
        flower: FlowerId,
    },
    /// A flower left the visible field and was removed from the registry.
    FlowerExpired {
        /// Identifier of the removed flower.
        flower: FlowerId,
    },
    /// A helper bee changed the flower it pursues.
    ObjectiveChanged {
        /// Bee whose objective changed.
        bee: BeeId,
        /// New objective, or `None` when the bee went idle.
        objective: Option<FlowerId>,
    },
    /// Tainted pollen voided a bee's whole inventory.
    InventoryContaminated {
        /// Bee that lost its inventory.
        bee: BeeId,
        /// Number of pollen tokens discarded.
        discarded: usize,
    },
}

/// Unique identifier assigned to a flower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlowerId(u32);

impl FlowerId {
    /// Creates a new flower identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a bee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BeeId(u32);

impl BeeId {
    /// Creates a new bee identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location in the field expressed in world units.
///
/// The field origin is the upper-left corner; `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two points.
    #[must_use]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Moves a fraction of the way toward `target`.
    #[must_use]
    pub fn eased_toward(self, target: Point, factor: f32) -> Point {
        Point::new(
            self.x + (target.x - self.x) * factor,
            self.y + (target.y - self.y) * factor,
        )
    }
}

/// Named palette shared by flowers and pollen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerColor {
    /// Soft red.
    LightCoral,
    /// Plum purple.
    Plum,
    /// Medium purple.
    MediumPurple,
    /// Sea green.
    LightSeaGreen,
    /// Pale pink.
    LightPink,
    /// Sky blue.
    LightSkyBlue,
}

impl FlowerColor {
    /// Every palette entry in canonical order.
    pub const ALL: [FlowerColor; 6] = [
        FlowerColor::LightCoral,
        FlowerColor::Plum,
        FlowerColor::MediumPurple,
        FlowerColor::LightSeaGreen,
        FlowerColor::LightPink,
        FlowerColor::LightSkyBlue,
    ];

    /// Position of the color within [`FlowerColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::LightCoral => 0,
            Self::Plum => 1,
            Self::MediumPurple => 2,
            Self::LightSeaGreen => 3,
            Self::LightPink => 4,
            Self::LightSkyBlue => 5,
        }
    }

    /// CSS color keyword naming the palette entry.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LightCoral => "lightcoral",
            Self::Plum => "plum",
            Self::MediumPurple => "mediumpurple",
            Self::LightSeaGreen => "lightseagreen",
            Self::LightPink => "lightpink",
            Self::LightSkyBlue => "lightskyblue",
        }
    }

    /// Byte RGB components of the palette entry.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::LightCoral => (0xf0, 0x80, 0x80),
            Self::Plum => (0xdd, 0xa0, 0xdd),
            Self::MediumPurple => (0x93, 0x70, 0xdb),
            Self::LightSeaGreen => (0x20, 0xb2, 0xaa),
            Self::LightPink => (0xff, 0xb6, 0xc1),
            Self::LightSkyBlue => (0x87, 0xce, 0xfa),
        }
    }
}

/// Role a flower is planted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowerRole {
    /// Pollinator flower whose pollen can be harvested once.
    Source,
    /// Flower that accepts pollen of its own color.
    Sink,
    /// Flower that takes no part in pollination.
    Barren,
}

/// Live state of a flower, tagged by its role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowerKind {
    /// Pollinator flower.
    Source {
        /// Set once a bee has gathered the flower's pollen.
        harvested: bool,
    },
    /// Flower waiting to be pollinated.
    Sink,
    /// Flower without a role.
    Barren,
}

impl FlowerKind {
    /// Fresh state for a flower planted with the provided role.
    #[must_use]
    pub const fn from_role(role: FlowerRole) -> Self {
        match role {
            FlowerRole::Source => Self::Source { harvested: false },
            FlowerRole::Sink => Self::Sink,
            FlowerRole::Barren => Self::Barren,
        }
    }

    /// Role the flower was planted with.
    #[must_use]
    pub const fn role(self) -> FlowerRole {
        match self {
            Self::Source { .. } => FlowerRole::Source,
            Self::Sink => FlowerRole::Sink,
            Self::Barren => FlowerRole::Barren,
        }
    }

    /// Reports whether the flower is a source whose pollen is still available.
    #[must_use]
    pub const fn is_harvestable(self) -> bool {
        matches!(self, Self::Source { harvested: false })
    }

    /// Reports whether the flower is a source that has already been harvested.
    #[must_use]
    pub const fn is_harvested(self) -> bool {
        matches!(self, Self::Source { harvested: true })
    }

    /// Reports whether the flower accepts pollen.
    #[must_use]
    pub const fn is_sink(self) -> bool {
        matches!(self, Self::Sink)
    }
}

/// How a bee decides where to fly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPolicy {
    /// Eases toward the pointer supplied by the host.
    FollowPointer,
    /// Eases toward the objective chosen by the targeting system.
    PursueObjective,
}

/// Horizontal orientation of a bee sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Sprite mirrored to face left.
    Left,
    /// Sprite facing right.
    #[default]
    Right,
}

/// Pollen token held in a bee's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pollen {
    /// Source flower the pollen was harvested from.
    pub flower: FlowerId,
    /// Color of the source flower.
    pub color: FlowerColor,
    /// Whether the source flower was tainted.
    pub tainted: bool,
}

/// Starting location and behaviour of a bee placed when the field is configured.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeePlacement {
    /// Movement policy assigned to the bee.
    pub policy: MovementPolicy,
    /// Starting position.
    pub position: Point,
}

/// Tunable constants consumed by the world and systems.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Width of the visible field.
    pub width: f32,
    /// Height of the visible field. Flowers are planted along this edge.
    pub height: f32,
    /// Distance within which a bee touches a flower.
    pub interaction_radius: f32,
    /// Maximum number of pollen tokens a bee holds.
    pub inventory_capacity: usize,
    /// Number of ticks between flower spawns.
    pub spawn_interval: u64,
    /// Smallest horizontal coordinate a flower is planted at.
    pub spawn_margin: f32,
    /// Fraction of the remaining distance a bee covers per tick.
    pub ease_factor: f32,
    /// Radius of a freshly planted flower.
    pub initial_radius: f32,
    /// Radius gained per delivered pollen.
    pub growth_step: f32,
    /// Largest radius a flower may grow to.
    pub growth_cap: f32,
    /// Distance past the top, left or right edge at which flowers expire.
    pub expiry_margin: f32,
    /// Upward drift applied to every flower per tick.
    pub rise_speed: f32,
    /// Amplitude of the lateral sway applied per tick.
    pub lateral_amplitude: f32,
    /// Frequency of the lateral sway with respect to the vertical position.
    pub lateral_frequency: f32,
    /// Bees placed when the field is configured, in processing order.
    pub roster: Vec<BeePlacement>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            interaction_radius: 50.0,
            inventory_capacity: 6,
            spawn_interval: 10,
            spawn_margin: 10.0,
            ease_factor: 0.2,
            initial_radius: 30.0,
            growth_step: 5.0,
            growth_cap: 50.0,
            expiry_margin: 30.0,
            rise_speed: 1.0,
            lateral_amplitude: 1.0,
            lateral_frequency: 0.01,
            roster: vec![
                BeePlacement {
                    policy: MovementPolicy::PursueObjective,
                    position: Point::new(500.0, 400.0),
                },
                BeePlacement {
                    policy: MovementPolicy::PursueObjective,
                    position: Point::new(200.0, 300.0),
                },
                BeePlacement {
                    policy: MovementPolicy::FollowPointer,
                    position: Point::new(500.0, 400.0),
                },
            ],
        }
    }
}

impl FieldConfig {
    /// Checks that the configuration describes a playable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.spawn_margin >= 0.0 && self.spawn_margin < self.width) {
            return Err(ConfigError::SpawnMarginOutsideField(self.spawn_margin));
        }
        if !(self.interaction_radius >= 0.0) {
            return Err(ConfigError::NegativeInteractionRadius(
                self.interaction_radius,
            ));
        }
        if self.inventory_capacity == 0 {
            return Err(ConfigError::ZeroInventoryCapacity);
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if !(self.ease_factor > 0.0 && self.ease_factor <= 1.0) {
            return Err(ConfigError::EaseFactorOutOfRange(self.ease_factor));
        }
        if !(self.growth_step >= 0.0) {
            return Err(ConfigError::NegativeGrowthStep(self.growth_step));
        }
        if !(self.initial_radius >= 0.0 && self.initial_radius <= self.growth_cap) {
            return Err(ConfigError::RadiusExceedsCap {
                initial: self.initial_radius,
                cap: self.growth_cap,
            });
        }
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        Ok(())
    }
}

/// Reasons a field configuration may be rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height is zero, negative or not a number.
    #[error("field dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// Flowers could never be planted inside the field.
    #[error("spawn margin {0} must lie within the field width")]
    SpawnMarginOutsideField(f32),
    /// Interaction radius is negative or not a number.
    #[error("interaction radius must be non-negative, got {0}")]
    NegativeInteractionRadius(f32),
    /// Bees could never hold pollen.
    #[error("inventory capacity must be at least one")]
    ZeroInventoryCapacity,
    /// Flowers would never be planted.
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
    /// Ease factor would stall or overshoot movement.
    #[error("ease factor must lie in (0, 1], got {0}")]
    EaseFactorOutOfRange(f32),
    /// Growth step is negative or not a number.
    #[error("growth step must be non-negative, got {0}")]
    NegativeGrowthStep(f32),
    /// Fresh flowers would already exceed the growth cap.
    #[error("initial radius {initial} must lie between zero and the growth cap {cap}")]
    RadiusExceedsCap {
        /// Requested initial radius.
        initial: f32,
        /// Requested growth cap.
        cap: f32,
    },
    /// No bees would be placed.
    #[error("roster must place at least one bee")]
    EmptyRoster,
}

/// Immutable representation of a single flower used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerSnapshot {
    /// Unique identifier assigned to the flower.
    pub id: FlowerId,
    /// Current location.
    pub position: Point,
    /// Palette entry.
    pub color: FlowerColor,
    /// Role and harvest state.
    pub kind: FlowerKind,
    /// Whether the flower's pollen contaminates inventories.
    pub tainted: bool,
    /// Current growth radius.
    pub radius: f32,
}

/// Read-only snapshot describing all live flowers.
#[derive(Clone, Debug, Default)]
pub struct FlowerView {
    snapshots: Vec<FlowerSnapshot>,
}

impl FlowerView {
    /// Creates a new flower view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<FlowerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured flower snapshots in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &FlowerSnapshot> {
        self.snapshots.iter()
    }

    /// Looks up a live flower by identifier.
    #[must_use]
    pub fn get(&self, id: FlowerId) -> Option<&FlowerSnapshot> {
        self.snapshots
            .binary_search_by_key(&id, |snapshot| snapshot.id)
            .ok()
            .and_then(|index| self.snapshots.get(index))
    }

    /// Number of live flowers captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view captured no flowers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<FlowerSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single bee used for queries.
#[derive(Clone, Debug, PartialEq)]
pub struct BeeSnapshot {
    /// Unique identifier assigned to the bee.
    pub id: BeeId,
    /// Movement policy of the bee.
    pub policy: MovementPolicy,
    /// Current location.
    pub position: Point,
    /// Sprite orientation.
    pub facing: Facing,
    /// Held pollen, oldest first.
    pub pollen: Vec<Pollen>,
    /// Flower currently pursued, if any.
    pub objective: Option<FlowerId>,
}

/// Read-only snapshot describing every bee on the field.
#[derive(Clone, Debug, Default)]
pub struct BeeView {
    snapshots: Vec<BeeSnapshot>,
}

impl BeeView {
    /// Creates a new bee view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<BeeSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured bee snapshots in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &BeeSnapshot> {
        self.snapshots.iter()
    }

    /// Looks up a bee by identifier.
    #[must_use]
    pub fn get(&self, id: BeeId) -> Option<&BeeSnapshot> {
        self.snapshots.iter().find(|snapshot| snapshot.id == id)
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<BeeSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, FieldConfig, FlowerColor, FlowerId, FlowerKind, FlowerRole, FlowerSnapshot,
        FlowerView, Point,
    };

    fn snapshot(id: u32) -> FlowerSnapshot {
        FlowerSnapshot {
            id: FlowerId::new(id),
            position: Point::new(id as f32, 0.0),
            color: FlowerColor::Plum,
            kind: FlowerKind::Sink,
            tainted: false,
            radius: 30.0,
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let origin = Point::new(1.0, 1.0);
        let destination = Point::new(4.0, 5.0);
        assert!((origin.distance(destination) - 5.0).abs() < f32::EPSILON);
        assert!((destination.distance(origin) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn easing_covers_a_fixed_fraction() {
        let from = Point::new(0.0, 100.0);
        let eased = from.eased_toward(Point::new(50.0, 0.0), 0.2);
        assert_eq!(eased, Point::new(10.0, 80.0));
    }

    #[test]
    fn palette_indices_follow_canonical_order() {
        for (index, color) in FlowerColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), index);
        }
        assert_eq!(FlowerColor::Plum.name(), "plum");
    }

    #[test]
    fn planted_sources_start_unharvested() {
        let kind = FlowerKind::from_role(FlowerRole::Source);
        assert!(kind.is_harvestable());
        assert!(!kind.is_harvested());
        assert_eq!(kind.role(), FlowerRole::Source);
    }

    #[test]
    fn flower_view_looks_up_by_identifier() {
        let view = FlowerView::from_snapshots(vec![snapshot(7), snapshot(2), snapshot(4)]);
        let ids: Vec<u32> = view.iter().map(|flower| flower.id.get()).collect();
        assert_eq!(ids, vec![2, 4, 7]);
        assert_eq!(view.get(FlowerId::new(4)).map(|f| f.id), Some(FlowerId::new(4)));
        assert!(view.get(FlowerId::new(5)).is_none());
    }

    #[test]
    fn default_configuration_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_unplayable_fields() {
        let mut config = FieldConfig::default();
        config.inventory_capacity = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInventoryCapacity));

        let mut config = FieldConfig::default();
        config.ease_factor = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::EaseFactorOutOfRange(1.5)));

        let mut config = FieldConfig::default();
        config.initial_radius = 60.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::RadiusExceedsCap {
                initial: 60.0,
                cap: 50.0
            })
        );

        let mut config = FieldConfig::default();
        config.roster.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyRoster));
    }
}
