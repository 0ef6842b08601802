#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Game Bee.

mod contact;
mod field;
pub mod inventory;
pub mod registry;

use game_bee_core::{
    BeeId, BeePlacement, BeeSnapshot, Command, Event, Facing, FieldConfig, FlowerId,
    MovementPolicy, Point, WELCOME_BANNER,
};
use tracing::{debug, warn};

use self::{
    inventory::Inventory,
    registry::{FlowerRegistry, FlowerSeed},
};

/// Represents the authoritative Game Bee world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: FieldConfig,
    flowers: FlowerRegistry,
    bees: Vec<Bee>,
    tick_index: u64,
}

impl World {
    /// Creates a new world using the default field configuration and roster.
    #[must_use]
    pub fn new() -> Self {
        let config = FieldConfig::default();
        let bees = place_roster(&config);
        Self {
            banner: WELCOME_BANNER,
            config,
            flowers: FlowerRegistry::new(),
            bees,
            tick_index: 0,
        }
    }

    fn bee_mut(&mut self, bee_id: BeeId) -> Option<&mut Bee> {
        self.bees.iter_mut().find(|bee| bee.id == bee_id)
    }

    fn advance(&mut self, pointer: Option<Point>, out_events: &mut Vec<Event>) {
        self.tick_index = self.tick_index.saturating_add(1);
        out_events.push(Event::TimeAdvanced {
            tick: self.tick_index,
        });

        for bee in self.bees.iter_mut() {
            contact::resolve(
                bee.id,
                bee.position,
                &mut bee.inventory,
                &mut self.flowers,
                &self.config,
                out_events,
            );
        }

        for bee in self.bees.iter_mut() {
            let destination = match bee.policy {
                MovementPolicy::FollowPointer => pointer,
                MovementPolicy::PursueObjective => bee
                    .objective
                    .and_then(|objective| self.flowers.get(objective))
                    .map(|flower| flower.position()),
            };
            if let Some(destination) = destination {
                bee.ease_toward(destination, self.config.ease_factor);
            }
        }

        field::drift(&mut self.flowers, &self.config);
        field::mark_expired(&mut self.flowers, &self.config);
        for flower in self.flowers.compact() {
            debug!(flower = flower.get(), tick = self.tick_index, "flower expired");
            out_events.push(Event::FlowerExpired { flower });
        }

        for bee in self.bees.iter_mut() {
            for evicted in bee.inventory.trim_overflow() {
                out_events.push(Event::PollenEvicted {
                    bee: bee.id,
                    flower: evicted.flower,
                });
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureField { config } => {
            if let Err(reason) = config.validate() {
                warn!(%reason, "rejected field configuration");
                out_events.push(Event::ConfigurationRejected { reason });
                return;
            }

            world.flowers.clear();
            world.bees = place_roster(&config);
            world.tick_index = 0;
            out_events.push(Event::FieldConfigured {
                width: config.width,
                height: config.height,
                bees: world.bees.len(),
            });
            world.config = config;
        }
        Command::Tick { pointer } => world.advance(pointer, out_events),
        Command::SpawnFlower {
            position,
            color,
            role,
            tainted,
        } => {
            let Some(flower) = world.flowers.spawn(FlowerSeed {
                position,
                color,
                role,
                tainted,
                radius: world.config.initial_radius,
            }) else {
                warn!("flower identifiers exhausted, spawn dropped");
                return;
            };
            out_events.push(Event::FlowerSpawned {
                flower,
                position,
                color,
                role,
            });
        }
        Command::AssignObjective { bee, objective } => {
            let Some(target) = world.bee_mut(bee) else {
                return;
            };
            if target.policy != MovementPolicy::PursueObjective || target.objective == objective {
                return;
            }
            target.objective = objective;
            out_events.push(Event::ObjectiveChanged { bee, objective });
        }
        Command::SettleInventories => {
            for bee in world.bees.iter_mut() {
                let discarded = bee.inventory.scan_and_clear_if_tainted();
                if discarded > 0 {
                    debug!(bee = bee.id.get(), discarded, "tainted pollen voided inventory");
                    out_events.push(Event::InventoryContaminated {
                        bee: bee.id,
                        discarded,
                    });
                }
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use game_bee_core::{BeeView, FieldConfig, FlowerId, FlowerSnapshot, FlowerView};

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the active field configuration.
    #[must_use]
    pub fn field_config(world: &World) -> &FieldConfig {
        &world.config
    }

    /// Number of ticks simulated since the field was last configured.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Captures a read-only view of the live flowers.
    #[must_use]
    pub fn flower_view(world: &World) -> FlowerView {
        FlowerView::from_snapshots(world.flowers.iter().map(|flower| flower.snapshot()).collect())
    }

    /// Captures a single live flower, or `None` once it has left the field.
    #[must_use]
    pub fn flower(world: &World, id: FlowerId) -> Option<FlowerSnapshot> {
        world.flowers.get(id).map(|flower| flower.snapshot())
    }

    /// Captures a read-only view of every bee.
    #[must_use]
    pub fn bee_view(world: &World) -> BeeView {
        BeeView::from_snapshots(world.bees.iter().map(super::Bee::snapshot).collect())
    }
}

#[derive(Clone, Debug)]
struct Bee {
    id: BeeId,
    policy: MovementPolicy,
    position: Point,
    facing: Facing,
    inventory: Inventory,
    objective: Option<FlowerId>,
}

impl Bee {
    fn from_placement(id: BeeId, placement: &BeePlacement, capacity: usize) -> Self {
        Self {
            id,
            policy: placement.policy,
            position: placement.position,
            facing: Facing::default(),
            inventory: Inventory::with_capacity(capacity),
            objective: None,
        }
    }

    fn ease_toward(&mut self, destination: Point, factor: f32) {
        let next = self.position.eased_toward(destination, factor);
        if next.x < self.position.x {
            self.facing = Facing::Left;
        } else if next.x > self.position.x {
            self.facing = Facing::Right;
        }
        self.position = next;
    }

    fn snapshot(&self) -> BeeSnapshot {
        BeeSnapshot {
            id: self.id,
            policy: self.policy,
            position: self.position,
            facing: self.facing,
            pollen: self.inventory.to_vec(),
            objective: self.objective,
        }
    }
}

fn place_roster(config: &FieldConfig) -> Vec<Bee> {
    config
        .roster
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let id = BeeId::new(u32::try_from(index).unwrap_or(u32::MAX));
            Bee::from_placement(id, placement, config.inventory_capacity)
        })
        .collect()
}
