#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame driver that sequences the world and its systems once per tick.
//!
//! A frame runs in a fixed order:
//!
//! 1. the world advances time, resolves every bee's contacts, moves the bees,
//!    drifts the flowers and drops the ones that left the field;
//! 2. the spawning system reacts to the frame's events;
//! 3. the targeting system inspects the resulting field and re-targets the
//!    helper bees;
//! 4. the world voids inventories holding tainted pollen.
//!
//! Contacts therefore always see the objective chosen on the previous frame,
//! and a source harvested this frame is never handed out as a new objective.

mod stats;

use game_bee_core::{Command, ConfigError, Event, FieldConfig, Point};
use game_bee_system_spawning::{Config as SpawningConfig, Spawning};
use game_bee_system_targeting::Targeting;
use game_bee_world::{self as world, query, World};
use tracing::trace;

pub use self::stats::SessionStats;

/// Owns the world together with the systems that drive it.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    spawning: Spawning,
    targeting: Targeting,
    stats: SessionStats,
    events: Vec<Event>,
    commands: Vec<Command>,
}

impl Simulation {
    /// Creates a simulation on the default field, seeding flower spawns with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            world: World::new(),
            spawning: Spawning::new(SpawningConfig::new(seed)),
            targeting: Targeting::new(),
            stats: SessionStats::default(),
            events: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Creates a simulation on a custom field.
    ///
    /// # Errors
    ///
    /// Returns the validation failure when `config` does not describe a
    /// playable field.
    pub fn with_config(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut simulation = Self::new(seed);
        let _ = simulation.apply(Command::ConfigureField { config });
        Ok(simulation)
    }

    /// Read-only access to the world for queries and rendering.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tallies accumulated since the field was last configured.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Applies a host command outside the frame cycle.
    ///
    /// Systems still observe the resulting events, so reconfiguring the
    /// field restarts the spawn cadence.
    pub fn apply(&mut self, command: Command) -> &[Event] {
        self.events.clear();
        world::apply(&mut self.world, command, &mut self.events);

        self.commands.clear();
        self.spawning.handle(
            &self.events,
            query::field_config(&self.world),
            &mut self.commands,
        );
        self.dispatch_commands();
        self.record_events();

        &self.events
    }

    /// Runs one frame using the pointer position sampled by the host.
    pub fn step(&mut self, pointer: Option<Point>) -> &[Event] {
        self.events.clear();
        world::apply(&mut self.world, Command::Tick { pointer }, &mut self.events);

        self.commands.clear();
        self.spawning.handle(
            &self.events,
            query::field_config(&self.world),
            &mut self.commands,
        );
        self.dispatch_commands();

        self.targeting.handle(
            &query::bee_view(&self.world),
            &query::flower_view(&self.world),
            &mut self.commands,
        );
        self.dispatch_commands();

        world::apply(&mut self.world, Command::SettleInventories, &mut self.events);

        self.record_events();
        trace!(
            tick = query::tick_index(&self.world),
            events = self.events.len(),
            "frame complete"
        );

        &self.events
    }

    fn dispatch_commands(&mut self) {
        for command in self.commands.drain(..) {
            world::apply(&mut self.world, command, &mut self.events);
        }
    }

    fn record_events(&mut self) {
        for event in &self.events {
            self.stats.record(event);
        }
    }
}
