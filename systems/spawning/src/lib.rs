#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting flower spawn commands.

use game_bee_core::{Command, Event, FieldConfig, FlowerColor, FlowerRole, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that plants a flower on a fixed tick cadence.
#[derive(Debug)]
pub struct Spawning {
    elapsed_ticks: u64,
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            elapsed_ticks: 0,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes world events to emit spawn commands.
    ///
    /// Every `spawn_interval`-th `TimeAdvanced` event yields one flower along
    /// the bottom edge of the field. Reconfiguring the field restarts the
    /// cadence.
    pub fn handle(&mut self, events: &[Event], field: &FieldConfig, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::FieldConfigured { .. } => self.elapsed_ticks = 0,
                Event::TimeAdvanced { .. } => {
                    self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
                    if field.spawn_interval != 0 && self.elapsed_ticks % field.spawn_interval == 0
                    {
                        if let Some(command) = self.roll_flower(field) {
                            out.push(command);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn roll_flower(&mut self, field: &FieldConfig) -> Option<Command> {
        if !(field.spawn_margin < field.width) {
            return None;
        }

        let x = self.rng.gen_range(field.spawn_margin..field.width);
        let color = FlowerColor::ALL[self.rng.gen_range(0..FlowerColor::ALL.len())];
        // Two independent flips; a flower that rolls both acts as a source.
        let source = self.rng.gen_bool(0.5);
        let sink = self.rng.gen_bool(0.5);
        let role = match (source, sink) {
            (true, _) => FlowerRole::Source,
            (false, true) => FlowerRole::Sink,
            (false, false) => FlowerRole::Barren,
        };
        let tainted = self.rng.gen_bool(0.5);

        Some(Command::SpawnFlower {
            position: Point::new(x, field.height),
            color,
            role,
            tainted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unplantable_field_rolls_nothing() {
        let mut spawning = Spawning::new(Config::new(1));
        let field = FieldConfig {
            spawn_margin: 2_000.0,
            ..FieldConfig::default()
        };
        assert!(spawning.roll_flower(&field).is_none());
    }
}
