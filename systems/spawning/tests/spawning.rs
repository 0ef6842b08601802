use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use game_bee_core::{Command, Event, FieldConfig, FlowerColor, FlowerRole};
use game_bee_system_spawning::{Config, Spawning};
use game_bee_world::{self as world, query, World};

fn time_advanced(count: u64) -> Vec<Event> {
    (1..=count).map(|tick| Event::TimeAdvanced { tick }).collect()
}

#[test]
fn spawns_once_per_interval() {
    let field = FieldConfig::default();
    let mut spawning = Spawning::new(Config::new(0x1234_5678));
    let mut commands = Vec::new();

    spawning.handle(&time_advanced(9), &field, &mut commands);
    assert!(commands.is_empty(), "no spawn before the tenth tick");

    spawning.handle(&time_advanced(1), &field, &mut commands);
    assert_eq!(commands.len(), 1, "expected a spawn on the tenth tick");

    spawning.handle(&time_advanced(25), &field, &mut commands);
    assert_eq!(commands.len(), 3, "expected spawns on ticks 20 and 30");
}

#[test]
fn spawned_flowers_start_on_the_bottom_edge() {
    let field = FieldConfig::default();
    let mut spawning = Spawning::new(Config::new(7));
    let mut commands = Vec::new();
    spawning.handle(&time_advanced(2_000), &field, &mut commands);
    assert_eq!(commands.len(), 200);

    let mut roles = Vec::new();
    for command in &commands {
        match command {
            Command::SpawnFlower { position, role, .. } => {
                assert!(position.x >= field.spawn_margin && position.x < field.width);
                assert_eq!(position.y, field.height);
                roles.push(*role);
            }
            other => panic!("unexpected command emitted: {other:?}"),
        }
    }

    for role in [FlowerRole::Source, FlowerRole::Sink, FlowerRole::Barren] {
        assert!(roles.contains(&role), "{role:?} never rolled");
    }
}

#[test]
fn reconfiguring_restarts_the_cadence() {
    let field = FieldConfig::default();
    let mut spawning = Spawning::new(Config::new(3));
    let mut commands = Vec::new();

    spawning.handle(&time_advanced(5), &field, &mut commands);
    spawning.handle(
        &[Event::FieldConfigured {
            width: field.width,
            height: field.height,
            bees: 3,
        }],
        &field,
        &mut commands,
    );
    spawning.handle(&time_advanced(9), &field, &mut commands);
    assert!(commands.is_empty(), "cadence restarted after reconfiguration");

    spawning.handle(&time_advanced(1), &field, &mut commands);
    assert_eq!(commands.len(), 1);
}

#[test]
fn deterministic_replay_produces_identical_sequence() {
    let first = replay(0x4d59_5df4_d0f3_3173);
    let second = replay(0x4d59_5df4_d0f3_3173);
    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first.fingerprint(), second.fingerprint());

    let other = replay(0x0bad_5eed);
    assert_ne!(first.spawns, other.spawns, "different seeds should diverge");
}

fn replay(seed: u64) -> ReplayOutcome {
    let mut world = World::new();
    let mut spawning = Spawning::new(Config::new(seed));
    let mut spawns = Vec::new();

    for _ in 0..120 {
        let mut events = Vec::new();
        world::apply(&mut world, Command::Tick { pointer: None }, &mut events);

        let mut commands = Vec::new();
        spawning.handle(&events, query::field_config(&world), &mut commands);
        for command in commands {
            if let Command::SpawnFlower {
                position,
                color,
                role,
                tainted,
            } = command
            {
                spawns.push(SpawnRecord {
                    x_bits: position.x.to_bits(),
                    color,
                    role,
                    tainted,
                });
                let mut generated = Vec::new();
                world::apply(&mut world, command, &mut generated);
            }
        }
    }

    ReplayOutcome {
        live_flowers: query::flower_view(&world).len(),
        spawns,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    live_flowers: usize,
    spawns: Vec<SpawnRecord>,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SpawnRecord {
    x_bits: u32,
    color: FlowerColor,
    role: FlowerRole,
    tainted: bool,
}
