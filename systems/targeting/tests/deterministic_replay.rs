use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use game_bee_core::{
    BeeId, BeePlacement, Command, Event, FieldConfig, FlowerColor, FlowerId, FlowerRole,
    MovementPolicy, Point,
};
use game_bee_system_targeting::Targeting;
use game_bee_world::{self as world, query, World};

const HELPER: BeeId = BeeId::new(0);

#[test]
fn helper_harvests_then_pursues_the_matching_sink() {
    let outcome = replay(scripted_field());

    let first_objective = outcome
        .assignments
        .iter()
        .find_map(|record| record.objective)
        .expect("helper picked an objective");
    assert_eq!(first_objective, FlowerId::new(0), "nearest source first");

    assert!(
        outcome.gathered.contains(&FlowerId::new(0)),
        "helper reached and harvested the source"
    );
    assert!(
        outcome
            .assignments
            .iter()
            .any(|record| record.objective == Some(FlowerId::new(1))),
        "helper turned toward the plum sink once it held plum pollen"
    );
    assert!(outcome.delivered, "helper delivered to the sink");
}

#[test]
fn deterministic_replay_produces_identical_assignments() {
    let first = replay(scripted_field());
    let second = replay(scripted_field());

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn objective_is_dropped_when_it_leaves_the_field() {
    let mut world = configured_world(Point::new(500.0, 700.0));
    let far_source = spawn(
        &mut world,
        Point::new(500.0, -29.5),
        FlowerColor::Plum,
        FlowerRole::Source,
    );
    let mut targeting = Targeting::new();

    let mut commands = Vec::new();
    targeting.handle(
        &query::bee_view(&world),
        &query::flower_view(&world),
        &mut commands,
    );
    assert_eq!(
        commands,
        vec![Command::AssignObjective {
            bee: HELPER,
            objective: Some(far_source),
        }]
    );
    apply_all(&mut world, commands);

    let mut events = Vec::new();
    world::apply(&mut world, Command::Tick { pointer: None }, &mut events);
    assert!(events.contains(&Event::FlowerExpired { flower: far_source }));

    let mut commands = Vec::new();
    targeting.handle(
        &query::bee_view(&world),
        &query::flower_view(&world),
        &mut commands,
    );
    assert_eq!(
        commands,
        vec![Command::AssignObjective {
            bee: HELPER,
            objective: None,
        }]
    );
}

fn scripted_field() -> Vec<(Point, FlowerColor, FlowerRole)> {
    vec![
        (Point::new(300.0, 700.0), FlowerColor::Plum, FlowerRole::Source),
        (Point::new(150.0, 700.0), FlowerColor::Plum, FlowerRole::Sink),
        (Point::new(700.0, 700.0), FlowerColor::LightPink, FlowerRole::Sink),
    ]
}

fn configured_world(helper_at: Point) -> World {
    let mut world = World::new();
    let config = FieldConfig {
        roster: vec![BeePlacement {
            policy: MovementPolicy::PursueObjective,
            position: helper_at,
        }],
        ..FieldConfig::default()
    };
    let mut events = Vec::new();
    world::apply(&mut world, Command::ConfigureField { config }, &mut events);
    world
}

fn spawn(world: &mut World, position: Point, color: FlowerColor, role: FlowerRole) -> FlowerId {
    let mut events = Vec::new();
    world::apply(
        world,
        Command::SpawnFlower {
            position,
            color,
            role,
            tainted: false,
        },
        &mut events,
    );
    match events.as_slice() {
        [Event::FlowerSpawned { flower, .. }] => *flower,
        other => panic!("unexpected events: {other:?}"),
    }
}

fn apply_all(world: &mut World, commands: Vec<Command>) -> Vec<Event> {
    let mut events = Vec::new();
    for command in commands {
        world::apply(world, command, &mut events);
    }
    events
}

fn replay(field: Vec<(Point, FlowerColor, FlowerRole)>) -> ReplayOutcome {
    let mut world = configured_world(Point::new(400.0, 700.0));
    for (position, color, role) in field {
        let _ = spawn(&mut world, position, color, role);
    }

    let mut targeting = Targeting::new();
    let mut assignments = Vec::new();
    let mut gathered = Vec::new();
    let mut delivered = false;

    for tick in 0..60 {
        let mut events = Vec::new();
        world::apply(&mut world, Command::Tick { pointer: None }, &mut events);

        let mut commands = Vec::new();
        targeting.handle(
            &query::bee_view(&world),
            &query::flower_view(&world),
            &mut commands,
        );
        events.extend(apply_all(&mut world, commands));

        for event in events {
            match event {
                Event::ObjectiveChanged { objective, .. } => {
                    assignments.push(AssignmentRecord { tick, objective });
                }
                Event::PollenGathered { flower, .. } => gathered.push(flower),
                Event::PollenDelivered { .. } => delivered = true,
                _ => {}
            }
        }
    }

    ReplayOutcome {
        assignments,
        gathered,
        delivered,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    assignments: Vec<AssignmentRecord>,
    gathered: Vec<FlowerId>,
    delivered: bool,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct AssignmentRecord {
    tick: u32,
    objective: Option<FlowerId>,
}
