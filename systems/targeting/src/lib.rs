#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that picks the flower each helper bee pursues.
//!
//! A helper bee is either idle or pursuing a single flower. An idle bee picks
//! the nearest eligible flower in one pass over the field: an unharvested
//! source it does not already hold pollen from, or a sink matching the color
//! of any pollen it carries. Both rules compete on distance alone. A pursuing
//! bee drops its objective once the objective left the field, turned out to
//! be a harvested source, or is a sink, and picks again on the following tick.
//! A sink that still matches held pollen is therefore picked again right away,
//! while a satisfied one gives way to the nearest fresh source.

use game_bee_core::{
    BeeSnapshot, BeeView, Command, FlowerColor, FlowerId, FlowerKind, FlowerView, MovementPolicy,
};

/// Targeting system that reuses scratch buffers to avoid repeated allocations.
#[derive(Debug, Default)]
pub struct Targeting {
    held: Vec<FlowerId>,
}

impl Targeting {
    /// Creates a new targeting system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits objective assignments for every helper bee whose state changes.
    pub fn handle(&mut self, bees: &BeeView, flowers: &FlowerView, out: &mut Vec<Command>) {
        for bee in bees.iter() {
            if bee.policy != MovementPolicy::PursueObjective {
                continue;
            }

            match bee.objective {
                Some(objective) => {
                    if is_spent(flowers, objective) {
                        out.push(Command::AssignObjective {
                            bee: bee.id,
                            objective: None,
                        });
                    }
                }
                None => {
                    if let Some(best) = self.select(bee, flowers) {
                        out.push(Command::AssignObjective {
                            bee: bee.id,
                            objective: Some(best.flower),
                        });
                    }
                }
            }
        }
    }

    fn select(&mut self, bee: &BeeSnapshot, flowers: &FlowerView) -> Option<BestCandidate> {
        self.prepare_held(bee);
        let palette = HeldPalette::from_snapshot(bee);

        let mut best: Option<BestCandidate> = None;
        for flower in flowers.iter() {
            let eligible = match flower.kind {
                FlowerKind::Source { harvested: false } => {
                    self.held.binary_search(&flower.id).is_err()
                }
                FlowerKind::Sink => palette.contains(flower.color),
                FlowerKind::Source { harvested: true } | FlowerKind::Barren => false,
            };
            if !eligible {
                continue;
            }

            let current = BestCandidate {
                distance: bee.position.distance(flower.position),
                flower: flower.id,
            };
            match &mut best {
                Some(existing) => {
                    if current.precedes(existing) {
                        *existing = current;
                    }
                }
                None => best = Some(current),
            }
        }

        best
    }

    fn prepare_held(&mut self, bee: &BeeSnapshot) {
        self.held.clear();
        self.held.extend(bee.pollen.iter().map(|pollen| pollen.flower));
        self.held.sort_unstable();
    }
}

// Only a live, unharvested source survives re-evaluation.
fn is_spent(flowers: &FlowerView, objective: FlowerId) -> bool {
    match flowers.get(objective) {
        None => true,
        Some(flower) => !matches!(flower.kind, FlowerKind::Source { harvested: false }),
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct HeldPalette {
    colors: [bool; FlowerColor::ALL.len()],
}

impl HeldPalette {
    fn from_snapshot(bee: &BeeSnapshot) -> Self {
        let mut palette = Self::default();
        for pollen in &bee.pollen {
            palette.colors[pollen.color.index()] = true;
        }
        palette
    }

    fn contains(&self, color: FlowerColor) -> bool {
        self.colors[color.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct BestCandidate {
    distance: f32,
    flower: FlowerId,
}

impl BestCandidate {
    // Ties keep the earlier-spawned flower.
    fn precedes(&self, other: &Self) -> bool {
        if self.distance != other.distance {
            return self.distance < other.distance;
        }

        self.flower < other.flower
    }
}
