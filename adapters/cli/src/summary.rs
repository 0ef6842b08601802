//! End-of-session report printed by the command-line host.

use game_bee_core::{BeeId, FlowerColor, FlowerId, MovementPolicy};
use game_bee_rendering::Scene;
use game_bee_simulation::{SessionStats, Simulation};
use game_bee_world::query;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Summary {
    pub(crate) live_flowers: usize,
    pub(crate) scene_circles: usize,
    pub(crate) stats: SessionStats,
    pub(crate) bees: Vec<BeeSummary>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BeeSummary {
    id: BeeId,
    policy: MovementPolicy,
    position: [f32; 2],
    pollen: Vec<FlowerColor>,
    objective: Option<FlowerId>,
}

impl Summary {
    pub(crate) fn collect(simulation: &Simulation, scene: &Scene) -> Self {
        let world = simulation.world();
        let bees = query::bee_view(world)
            .iter()
            .map(|bee| BeeSummary {
                id: bee.id,
                policy: bee.policy,
                position: [bee.position.x, bee.position.y],
                pollen: bee.pollen.iter().map(|pollen| pollen.color).collect(),
                objective: bee.objective,
            })
            .collect();

        Self {
            live_flowers: query::flower_view(world).len(),
            scene_circles: scene.circle_count(),
            stats: *simulation.stats(),
            bees,
        }
    }

    pub(crate) fn print(&self) {
        let stats = &self.stats;
        println!("  Ticks:          {}", stats.ticks);
        println!("  Live flowers:   {}", self.live_flowers);
        println!("  Spawned:        {}", stats.flowers_spawned);
        println!("  Expired:        {}", stats.flowers_expired);
        println!("  Gathered:       {}", stats.pollen_gathered);
        println!("  Deliveries:     {}", stats.deliveries);
        println!("  Evictions:      {}", stats.evictions);
        println!(
            "  Contaminations: {} ({} pollen lost)",
            stats.contaminations, stats.discarded_pollen
        );
        println!("  Scene circles:  {}", self.scene_circles);

        for bee in &self.bees {
            let role = match bee.policy {
                MovementPolicy::FollowPointer => "player",
                MovementPolicy::PursueObjective => "helper",
            };
            let pollen: Vec<&str> = bee.pollen.iter().map(|color| color.name()).collect();
            let objective = bee
                .objective
                .map_or_else(|| "idle".to_owned(), |flower| format!("flower {}", flower.get()));
            println!(
                "  Bee {} ({role}) at ({:.1}, {:.1}): [{}], {objective}",
                bee.id.get(),
                bee.position[0],
                bee.position[1],
                pollen.join(", ")
            );
        }
    }
}
