//! Proximity interaction between a bee and the flowers it touches.

use game_bee_core::{BeeId, Event, FieldConfig, FlowerId, FlowerKind, Point, Pollen};
use tracing::trace;

use crate::{inventory::Inventory, registry::FlowerRegistry};

/// Resolves every contact of a single bee with the live flowers.
///
/// Flowers are visited in spawn order, so a source harvested earlier in the
/// pass is already in the inventory when a later sink is reached.
pub(crate) fn resolve(
    bee: BeeId,
    position: Point,
    inventory: &mut Inventory,
    flowers: &mut FlowerRegistry,
    config: &FieldConfig,
    out_events: &mut Vec<Event>,
) {
    let touched: Vec<FlowerId> = flowers
        .iter()
        .filter(|flower| flower.position().distance(position) <= config.interaction_radius)
        .map(|flower| flower.id())
        .collect();

    for id in touched {
        let Some(flower) = flowers.get_mut(id) else {
            continue;
        };

        match flower.kind() {
            FlowerKind::Source { harvested: false } => {
                flower.kind = FlowerKind::Source { harvested: true };
                let pollen = Pollen {
                    flower: id,
                    color: flower.color(),
                    tainted: flower.tainted(),
                };
                out_events.push(Event::PollenGathered {
                    bee,
                    flower: id,
                    color: pollen.color,
                });
                if let Some(evicted) = inventory.add(pollen) {
                    out_events.push(Event::PollenEvicted {
                        bee,
                        flower: evicted.flower,
                    });
                }
            }
            FlowerKind::Sink => {
                let color = flower.color();
                let matches: Vec<FlowerId> = inventory
                    .iter()
                    .filter(|pollen| pollen.color == color)
                    .map(|pollen| pollen.flower)
                    .collect();
                deliver(bee, id, &matches, inventory, flowers, config, out_events);
            }
            FlowerKind::Source { harvested: true } | FlowerKind::Barren => {}
        }
    }
}

fn deliver(
    bee: BeeId,
    sink: FlowerId,
    matches: &[FlowerId],
    inventory: &mut Inventory,
    flowers: &mut FlowerRegistry,
    config: &FieldConfig,
    out_events: &mut Vec<Event>,
) {
    if matches.is_empty() {
        return;
    }

    for &source in matches {
        inventory.mark_for_removal(source);
        if let Some(flower) = flowers.get_mut(sink) {
            flower.grow(config.growth_step, config.growth_cap);
        }
        // The source may have drifted off the field already.
        if let Some(flower) = flowers.get_mut(source) {
            flower.grow(config.growth_step, config.growth_cap);
        }
        out_events.push(Event::PollenDelivered { bee, sink, source });
    }

    let removed = inventory.remove_matched();
    trace!(bee = bee.get(), sink = sink.get(), removed, "pollen delivered");
}
