//! Passive drift and out-of-bounds expiry of flowers.

use game_bee_core::{FieldConfig, Point};

use crate::registry::FlowerRegistry;

/// Moves every flower once: a sway driven by its height plus a steady rise.
pub(crate) fn drift(flowers: &mut FlowerRegistry, config: &FieldConfig) {
    for flower in flowers.iter_mut() {
        let Point { x, y } = flower.position;
        flower.position = Point::new(
            x + config.lateral_amplitude * (y * config.lateral_frequency).sin(),
            y - config.rise_speed,
        );
    }
}

/// Marks flowers past the top, left or right edge for removal.
///
/// The bottom edge is where flowers are planted, so it never expires them.
pub(crate) fn mark_expired(flowers: &mut FlowerRegistry, config: &FieldConfig) {
    let expired: Vec<_> = flowers
        .iter()
        .filter(|flower| is_out_of_bounds(flower.position(), config))
        .map(|flower| flower.id())
        .collect();

    for id in expired {
        flowers.mark_for_removal(id);
    }
}

fn is_out_of_bounds(position: Point, config: &FieldConfig) -> bool {
    let margin = config.expiry_margin;
    position.y < -margin || position.x < -margin || position.x > config.width + margin
}
