#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Game Bee adapters.
//!
//! Scenes are composed from the world's read-only views and describe every
//! circle a backend has to draw. Composition never touches the world and
//! performs no drawing itself.

use game_bee_core::{
    BeeId, BeeSnapshot, BeeView, Facing, FieldConfig, FlowerColor, FlowerId, FlowerKind,
    FlowerRole, FlowerSnapshot, FlowerView, MovementPolicy,
};
use glam::Vec2;

/// Border width of a source flower's outer ring.
pub const SOURCE_RING_THICKNESS: f32 = 10.0;
/// Border width of a sink flower's outer ring.
pub const SINK_RING_THICKNESS: f32 = 2.0;
/// Distance between a flower's outer ring and its inner disc.
pub const CORE_INSET: f32 = 10.0;
/// Radius of a pollen dot drawn below a helper bee.
pub const POLLEN_DOT_RADIUS: f32 = 10.0;
/// Offset from a bee's center to its first pollen dot.
pub const POLLEN_DOT_ORIGIN: Vec2 = Vec2::new(-20.0, 50.0);
/// Horizontal spacing between consecutive pollen dots.
pub const POLLEN_DOT_SPACING: f32 = 10.0;
/// Center of the first slot of the player's inventory row.
pub const HUD_ORIGIN: Vec2 = Vec2::new(40.0, 50.0);
/// Horizontal spacing between inventory slots.
pub const HUD_SPACING: f32 = 40.0;
/// Radius of an inventory slot.
pub const HUD_SLOT_RADIUS: f32 = 30.0;
/// Border width of an inventory slot.
pub const HUD_SLOT_THICKNESS: f32 = 10.0;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Sky tone used to clear the field.
    pub const BACKGROUND: Self = Self::from_rgb_u8(173, 216, 230);

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

impl From<FlowerColor> for Color {
    fn from(color: FlowerColor) -> Self {
        let (red, green, blue) = color.rgb();
        Self::from_rgb_u8(red, green, blue)
    }
}

/// How a circle is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// The whole disc is painted.
    Solid,
    /// Only a border of the given width is painted.
    Outline {
        /// Border width in world units.
        thickness: f32,
    },
}

/// A single circle a backend has to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center in world units.
    pub center: Vec2,
    /// Radius in world units.
    pub radius: f32,
    /// Paint color.
    pub color: Color,
    /// Paint mode.
    pub fill: Fill,
}

impl Circle {
    /// Creates a filled circle.
    #[must_use]
    pub const fn solid(center: Vec2, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            fill: Fill::Solid,
        }
    }

    /// Creates an outlined circle.
    #[must_use]
    pub const fn outline(center: Vec2, radius: f32, color: Color, thickness: f32) -> Self {
        Self {
            center,
            radius,
            color,
            fill: Fill::Outline { thickness },
        }
    }
}

/// Drawing instructions for one flower.
///
/// Sources are a thick ring around a solid core that disappears once the
/// source was harvested. Sinks are a thin ring around a solid core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowerGlyph {
    /// Flower the glyph depicts.
    pub flower: FlowerId,
    /// Role of the depicted flower.
    pub role: FlowerRole,
    /// Outer ring sized to the flower's radius.
    pub ring: Circle,
    /// Inner disc, absent for harvested sources.
    pub core: Option<Circle>,
}

impl FlowerGlyph {
    fn compose(flower: &FlowerSnapshot) -> Option<Self> {
        let center = Vec2::new(flower.position.x, flower.position.y);
        let color = Color::from(flower.color);
        let core_radius = (flower.radius - CORE_INSET).max(0.0);

        let (ring, core) = match flower.kind {
            FlowerKind::Source { harvested } => (
                Circle::outline(center, flower.radius, color, SOURCE_RING_THICKNESS),
                (!harvested).then(|| Circle::solid(center, core_radius, color)),
            ),
            FlowerKind::Sink => (
                Circle::outline(center, flower.radius, color, SINK_RING_THICKNESS),
                Some(Circle::solid(center, core_radius, color)),
            ),
            FlowerKind::Barren => return None,
        };

        Some(Self {
            flower: flower.id,
            role: flower.kind.role(),
            ring,
            core,
        })
    }
}

/// Drawing instructions for one bee.
#[derive(Clone, Debug, PartialEq)]
pub struct BeeGlyph {
    /// Bee the glyph depicts.
    pub bee: BeeId,
    /// Whether the bee follows the pointer or pursues flowers.
    pub policy: MovementPolicy,
    /// Center of the sprite in world units.
    pub center: Vec2,
    /// Whether the sprite is mirrored to face left.
    pub mirrored: bool,
    /// Pollen dots drawn at the bee's feet.
    pub pollen: Vec<Circle>,
}

impl BeeGlyph {
    fn compose(bee: &BeeSnapshot) -> Self {
        let center = Vec2::new(bee.position.x, bee.position.y);
        // The player's pollen is shown in the inventory row instead.
        let pollen = match bee.policy {
            MovementPolicy::FollowPointer => Vec::new(),
            MovementPolicy::PursueObjective => bee
                .pollen
                .iter()
                .enumerate()
                .map(|(slot, pollen)| {
                    let offset = POLLEN_DOT_ORIGIN + Vec2::X * POLLEN_DOT_SPACING * slot as f32;
                    Circle::solid(center + offset, POLLEN_DOT_RADIUS, pollen.color.into())
                })
                .collect(),
        };

        Self {
            bee: bee.id,
            policy: bee.policy,
            center,
            mirrored: bee.facing == Facing::Left,
            pollen,
        }
    }
}

/// Scene description combining the field, its bees and flowers.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Size of the visible field in world units.
    pub field: Vec2,
    /// Color used to clear the field.
    pub background: Color,
    /// Bees in roster order.
    pub bees: Vec<BeeGlyph>,
    /// Flowers in spawn order, drawn above the bees.
    pub flowers: Vec<FlowerGlyph>,
    /// Inventory row of the pointer-following bee, drawn last.
    pub inventory: Vec<Circle>,
}

impl Scene {
    /// Composes a scene from read-only world views.
    #[must_use]
    pub fn compose(bees: &BeeView, flowers: &FlowerView, field: &FieldConfig) -> Self {
        let inventory = bees
            .iter()
            .find(|bee| bee.policy == MovementPolicy::FollowPointer)
            .map(|player| {
                player
                    .pollen
                    .iter()
                    .enumerate()
                    .map(|(slot, pollen)| {
                        let center = HUD_ORIGIN + Vec2::X * HUD_SPACING * slot as f32;
                        Circle::outline(
                            center,
                            HUD_SLOT_RADIUS,
                            pollen.color.into(),
                            HUD_SLOT_THICKNESS,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            field: Vec2::new(field.width, field.height),
            background: Color::BACKGROUND,
            bees: bees.iter().map(BeeGlyph::compose).collect(),
            flowers: flowers.iter().filter_map(FlowerGlyph::compose).collect(),
            inventory,
        }
    }

    /// Number of circles a backend draws for this scene.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        let flowers: usize = self
            .flowers
            .iter()
            .map(|glyph| 1 + usize::from(glyph.core.is_some()))
            .sum();
        let pollen: usize = self.bees.iter().map(|glyph| glyph.pollen.len()).sum();
        flowers + pollen + self.inventory.len()
    }
}
