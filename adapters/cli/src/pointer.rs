//! Scripted pointer that stands in for a mouse.

use std::f32::consts::FRAC_PI_2;

use game_bee_core::{FieldConfig, Point};

const ANGULAR_STEP: f32 = 0.01;
const FILL: f32 = 0.4;

/// Deterministic 3:2 Lissajous curve across the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Lissajous {
    center: Point,
    reach: Point,
}

impl Lissajous {
    pub(crate) fn spanning(field: &FieldConfig) -> Self {
        Self {
            center: Point::new(field.width / 2.0, field.height / 2.0),
            reach: Point::new(field.width * FILL, field.height * FILL),
        }
    }

    pub(crate) fn at(&self, tick: u32) -> Point {
        let phase = tick as f32 * ANGULAR_STEP;
        Point::new(
            self.center.x + self.reach.x * (3.0 * phase + FRAC_PI_2).sin(),
            self.center.y + self.reach.y * (2.0 * phase).sin(),
        )
    }
}
