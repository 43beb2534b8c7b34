//! Tunable gameplay constants.

use bevy::prelude::*;

/// Simulation tick rate, shared by physics stepping and protocol timers.
pub const SIM_HZ: f64 = 165.0;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Seconds a shot projectile stays live before it counts as spent.
    pub shot_timeout_secs: f32,
    /// Degrees added/removed per angle keypress.
    pub angle_step: i32,
    /// Pixels a hovered button grows by, per axis.
    pub hover_grow: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            shot_timeout_secs: 8.0,
            angle_step: 1,
            hover_grow: 10.0,
        }
    }
}
