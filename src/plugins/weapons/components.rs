use std::collections::VecDeque;

use bevy::prelude::*;

/// Per-projectile launch constants, copied from its `WeaponSpec` at spawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub radius: f32,
    pub power_factor: f32,
}

/// Launch lifecycle of one projectile.
///
/// `seconds_since_shot` accumulates fixed-tick time once `is_shot` flips; the
/// protocol retires the projectile when it passes the shot timeout.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LaunchState {
    pub is_shot: bool,
    pub seconds_since_shot: f32,
}

/// Ordered roster of live projectile entities. The front is the one "current"
/// weapon, the only one eligible for launch.
#[derive(Resource, Debug, Default)]
pub struct WeaponQueue {
    entities: VecDeque<Entity>,
}

impl WeaponQueue {
    pub fn current(&self) -> Option<Entity> {
        self.entities.front().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn push_back(&mut self, e: Entity) {
        self.entities.push_back(e);
    }

    /// Retire the current weapon. Returns the entity that was removed.
    pub fn advance(&mut self) -> Option<Entity> {
        self.entities.pop_front()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

/// Player aim inputs. Out-of-range adjustments clamp silently; these ranges
/// are the authoritative game-input ranges.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Aim {
    /// Launch power in `[0, 1000]`.
    pub power: i32,
    /// Launch angle in degrees, `[0, 90]`.
    pub angle_deg: i32,
    /// Power added per keypress; level-tuned.
    pub power_step: i32,
}

impl Aim {
    pub const POWER_MAX: i32 = 1000;
    pub const ANGLE_MAX: i32 = 90;

    /// Fresh aim for a level run with the level's power step.
    pub fn for_level(power_step: i32) -> Self {
        Self {
            power: 100,
            angle_deg: 0,
            power_step,
        }
    }

    pub fn adjust_power(&mut self, steps: i32) {
        self.power = (self.power + steps * self.power_step).clamp(0, Self::POWER_MAX);
    }

    pub fn adjust_angle(&mut self, degrees: i32) {
        self.angle_deg = (self.angle_deg + degrees).clamp(0, Self::ANGLE_MAX);
    }
}

impl Default for Aim {
    fn default() -> Self {
        Self::for_level(100)
    }
}

/// Velocity change from firing: an instantaneous impulse of
/// `power_factor * power` along the body's local +x, applied from rest.
pub fn launch_velocity(power_factor: f32, power: i32, angle_deg: i32, mass: f32) -> Vec2 {
    let impulse = power_factor * power as f32;
    Vec2::from_angle((angle_deg as f32).to_radians()) * (impulse / mass)
}
