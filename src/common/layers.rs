//! Collision layers.
//!
//! These are the game's collision-type tags: projectiles hit enemies and
//! world geometry, enemies rest on world geometry and each other.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    /// Floor and blocks.
    World,
    Projectile,
    Enemy,
}
