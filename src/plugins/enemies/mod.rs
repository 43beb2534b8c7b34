//! Enemies plugin: target lifecycle.
//!
//! Removal is split in two to keep structural changes out of the fixed physics
//! step. Collision dispatch (in the weapons plugin) marks a struck enemy with
//! `PendingDespawn` and clears its collision filters so it stops interacting
//! immediately; the actual despawn happens in one centralized `PostUpdate`
//! system. A marked enemy is invisible to every gameplay count and query the
//! same tick it is struck, and marking it twice is a no-op.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::state::Playing;
use crate::plugins::levels::layout::EnemySpec;

#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Marker: enemy should be removed from the world.
///
/// We don't despawn inside the fixed step; we mark and despawn later.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(PostUpdate, despawn_marked.run_if(in_state(Playing)));
}

/// Keep membership but clear filters: the body stops interacting without an
/// archetype move.
pub fn non_interacting_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Projectile, Layer::Enemy])
}

/// Everything a live enemy needs; the levels plugin adds the level scoping.
pub fn enemy_bundle(spec: &EnemySpec) -> impl Bundle {
    let size = Vec2::from(spec.size);
    (
        Name::new("Enemy"),
        Enemy,
        Sprite {
            color: Color::srgb(0.9, 0.8, 0.2),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(Vec2::from(spec.pos).extend(1.0)),
        RigidBody::Dynamic,
        Collider::rectangle(size.x, size.y),
        Mass(2.0),
        Friction::new(0.5),
        Restitution::new(0.5),
        enemy_layers(),
    )
}

/// Centralized structural cleanup.
fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
