//! Levels plugin: builds the physical world of a level from layout data.
//!
//! A level instance is constructed on entering `Playing` and torn down on
//! leaving it (`DespawnOnExit`). Restart is not an in-place reset: every level
//! entity carries `LevelTag`, and a `RebuildLevel` message despawns the lot and
//! rebuilds from the same `LevelConfig`. The weapons plugin listens to the same
//! message for its half of the rebuild.
//!
//! Visual note: block and floor sprites are sized and rotated from the same
//! spec fields that build the colliders, so what is drawn is exactly the
//! collision boundary.

pub mod layout;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::Playing;
use crate::plugins::enemies;

pub use layout::{BlockSpec, BodyKind, ClassId, EnemySpec, LevelConfig, LevelId};

/// Marker for every entity belonging to the current level instance.
#[derive(Component, Debug, Clone, Copy)]
pub struct LevelTag;

#[derive(Component, Debug, Clone, Copy)]
pub struct Block;

#[derive(Component, Debug, Clone, Copy)]
pub struct Floor;

/// Which level the player picked on the level-select screen.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SelectedLevel(pub LevelId);

/// Which weapon class the player picked on the class screen.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SelectedClass(pub ClassId);

/// The validated config of the running level. Present only inside `Playing`.
#[derive(Resource, Debug, Clone)]
pub struct CurrentLevel(pub LevelConfig);

/// Request a full rebuild of the running level (the "restart" action).
#[derive(Message, Debug, Clone, Copy)]
pub struct RebuildLevel;

pub fn plugin(app: &mut App) {
    app.insert_resource(SelectedLevel(LevelId::One));
    app.insert_resource(SelectedClass(ClassId::One));

    app.init_resource::<Messages<RebuildLevel>>();
    app.add_systems(PostUpdate, update_rebuild_messages);

    app.add_systems(OnEnter(Playing), spawn_terrain);
    app.add_systems(OnExit(Playing), teardown);
    app.add_systems(Update, apply_rebuild.run_if(in_state(Playing)));
}

fn update_rebuild_messages(mut msgs: ResMut<Messages<RebuildLevel>>) {
    msgs.update();
}

fn spawn_terrain(mut commands: Commands, selected: Res<SelectedLevel>) {
    let cfg = LevelConfig::for_level(selected.0);
    if let Err(e) = cfg.validate() {
        // Static configs are authored in-crate; a bad one is a build defect.
        panic!("invalid layout for {:?}: {e}", selected.0);
    }
    build_terrain(&mut commands, &cfg);
    commands.insert_resource(CurrentLevel(cfg));
}

fn teardown(mut commands: Commands) {
    commands.remove_resource::<CurrentLevel>();
}

/// Despawn and rebuild the terrain when a restart is requested.
fn apply_rebuild(
    mut reader: MessageReader<RebuildLevel>,
    mut commands: Commands,
    current: Res<CurrentLevel>,
    q_level: Query<Entity, With<LevelTag>>,
) {
    if reader.read().next().is_none() {
        return;
    }
    for e in &q_level {
        commands.entity(e).despawn();
    }
    build_terrain(&mut commands, &current.0);
}

/// Pure factory: world entities from layout data, nothing read from elsewhere.
fn build_terrain(commands: &mut Commands, cfg: &LevelConfig) {
    spawn_floor(commands, cfg);
    for spec in &cfg.blocks {
        spawn_block(commands, spec);
    }
    for spec in &cfg.enemies {
        commands.spawn((enemies::enemy_bundle(spec), LevelTag, DespawnOnExit(Playing)));
    }
}

fn world_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::World, [Layer::World, Layer::Projectile, Layer::Enemy])
}

/// The ground: a static thick segment.
fn spawn_floor(commands: &mut Commands, cfg: &LevelConfig) {
    let start = Vec2::from(cfg.floor[0]);
    let end = Vec2::from(cfg.floor[1]);
    let delta = end - start;
    let mid = start.midpoint(end);
    let half = delta.length() * 0.5;

    commands.spawn((
        Name::new("Floor"),
        Floor,
        LevelTag,
        Sprite {
            color: Color::srgb(0.2, 0.35, 0.9),
            custom_size: Some(Vec2::new(delta.length(), 18.0)),
            ..default()
        },
        Transform::from_translation(mid.extend(0.0))
            .with_rotation(Quat::from_rotation_z(delta.to_angle())),
        RigidBody::Static,
        Collider::segment(Vec2::new(-half, 0.0), Vec2::new(half, 0.0)),
        Restitution::new(0.5),
        Friction::new(0.7),
        world_layers(),
        DespawnOnExit(Playing),
    ));
}

fn spawn_block(commands: &mut Commands, spec: &BlockSpec) {
    let size = Vec2::from(spec.size);
    let body = match spec.kind {
        BodyKind::Static => RigidBody::Static,
        BodyKind::Dynamic => RigidBody::Dynamic,
    };
    let color = match spec.kind {
        BodyKind::Static => Color::srgb(0.25, 0.35, 0.85),
        BodyKind::Dynamic => Color::srgb(0.35, 0.5, 0.95),
    };

    commands.spawn((
        Name::new("Block"),
        Block,
        LevelTag,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(Vec2::from(spec.pos).extend(0.0))
            .with_rotation(Quat::from_rotation_z(spec.angle)),
        body,
        Collider::rectangle(size.x, size.y),
        Mass(2.0),
        Restitution::new(0.5),
        Friction::new(0.7),
        world_layers(),
        DespawnOnExit(Playing),
    ));
}

#[cfg(test)]
mod tests;
