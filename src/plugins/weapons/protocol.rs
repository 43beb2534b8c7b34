//! Launch protocol: spawn roster, aim input, launch, timeout advance.
//!
//! Per level run the protocol walks Idle -> InFlight -> Spent per weapon:
//! - Idle: current weapon staged on the launch pad, not shot.
//! - InFlight: space pressed; rotation + impulse applied, flight timer runs.
//! - Spent: timer passed the shot timeout; weapon leaves space and queue, the
//!   next one (if any) is enabled and staged.
//!
//! Non-current weapons exist from level load but are parked with
//! `RigidBodyDisabled` so they neither fall nor collide until staged.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::layers::Layer;
use crate::common::state::Playing;
use crate::common::tunables::Tunables;
use crate::plugins::levels::layout::{class_roster, validate_roster, LevelConfig, WeaponSpec};
use crate::plugins::levels::{CurrentLevel, RebuildLevel, SelectedClass, SelectedLevel};

use super::components::{launch_velocity, Aim, LaunchState, Projectile, WeaponQueue};

fn projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [Layer::World, Layer::Enemy])
}

pub fn spawn_weapons(
    mut commands: Commands,
    selected_level: Res<SelectedLevel>,
    selected_class: Res<SelectedClass>,
    mut queue: ResMut<WeaponQueue>,
    mut aim: ResMut<Aim>,
) {
    let cfg = LevelConfig::for_level(selected_level.0);
    let roster = class_roster(selected_class.0);
    if let Err(e) = validate_roster(&roster) {
        panic!("invalid roster for {:?}: {e}", selected_class.0);
    }

    *aim = Aim::for_level(cfg.power_step);
    queue.clear();
    let pad = Vec2::from(cfg.launch_pad);

    for (i, spec) in roster.iter().enumerate() {
        let e = spawn_projectile(&mut commands, spec, pad, i > 0);
        queue.push_back(e);
    }
}

/// Restart: drop the live roster and respawn it from the selected class.
/// The terrain half of the rebuild lives in the levels plugin.
pub fn rebuild_weapons(
    mut reader: MessageReader<RebuildLevel>,
    mut commands: Commands,
    current: Option<Res<CurrentLevel>>,
    selected_class: Res<SelectedClass>,
    mut queue: ResMut<WeaponQueue>,
    mut aim: ResMut<Aim>,
    q_projectiles: Query<Entity, With<Projectile>>,
) {
    if reader.read().next().is_none() {
        return;
    }
    let Some(current) = current else { return };
    for e in &q_projectiles {
        commands.entity(e).despawn();
    }

    let roster = class_roster(selected_class.0);
    *aim = Aim::for_level(current.0.power_step);
    queue.clear();
    let pad = Vec2::from(current.0.launch_pad);

    for (i, spec) in roster.iter().enumerate() {
        let e = spawn_projectile(&mut commands, spec, pad, i > 0);
        queue.push_back(e);
    }
}

fn spawn_projectile(
    commands: &mut Commands,
    spec: &WeaponSpec,
    pad: Vec2,
    parked: bool,
) -> Entity {
    let mut e = commands.spawn((
        Name::new("Projectile"),
        Projectile {
            radius: spec.radius,
            power_factor: spec.power_factor,
        },
        LaunchState::default(),
        Sprite {
            color: Color::srgb(0.3, 0.55, 0.95),
            custom_size: Some(Vec2::splat(spec.radius * 2.0)),
            ..default()
        },
        Transform::from_translation(pad.extend(1.0)),
        RigidBody::Dynamic,
        Collider::circle(spec.radius),
        Mass(spec.mass),
        Friction::new(spec.friction),
        Restitution::new(spec.elasticity),
        projectile_layers(),
        CollisionEventsEnabled,
        LinearVelocity::ZERO,
        Occluder2d::circle(spec.radius),
        DespawnOnExit(Playing),
    ));
    if parked {
        e.insert((RigidBodyDisabled, Visibility::Hidden));
    }
    e.id()
}

/// Power/angle keys, clamped silently to the authoritative ranges.
pub fn adjust_aim(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    tunables: Res<Tunables>,
    mut aim: ResMut<Aim>,
) {
    let Some(keys) = keys else { return };
    if keys.just_pressed(KeyCode::KeyD) {
        aim.adjust_power(1);
    }
    if keys.just_pressed(KeyCode::KeyA) {
        aim.adjust_power(-1);
    }
    if keys.just_pressed(KeyCode::KeyW) {
        aim.adjust_angle(tunables.angle_step);
    }
    if keys.just_pressed(KeyCode::KeyS) {
        aim.adjust_angle(-tunables.angle_step);
    }
}

/// Idle -> InFlight on the launch key, for the current weapon only.
pub fn launch_current(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    aim: Res<Aim>,
    queue: Res<WeaponQueue>,
    mut q: Query<(
        &Projectile,
        &mut LaunchState,
        &mut Rotation,
        &mut LinearVelocity,
        &Mass,
    )>,
) {
    let Some(keys) = keys else { return };
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let Some(current) = queue.current() else {
        return;
    };
    let Ok((projectile, mut state, mut rotation, mut velocity, mass)) = q.get_mut(current) else {
        warn!("weapon queue head {current:?} is missing projectile components");
        return;
    };
    if state.is_shot {
        // Launching an in-flight weapon must never double-apply the impulse.
        debug!("ignoring launch: current weapon already shot");
        return;
    }

    *rotation = Rotation::radians((aim.angle_deg as f32).to_radians());
    velocity.0 = launch_velocity(projectile.power_factor, aim.power, aim.angle_deg, mass.0);
    state.is_shot = true;
}

/// InFlight -> Spent: run the flight timer and retire timed-out weapons.
pub fn tick_flight(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    current_level: Option<Res<CurrentLevel>>,
    mut commands: Commands,
    mut queue: ResMut<WeaponQueue>,
    mut q: Query<&mut LaunchState>,
) {
    let Some(current) = queue.current() else {
        return;
    };
    let Ok(mut state) = q.get_mut(current) else {
        warn!("weapon queue head {current:?} is missing its launch state");
        return;
    };
    if !state.is_shot {
        return;
    }

    state.seconds_since_shot += time.delta_secs();
    if state.seconds_since_shot <= tunables.shot_timeout_secs {
        return;
    }

    // Spent: out of the space and out of the queue, exactly once.
    commands.entity(current).despawn();
    queue.advance();

    if let (Some(next), Some(level)) = (queue.current(), current_level) {
        load_weapon(&mut commands, next, Vec2::from(level.0.launch_pad));
    }
}

/// Stage a projectile on the launch pad, at rest.
fn load_weapon(commands: &mut Commands, weapon: Entity, pad: Vec2) {
    commands
        .entity(weapon)
        .insert((
            Transform::from_translation(pad.extend(1.0)),
            Rotation::default(),
            LinearVelocity::ZERO,
            AngularVelocity(0.0),
            Visibility::Visible,
        ))
        .remove::<RigidBodyDisabled>();
}

/// Leaving the level entirely; entities despawn via `DespawnOnExit`.
pub fn reset_queue(mut queue: ResMut<WeaponQueue>, mut aim: ResMut<Aim>) {
    queue.clear();
    *aim = Aim::default();
}
