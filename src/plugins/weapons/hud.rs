//! In-level HUD: power bar, angle bar, shot indicator.
//!
//! All three are derived views of the `Aim` resource; nothing here feeds back
//! into the simulation.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::Playing;
use crate::plugins::levels::layout::LevelConfig;
use crate::plugins::levels::{CurrentLevel, SelectedLevel};

use super::components::Aim;

const BAR_SIZE: Vec2 = Vec2::new(200.0, 40.0);
const INDICATOR_LENGTH: f32 = 70.0;

/// Fill sprite of a bar; `origin_x` is the bar's left edge in world space.
#[derive(Component, Debug, Clone, Copy)]
pub struct BarFill {
    pub origin_x: f32,
    pub width: f32,
    pub kind: BarKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    Power,
    Angle,
}

/// Line showing the launch angle from the pad.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShotIndicator;

pub fn spawn_hud(mut commands: Commands, selected: Res<SelectedLevel>) {
    spawn_bar(&mut commands, Vec2::new(-440.0, 310.0), BarKind::Power);
    spawn_bar(&mut commands, Vec2::new(-440.0, 250.0), BarKind::Angle);

    let pad = Vec2::from(LevelConfig::for_level(selected.0).launch_pad);
    commands.spawn((
        Name::new("ShotIndicator"),
        ShotIndicator,
        Sprite {
            color: Color::WHITE,
            custom_size: Some(Vec2::new(INDICATOR_LENGTH, 10.0)),
            ..default()
        },
        Transform::from_translation((pad + Vec2::new(INDICATOR_LENGTH * 0.5, 0.0)).extend(2.0)),
        DespawnOnExit(Playing),
    ));
}

fn spawn_bar(commands: &mut Commands, center: Vec2, kind: BarKind) {
    commands.spawn((
        Name::new(match kind {
            BarKind::Power => "PowerBar",
            BarKind::Angle => "AngleBar",
        }),
        Sprite {
            color: Color::srgb(0.2, 0.35, 0.9),
            custom_size: Some(BAR_SIZE),
            ..default()
        },
        Transform::from_translation(center.extend(2.0)),
        DespawnOnExit(Playing),
    ));
    commands.spawn((
        BarFill {
            origin_x: center.x - BAR_SIZE.x * 0.5,
            width: BAR_SIZE.x,
            kind,
        },
        Sprite {
            color: Color::BLACK,
            custom_size: Some(Vec2::new(BAR_SIZE.x, BAR_SIZE.y - 10.0)),
            ..default()
        },
        Transform::from_translation(center.extend(2.1)),
        DespawnOnExit(Playing),
    ));
}

/// Scale each fill to its fraction, keeping the left edge anchored.
pub fn update_bars(aim: Res<Aim>, mut q: Query<(&BarFill, &mut Transform)>) {
    for (fill, mut tf) in &mut q {
        let fraction = match fill.kind {
            BarKind::Power => aim.power as f32 / Aim::POWER_MAX as f32,
            BarKind::Angle => aim.angle_deg as f32 / Aim::ANGLE_MAX as f32,
        };
        tf.scale.x = fraction.max(f32::EPSILON);
        tf.translation.x = fill.origin_x + fill.width * fraction * 0.5;
    }
}

/// Rotate the indicator around the launch pad to the current angle.
pub fn update_indicator(
    aim: Res<Aim>,
    current: Option<Res<CurrentLevel>>,
    mut q: Query<&mut Transform, With<ShotIndicator>>,
) {
    let Some(current) = current else { return };
    let pad = Vec2::from(current.0.launch_pad);
    let angle = (aim.angle_deg as f32).to_radians();
    let dir = Vec2::from_angle(angle);

    for mut tf in &mut q {
        tf.translation = (pad + dir * INDICATOR_LENGTH * 0.5).extend(2.0);
        tf.rotation = Quat::from_rotation_z(angle);
    }
}
