//! Lighting plugin (Firefly) (render-only).
//!
//! A single warm lamp over the launch pad while a level runs; projectiles
//! carry occluders so shots cast moving shadows.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::Playing;
use crate::plugins::levels::layout::LevelConfig;
use crate::plugins::levels::SelectedLevel;

#[derive(Component)]
pub struct PadLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(Playing), setup);
}

fn setup(mut commands: Commands, selected: Res<SelectedLevel>) {
    let pad = Vec2::from(LevelConfig::for_level(selected.0).launch_pad);

    commands.spawn((
        Name::new("PadLight"),
        PadLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: 600.0,
            ..default()
        },
        Transform::from_translation(pad.extend(10.0)),
        DespawnOnExit(Playing),
    ));
}
