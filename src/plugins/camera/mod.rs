//! Camera plugin (render-only).
//!
//! One fixed camera covers the whole 1280x720 play field; the game never
//! scrolls. `MainCamera` is the marker the menu widgets use for
//! cursor-to-world mapping.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
