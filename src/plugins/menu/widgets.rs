//! Menu widgets: buttons, labels, and the volume slider.
//!
//! Buttons are plain sprites with rectangle hit-testing against the cursor's
//! world position; a hovered button grows a little so the player can tell.
//! Clicking a button enqueues its `NavAction`. Locked buttons render but
//! ignore clicks.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::core::Volume;
use crate::plugins::nav::NavAction;

#[derive(Component, Debug)]
pub struct MenuButton {
    pub action: NavAction,
    pub size: Vec2,
    pub locked: bool,
    pub hovered: bool,
}

impl MenuButton {
    pub fn new(action: NavAction, size: Vec2) -> Self {
        Self {
            action,
            size,
            locked: false,
            hovered: false,
        }
    }

    pub fn locked(action: NavAction, size: Vec2) -> Self {
        Self {
            locked: true,
            ..Self::new(action, size)
        }
    }
}

/// Click-to-set volume control; the fill sprite tracks the `Volume` resource.
#[derive(Component, Debug, Clone, Copy)]
pub struct VolumeSlider {
    pub size: Vec2,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct VolumeFill {
    pub origin_x: f32,
    pub width: f32,
}

#[inline]
pub fn rect_contains(center: Vec2, size: Vec2, point: Vec2) -> bool {
    (point.x - center.x).abs() <= size.x * 0.5 && (point.y - center.y).abs() <= size.y * 0.5
}

/// Cursor position in world space, or `None` when there is no window, cursor,
/// or camera (headless runs, cursor outside the window).
fn cursor_world(
    windows: &Query<&Window>,
    q_camera: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_tf) = q_camera.single().ok()?;
    camera.viewport_to_world_2d(camera_tf, cursor).ok()
}

pub fn hover_buttons(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    tunables: Res<Tunables>,
    mut q_buttons: Query<(&mut MenuButton, &GlobalTransform, &mut Transform)>,
) {
    let cursor = cursor_world(&windows, &q_camera);

    for (mut button, global_tf, mut tf) in &mut q_buttons {
        let center = global_tf.translation().truncate();
        button.hovered = cursor.is_some_and(|c| rect_contains(center, button.size, c));

        let grown = (button.size + Vec2::splat(tunables.hover_grow)) / button.size;
        tf.scale = if button.hovered {
            grown.extend(1.0)
        } else {
            Vec3::ONE
        };
    }
}

pub fn click_buttons(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    q_buttons: Query<&MenuButton>,
    mut writer: MessageWriter<NavAction>,
) {
    let Some(buttons) = buttons else { return };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    for button in &q_buttons {
        if button.hovered && !button.locked {
            writer.write(button.action);
        }
    }
}

/// Holding the mouse over the slider drags the volume to the cursor fraction.
pub fn drag_volume(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut volume: ResMut<Volume>,
    q_sliders: Query<(&VolumeSlider, &GlobalTransform)>,
) {
    let Some(buttons) = buttons else { return };
    if !buttons.pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor) = cursor_world(&windows, &q_camera) else {
        return;
    };

    for (slider, global_tf) in &q_sliders {
        let center = global_tf.translation().truncate();
        if !rect_contains(center, slider.size, cursor) {
            continue;
        }
        let left = center.x - slider.size.x * 0.5;
        volume.set_clamped((cursor.x - left) / slider.size.x);
    }
}

pub fn update_volume_fill(volume: Res<Volume>, mut q: Query<(&VolumeFill, &mut Transform)>) {
    for (fill, mut tf) in &mut q {
        tf.scale.x = volume.0.max(f32::EPSILON);
        tf.translation.x = fill.origin_x + fill.width * volume.0 * 0.5;
    }
}
