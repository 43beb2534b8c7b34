//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Music volume setting in `[0, 1]`.
///
/// Audio playback itself is an external concern; the options and pause screens
/// edit this value through the volume slider.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Volume(pub f32);

impl Volume {
    pub fn set_clamped(&mut self, v: f32) {
        self.0 = v.clamp(0.0, 1.0);
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Campaign progress. Level 2 stays locked until level 1 has been won.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Progress {
    pub level_two_unlocked: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(Volume::default());
    app.insert_resource(Progress::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

#[cfg(test)]
mod tests;
