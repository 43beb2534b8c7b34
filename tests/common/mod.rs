//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - we then call `cannonade::game::configure_headless` to install gameplay
//!   plugins.
//!
//! The fixed clock runs at the real simulation rate, so tests that need
//! physics/protocol ticks sleep a few milliseconds between updates.

#![allow(dead_code)]

use std::thread;
use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use cannonade::common::state::Screen;
use cannonade::plugins::levels::{ClassId, LevelId};
use cannonade::plugins::nav::NavAction;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    cannonade::game::configure_headless(&mut app);
    app
}

pub fn screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

/// Enqueue a menu action and run enough frames for the state mirror to apply.
pub fn act(app: &mut App, action: NavAction) {
    app.world_mut().write_message(action);
    app.update();
    app.update();
}

/// Drive the menus from the start screen into a running level.
pub fn enter_level(app: &mut App, level: LevelId, class: ClassId) {
    act(app, NavAction::Play);
    act(app, NavAction::SelectLevel(level));
    act(app, NavAction::SelectClass(class));
    app.update();
    assert_eq!(screen(app), Screen::InLevel);
}

/// Update with a real-time gap so the 165 Hz fixed schedule gets ticks.
pub fn update_with_ticks(app: &mut App, frames: usize) {
    for _ in 0..frames {
        thread::sleep(Duration::from_millis(10));
        app.update();
    }
}
