//! Menu plugin: screen layouts + widget interactivity.

pub mod screens;
pub mod widgets;

use bevy::prelude::*;

use crate::common::state::Screen;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Start), screens::spawn_start);
    app.add_systems(OnEnter(Screen::LevelSelect), screens::spawn_level_select);
    app.add_systems(OnEnter(Screen::Options), screens::spawn_options);
    app.add_systems(OnEnter(Screen::ClassSelect), screens::spawn_class_select);
    app.add_systems(OnEnter(Screen::Pause), screens::spawn_pause);
    app.add_systems(OnEnter(Screen::PostGame), screens::spawn_post_game);

    // Widgets only exist on their own screens, so these can always run.
    app.add_systems(
        Update,
        (
            widgets::hover_buttons,
            widgets::click_buttons.after(widgets::hover_buttons),
            widgets::drag_volume,
            widgets::update_volume_fill,
        ),
    );
}
