//! Per-screen layouts.
//!
//! Each screen spawns its widgets on `OnEnter` and scopes them to its own
//! state with `DespawnOnExit`, so switching screens is pure spawn/despawn.
//! The post-game screen is the one parameterized layout: its title and button
//! set depend on the terminal status and which level just ran.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::Screen;
use crate::plugins::core::Progress;
use crate::plugins::levels::{ClassId, LevelId, SelectedLevel};
use crate::plugins::nav::NavAction;
use crate::plugins::status::{LevelOutcome, LevelStatus};

use super::widgets::{MenuButton, VolumeFill, VolumeSlider};

const BUTTON_SIZE: Vec2 = Vec2::new(220.0, 80.0);
const CORNER_BUTTON: Vec2 = Vec2::new(250.0, 80.0);
const TITLE_POS: Vec2 = Vec2::new(0.0, 210.0);
const BACK_POS: Vec2 = Vec2::new(-465.0, -290.0);

fn spawn_label(commands: &mut Commands, screen: Screen, pos: Vec2, text: &str, font_size: f32) {
    commands.spawn((
        Text2d::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(pos.extend(5.0)),
        DespawnOnExit(screen),
    ));
}

fn spawn_button(
    commands: &mut Commands,
    screen: Screen,
    pos: Vec2,
    size: Vec2,
    text: &str,
    button: MenuButton,
) {
    let label: String = if button.locked { "locked".into() } else { text.into() };
    commands
        .spawn((
            button,
            Sprite {
                color: Color::srgb(0.25, 0.55, 0.35),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(4.0)),
            DespawnOnExit(screen),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new(label),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 0.0, 0.5),
            ));
        });
}

fn spawn_volume_slider(commands: &mut Commands, screen: Screen, pos: Vec2, size: Vec2) {
    commands.spawn((
        VolumeSlider { size },
        Sprite {
            color: Color::srgb(0.2, 0.35, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(pos.extend(4.0)),
        DespawnOnExit(screen),
    ));
    commands.spawn((
        VolumeFill {
            origin_x: pos.x - size.x * 0.5,
            width: size.x,
        },
        Sprite {
            color: Color::BLACK,
            custom_size: Some(Vec2::new(size.x, size.y - 10.0)),
            ..default()
        },
        Transform::from_translation(pos.extend(4.1)),
        DespawnOnExit(screen),
    ));
}

pub fn spawn_start(mut commands: Commands) {
    let s = Screen::Start;
    spawn_label(&mut commands, s, TITLE_POS, "Cannonade", 50.0);
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -100.0),
        BUTTON_SIZE,
        "play",
        MenuButton::new(NavAction::Play, BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -250.0),
        BUTTON_SIZE,
        "quit",
        MenuButton::new(NavAction::Quit, BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        BACK_POS,
        CORNER_BUTTON,
        "options",
        MenuButton::new(NavAction::Options, CORNER_BUTTON),
    );
}

pub fn spawn_level_select(mut commands: Commands, progress: Res<Progress>) {
    let s = Screen::LevelSelect;
    spawn_label(&mut commands, s, TITLE_POS, "Levels", 50.0);
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -100.0),
        BUTTON_SIZE,
        "level 1",
        MenuButton::new(NavAction::SelectLevel(LevelId::One), BUTTON_SIZE),
    );
    let level_two = NavAction::SelectLevel(LevelId::Two);
    let level_two = if progress.level_two_unlocked {
        MenuButton::new(level_two, BUTTON_SIZE)
    } else {
        MenuButton::locked(level_two, BUTTON_SIZE)
    };
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -250.0),
        BUTTON_SIZE,
        "level 2",
        level_two,
    );
    spawn_button(
        &mut commands,
        s,
        BACK_POS,
        CORNER_BUTTON,
        "back",
        MenuButton::new(NavAction::Back, CORNER_BUTTON),
    );
}

pub fn spawn_options(mut commands: Commands) {
    let s = Screen::Options;
    spawn_label(&mut commands, s, TITLE_POS, "Volume", 50.0);
    spawn_volume_slider(&mut commands, s, Vec2::new(0.0, 35.0), Vec2::new(500.0, 50.0));
    spawn_button(
        &mut commands,
        s,
        BACK_POS,
        CORNER_BUTTON,
        "back",
        MenuButton::new(NavAction::Back, CORNER_BUTTON),
    );
}

pub fn spawn_class_select(mut commands: Commands) {
    let s = Screen::ClassSelect;
    spawn_label(&mut commands, s, TITLE_POS, "Pick Your Class", 50.0);
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -100.0),
        BUTTON_SIZE,
        "class 1",
        MenuButton::new(NavAction::SelectClass(ClassId::One), BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -250.0),
        BUTTON_SIZE,
        "class 2",
        MenuButton::new(NavAction::SelectClass(ClassId::Two), BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        BACK_POS,
        CORNER_BUTTON,
        "back",
        MenuButton::new(NavAction::Back, CORNER_BUTTON),
    );
}

pub fn spawn_pause(mut commands: Commands) {
    let s = Screen::Pause;
    spawn_label(&mut commands, s, TITLE_POS, "Settings", 50.0);
    spawn_label(&mut commands, s, Vec2::new(0.0, 150.0), "Volume", 30.0);
    spawn_volume_slider(&mut commands, s, Vec2::new(0.0, 95.0), Vec2::new(500.0, 30.0));
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, 10.0),
        BUTTON_SIZE,
        "resume",
        MenuButton::new(NavAction::Resume, BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -140.0),
        BUTTON_SIZE,
        "restart",
        MenuButton::new(NavAction::Restart, BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, -290.0),
        BUTTON_SIZE,
        "main menu",
        MenuButton::new(NavAction::MainMenu, BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        Vec2::new(470.0, -290.0),
        BUTTON_SIZE,
        "quit game",
        MenuButton::new(NavAction::Quit, BUTTON_SIZE),
    );
}

pub fn spawn_post_game(
    mut commands: Commands,
    outcome: Option<Res<LevelOutcome>>,
    selected: Res<SelectedLevel>,
) {
    let s = Screen::PostGame;
    let status = outcome.map(|o| o.0).unwrap_or(LevelStatus::Lose);
    let title = match status {
        LevelStatus::Win => "Victory",
        _ => "Defeat",
    };
    spawn_label(&mut commands, s, TITLE_POS, title, 50.0);

    let mut next_y = 10.0;
    if status == LevelStatus::Win && selected.0 == LevelId::One {
        spawn_button(
            &mut commands,
            s,
            Vec2::new(0.0, next_y),
            BUTTON_SIZE,
            "next level",
            MenuButton::new(NavAction::NextLevel, BUTTON_SIZE),
        );
        next_y -= 150.0;
    }
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, next_y),
        BUTTON_SIZE,
        "play again",
        MenuButton::new(NavAction::PlayAgain, BUTTON_SIZE),
    );
    spawn_button(
        &mut commands,
        s,
        Vec2::new(0.0, next_y - 150.0),
        BUTTON_SIZE,
        "main menu",
        MenuButton::new(NavAction::MainMenu, BUTTON_SIZE),
    );
}
