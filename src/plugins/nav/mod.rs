//! Navigation plugin: the screen state stack.
//!
//! `NavStack` is the single source of truth for which screen is active; the
//! Bevy `Screen` state is a mirror of its top, synced once per frame. Buttons
//! (and the pause key) never touch `NextState` directly. They enqueue
//! `NavAction` messages, and `apply_nav_actions` is the one consumer that
//! mutates the stack, so every transition goes through the same place.

use bevy::app::AppExit;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::Screen;
use crate::plugins::levels::{ClassId, LevelId, RebuildLevel, SelectedClass, SelectedLevel};

/// Screen history. Top of stack = active screen; the root never pops.
#[derive(Resource, Debug, Clone)]
pub struct NavStack {
    stack: Vec<Screen>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            stack: vec![Screen::Start],
        }
    }
}

impl NavStack {
    pub fn peek(&self) -> Screen {
        *self.stack.last().expect("nav stack can never be empty")
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Return to the previous screen. Popping the root is a defensive no-op.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() == 1 {
            warn!("ignoring pop on root screen");
            return None;
        }
        self.stack.pop()
    }

    pub fn reset_to_root(&mut self) {
        self.stack.clear();
        self.stack.push(Screen::Start);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Everything a button (or the pause key) can ask the stack to do.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Play,
    Options,
    Back,
    Resume,
    PlayAgain,
    SelectLevel(LevelId),
    SelectClass(ClassId),
    NextLevel,
    Restart,
    MainMenu,
    Quit,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(NavStack::default());

    app.init_resource::<Messages<NavAction>>();
    app.add_systems(PostUpdate, update_nav_messages);

    app.add_systems(Update, (toggle_pause, apply_nav_actions, sync_screen).chain());
}

fn update_nav_messages(mut msgs: ResMut<Messages<NavAction>>) {
    msgs.update();
}

/// The one writer of stack mutations.
fn apply_nav_actions(
    mut reader: MessageReader<NavAction>,
    mut nav: ResMut<NavStack>,
    mut selected_level: ResMut<SelectedLevel>,
    mut selected_class: ResMut<SelectedClass>,
    mut rebuild: MessageWriter<RebuildLevel>,
    mut exit: MessageWriter<AppExit>,
) {
    for action in reader.read() {
        match *action {
            NavAction::Play => {
                nav.push(Screen::LevelSelect);
            }
            NavAction::Options => {
                nav.push(Screen::Options);
            }
            NavAction::Back | NavAction::Resume | NavAction::PlayAgain => {
                nav.pop();
            }
            NavAction::SelectLevel(id) => {
                selected_level.0 = id;
                nav.push(Screen::ClassSelect);
            }
            NavAction::SelectClass(id) => {
                selected_class.0 = id;
                nav.push(Screen::InLevel);
            }
            NavAction::NextLevel => {
                selected_level.0 = LevelId::Two;
                nav.push(Screen::ClassSelect);
            }
            NavAction::Restart => {
                // Back to the level screen, then rebuild it from config.
                nav.pop();
                rebuild.write(RebuildLevel);
            }
            NavAction::MainMenu => {
                nav.reset_to_root();
            }
            NavAction::Quit => {
                exit.write(AppExit::Success);
            }
        }
    }
}

/// Escape toggles the pause overlay from inside the level.
fn toggle_pause(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    state: Res<State<Screen>>,
    mut nav: ResMut<NavStack>,
) {
    let Some(keys) = keys else { return };
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        Screen::InLevel => nav.push(Screen::Pause),
        Screen::Pause => {
            nav.pop();
        }
        _ => {}
    }
}

/// Mirror the stack top into the Bevy state machine.
fn sync_screen(
    nav: Res<NavStack>,
    state: Res<State<Screen>>,
    mut next: ResMut<NextState<Screen>>,
) {
    if nav.peek() != *state.get() {
        next.set(nav.peek());
    }
}
