//! Global screen state machine.
//!
//! `Screen` mirrors the top of the navigation stack (see `plugins::nav`). The
//! `Playing` computed state covers both the live level and the pause overlay,
//! so pausing does not tear the level down while leaving to any menu does.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum Screen {
    #[default]
    Start,
    LevelSelect,
    Options,
    ClassSelect,
    InLevel,
    Pause,
    PostGame,
}

/// Active while a level instance exists (playing or paused).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Playing;

impl ComputedStates for Playing {
    type SourceStates = Screen;

    fn compute(source: Screen) -> Option<Self> {
        matches!(source, Screen::InLevel | Screen::Pause).then_some(Playing)
    }
}
