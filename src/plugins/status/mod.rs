//! Level status evaluator.
//!
//! Recomputed every fixed tick from the two live counts. Win means the last
//! enemy is gone, full stop: a final shot that clears the board wins even if
//! weapons remain, and even if none do.

use bevy::prelude::*;

use crate::common::state::Screen;
use crate::plugins::core::Progress;
use crate::plugins::enemies::{Enemy, PendingDespawn};
use crate::plugins::levels::{LevelId, SelectedLevel};
use crate::plugins::nav::NavStack;
use crate::plugins::weapons;
use crate::plugins::weapons::WeaponQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    Playing,
    Win,
    Lose,
}

impl LevelStatus {
    pub fn is_terminal(self) -> bool {
        self != LevelStatus::Playing
    }
}

/// Terminal status of the run that just ended; read by the post-game screen.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelOutcome(pub LevelStatus);

/// Pure classification from the two counts.
pub fn evaluate(weapons: usize, enemies: usize) -> LevelStatus {
    if enemies == 0 {
        LevelStatus::Win
    } else if weapons == 0 {
        LevelStatus::Lose
    } else {
        LevelStatus::Playing
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        check_level_status
            .after(weapons::collision::process_projectile_hits)
            .run_if(in_state(Screen::InLevel)),
    );
}

/// On a terminal status: record the outcome, bump unlock progress, and hand
/// control to the navigation stack via a post-game push.
fn check_level_status(
    mut commands: Commands,
    queue: Res<WeaponQueue>,
    q_enemies: Query<(), (With<Enemy>, Without<PendingDespawn>)>,
    mut nav: ResMut<NavStack>,
    mut progress: ResMut<Progress>,
    selected: Res<SelectedLevel>,
) {
    // Several fixed ticks can run before the state mirror applies; push once.
    if nav.peek() != Screen::InLevel {
        return;
    }

    let status = evaluate(queue.len(), q_enemies.iter().count());
    if !status.is_terminal() {
        return;
    }

    if status == LevelStatus::Win && selected.0 == LevelId::One {
        progress.level_two_unlocked = true;
    }

    commands.insert_resource(LevelOutcome(status));
    nav.push(Screen::PostGame);
}

#[cfg(test)]
mod tests;
