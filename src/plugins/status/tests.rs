#![cfg(test)]

use bevy::prelude::*;

use crate::common::state::Screen;
use crate::common::test_utils::run_system_once;
use crate::plugins::core::Progress;
use crate::plugins::enemies::{Enemy, PendingDespawn};
use crate::plugins::levels::{LevelId, SelectedLevel};
use crate::plugins::nav::NavStack;
use crate::plugins::weapons::WeaponQueue;

use super::{check_level_status, evaluate, LevelOutcome, LevelStatus};

#[test]
fn evaluate_classifies_both_counts() {
    assert_eq!(evaluate(3, 2), LevelStatus::Playing);
    assert_eq!(evaluate(3, 0), LevelStatus::Win);
    assert_eq!(evaluate(0, 2), LevelStatus::Lose);
    // Enemies cleared on the final shot still wins.
    assert_eq!(evaluate(0, 0), LevelStatus::Win);
}

fn status_world(level: LevelId, weapons: usize, enemies: usize) -> World {
    let mut world = World::new();

    let mut nav = NavStack::default();
    nav.push(Screen::LevelSelect);
    nav.push(Screen::ClassSelect);
    nav.push(Screen::InLevel);
    world.insert_resource(nav);

    world.insert_resource(Progress::default());
    world.insert_resource(SelectedLevel(level));

    let mut queue = WeaponQueue::default();
    for _ in 0..weapons {
        let e = world.spawn_empty().id();
        queue.push_back(e);
    }
    world.insert_resource(queue);

    for _ in 0..enemies {
        world.spawn(Enemy);
    }

    world
}

#[test]
fn ongoing_level_pushes_nothing() {
    let mut world = status_world(LevelId::One, 2, 2);
    run_system_once(&mut world, check_level_status);

    assert_eq!(world.resource::<NavStack>().peek(), Screen::InLevel);
    assert!(world.get_resource::<LevelOutcome>().is_none());
}

#[test]
fn exhausted_queue_with_enemies_left_is_a_defeat() {
    let mut world = status_world(LevelId::One, 0, 1);
    run_system_once(&mut world, check_level_status);

    assert_eq!(world.resource::<NavStack>().peek(), Screen::PostGame);
    assert_eq!(world.resource::<LevelOutcome>().0, LevelStatus::Lose);
    assert!(!world.resource::<Progress>().level_two_unlocked);
}

#[test]
fn clearing_enemies_with_weapons_left_is_a_win() {
    let mut world = status_world(LevelId::One, 2, 0);
    run_system_once(&mut world, check_level_status);

    assert_eq!(world.resource::<NavStack>().peek(), Screen::PostGame);
    assert_eq!(world.resource::<LevelOutcome>().0, LevelStatus::Win);
}

#[test]
fn winning_level_one_unlocks_level_two() {
    let mut world = status_world(LevelId::One, 1, 0);
    run_system_once(&mut world, check_level_status);
    assert!(world.resource::<Progress>().level_two_unlocked);
}

#[test]
fn winning_level_two_leaves_progress_alone() {
    let mut world = status_world(LevelId::Two, 1, 0);
    run_system_once(&mut world, check_level_status);
    assert!(!world.resource::<Progress>().level_two_unlocked);
}

#[test]
fn marked_enemies_do_not_count_as_alive() {
    let mut world = status_world(LevelId::One, 1, 0);
    world.spawn((Enemy, PendingDespawn));

    run_system_once(&mut world, check_level_status);
    assert_eq!(world.resource::<LevelOutcome>().0, LevelStatus::Win);
}

#[test]
fn terminal_status_pushes_the_post_game_screen_once() {
    let mut world = status_world(LevelId::One, 0, 1);
    run_system_once(&mut world, check_level_status);
    let depth = world.resource::<NavStack>().depth();

    // The state mirror lags by a frame; further fixed ticks must not stack
    // additional screens.
    run_system_once(&mut world, check_level_status);
    assert_eq!(world.resource::<NavStack>().depth(), depth);
}
