mod common;

use cannonade::common::state::Screen;
use cannonade::plugins::core::{Progress, Volume};
use cannonade::plugins::nav::NavStack;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn starts_on_the_start_screen() {
    let mut app = common::app_headless();
    app.update();

    assert_eq!(common::screen(&app), Screen::Start);
    assert_eq!(app.world().resource::<NavStack>().peek(), Screen::Start);
}

#[test]
fn settings_and_progress_resources_exist() {
    let mut app = common::app_headless();
    app.update();

    assert_eq!(app.world().resource::<Volume>().0, 1.0);
    assert!(!app.world().resource::<Progress>().level_two_unlocked);
}
