use super::{Progress, Volume};
use crate::common::tunables::Tunables;
use crate::plugins::core;
use bevy::prelude::*;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
    assert!(app.world().get_resource::<Volume>().is_some());
    assert!(!app.world().resource::<Progress>().level_two_unlocked);
}

#[test]
fn volume_clamps() {
    let mut v = Volume::default();
    v.set_clamped(1.7);
    assert_eq!(v.0, 1.0);
    v.set_clamped(-0.3);
    assert_eq!(v.0, 0.0);
    v.set_clamped(0.45);
    assert_eq!(v.0, 0.45);
}
