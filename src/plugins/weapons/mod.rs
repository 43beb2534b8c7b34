//! Weapons plugin: the weapon queue, launch protocol, and hit dispatch.
//!
//! Data flow per fixed tick while a level runs:
//!
//! ```text
//! Update:            adjust_aim -> launch_current          (input, variable dt)
//! FixedUpdate:       tick_flight                           (protocol timer)
//! FixedPostUpdate:   Avian steps, emits CollisionStart
//!                    process_projectile_hits               (enemy marking)
//!                    (status evaluator runs after, in the status plugin)
//! PostUpdate:        marked enemies despawn (enemies plugin)
//! ```

pub mod collision;
pub mod components;
pub mod hud;
pub mod protocol;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::{Playing, Screen};

pub use components::{Aim, LaunchState, Projectile, WeaponQueue};

pub fn plugin(app: &mut App) {
    app.insert_resource(WeaponQueue::default());
    app.insert_resource(Aim::default());

    app.add_systems(OnEnter(Playing), (protocol::spawn_weapons, hud::spawn_hud).chain());
    app.add_systems(OnExit(Playing), protocol::reset_queue);

    app.add_systems(
        Update,
        (
            protocol::adjust_aim,
            protocol::launch_current.after(protocol::adjust_aim),
            protocol::rebuild_weapons,
            hud::update_bars,
            hud::update_indicator,
        )
            .run_if(in_state(Screen::InLevel)),
    );

    app.add_systems(
        FixedUpdate,
        protocol::tick_flight.run_if(in_state(Screen::InLevel)),
    );

    app.add_systems(
        FixedPostUpdate,
        collision::process_projectile_hits
            .after(CollisionEventSystems)
            .run_if(in_state(Screen::InLevel)),
    );
}
