//! Physics registration.
//!
//! One fixed clock drives everything: Avian steps in `FixedPostUpdate` at
//! `SIM_HZ`, and the launch-protocol timers tick at the same rate. Gravity is
//! 981 px/s² downward. Entering the pause screen freezes the physics clock so
//! bodies hold still under the pause overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::state::Screen;
use crate::common::tunables::{SIM_HZ, Tunables};

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::new(0.0, -981.0)));
    app.insert_resource(Time::<Fixed>::from_hz(SIM_HZ));

    app.add_systems(OnEnter(Screen::Pause), pause_physics);
    app.add_systems(OnExit(Screen::Pause), resume_physics);
}

fn pause_physics(mut time: ResMut<Time<Physics>>) {
    time.pause();
}

fn resume_physics(mut time: ResMut<Time<Physics>>) {
    time.unpause();
}
