//! Collision dispatch: projectile-vs-enemy contact begins remove the enemy.
//!
//! Runs after Avian's collision-event systems in `FixedPostUpdate`. An event
//! qualifies when exactly one side is a projectile collider; the enemy is
//! resolved through the other side's rigid-body owner. The effect is a mark
//! (`PendingDespawn`) plus cleared collision filters, never a direct despawn.
//!
//! Idempotence: several contacts can resolve to the same enemy in one tick
//! (two projectiles, or multiple manifolds). A per-run dedupe set plus the
//! `Without<PendingDespawn>` filter make the second removal a no-op.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::plugins::enemies::{non_interacting_enemy_layers, Enemy, PendingDespawn};

use super::components::Projectile;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

pub fn process_projectile_hits(
    mut started: MessageReader<CollisionStart>,
    mut commands: Commands,
    q_is_projectile: Query<(), With<Projectile>>,
    mut q_enemies: Query<&mut CollisionLayers, (With<Enemy>, Without<PendingDespawn>)>,
    // Per-run dedupe
    mut struck: Local<HashSet<Entity>>,
) {
    struck.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        // Exactly one projectile side.
        let p1 = q_is_projectile.contains(t1.collider);
        let p2 = q_is_projectile.contains(t2.collider);
        if !(p1 ^ p2) {
            continue;
        }
        let other = if p1 { t2 } else { t1 };

        let enemy = other.gameplay_owner();
        if !struck.insert(enemy) {
            continue;
        }

        // Already marked (or not an enemy at all) -> no-op.
        let Ok(mut layers) = q_enemies.get_mut(enemy) else {
            continue;
        };

        *layers = non_interacting_enemy_layers();
        commands.entity(enemy).insert(PendingDespawn);
    }
}
