#![cfg(test)]

use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::plugins::enemies::Enemy;

use super::layout::{
    class_roster, validate_roster, BlockSpec, BodyKind, ClassId, EnemySpec, LayoutError,
    LevelConfig, LevelId, WeaponSpec,
};
use super::{spawn_terrain, Block, CurrentLevel, Floor, LevelTag, SelectedLevel};

// --------------------------------------------------------------------------
// Layout validation
// --------------------------------------------------------------------------

#[test]
fn builtin_layouts_are_valid() {
    LevelConfig::for_level(LevelId::One).validate().unwrap();
    LevelConfig::for_level(LevelId::Two).validate().unwrap();
    validate_roster(&class_roster(ClassId::One)).unwrap();
    validate_roster(&class_roster(ClassId::Two)).unwrap();
}

#[test]
fn degenerate_floor_is_rejected() {
    let mut cfg = LevelConfig::for_level(LevelId::One);
    cfg.floor = [[10.0, 10.0], [10.0, 10.0]];
    assert_eq!(cfg.validate(), Err(LayoutError::DegenerateFloor));
}

#[test]
fn bad_block_size_names_the_entry() {
    let mut cfg = LevelConfig::for_level(LevelId::One);
    cfg.blocks[2].size = [0.0, 50.0];
    assert_eq!(
        cfg.validate(),
        Err(LayoutError::BadBlockSize {
            index: 2,
            size: [0.0, 50.0],
        })
    );
}

#[test]
fn level_without_enemies_is_rejected() {
    let mut cfg = LevelConfig::for_level(LevelId::Two);
    cfg.enemies.clear();
    assert_eq!(cfg.validate(), Err(LayoutError::NoEnemies));
}

#[test]
fn bad_enemy_size_names_the_entry() {
    let mut cfg = LevelConfig::for_level(LevelId::One);
    cfg.enemies[1].size = [30.0, -40.0];
    assert_eq!(
        cfg.validate(),
        Err(LayoutError::BadEnemySize {
            index: 1,
            size: [30.0, -40.0],
        })
    );
}

#[test]
fn empty_roster_is_rejected() {
    assert_eq!(validate_roster(&[]), Err(LayoutError::EmptyRoster));
}

#[test]
fn weightless_weapon_is_rejected() {
    let mut roster = class_roster(ClassId::One);
    roster[1].mass = 0.0;
    assert_eq!(
        validate_roster(&roster),
        Err(LayoutError::BadWeaponMass {
            index: 1,
            mass: 0.0,
        })
    );
}

#[test]
fn errors_render_readable_messages() {
    let e = LayoutError::BadWeaponRadius {
        index: 0,
        radius: -1.0,
    };
    assert_eq!(e.to_string(), "weapon #0 has non-positive radius -1");
}

// --------------------------------------------------------------------------
// Serde round-trip
// --------------------------------------------------------------------------

#[test]
fn level_config_round_trips_through_json() {
    let cfg = LevelConfig::for_level(LevelId::Two);
    let json = serde_json::to_string(&cfg).unwrap();
    let back: LevelConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn weapon_spec_round_trips_through_json() {
    let spec = WeaponSpec {
        radius: 14.0,
        mass: 4.0,
        friction: 0.5,
        elasticity: 0.3,
        power_factor: 12.0,
    };
    let json = serde_json::to_string(&spec).unwrap();
    let back: WeaponSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

// --------------------------------------------------------------------------
// Terrain construction
// --------------------------------------------------------------------------

fn collect_terrain(world: &mut World) -> Vec<(f32, f32, f32)> {
    let mut q = world.query_filtered::<&Transform, With<LevelTag>>();
    let mut out: Vec<_> = q
        .iter(world)
        .map(|t| (t.translation.x, t.translation.y, t.rotation.to_euler(EulerRot::ZYX).0))
        .collect();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap());
    out
}

#[test]
fn spawn_terrain_builds_every_spec_entry() {
    let mut world = World::new();
    world.insert_resource(SelectedLevel(LevelId::One));

    run_system_once(&mut world, spawn_terrain);

    let cfg = LevelConfig::for_level(LevelId::One);
    let mut floors = world.query_filtered::<(), With<Floor>>();
    assert_eq!(floors.iter(&world).count(), 1);
    let mut blocks = world.query_filtered::<(), With<Block>>();
    assert_eq!(blocks.iter(&world).count(), cfg.blocks.len());
    let mut enemies = world.query_filtered::<(), With<Enemy>>();
    assert_eq!(enemies.iter(&world).count(), cfg.enemies.len());

    assert_eq!(world.resource::<CurrentLevel>().0, cfg);
}

#[test]
fn terrain_build_is_deterministic() {
    let mut a = World::new();
    a.insert_resource(SelectedLevel(LevelId::Two));
    run_system_once(&mut a, spawn_terrain);

    let mut b = World::new();
    b.insert_resource(SelectedLevel(LevelId::Two));
    run_system_once(&mut b, spawn_terrain);

    assert_eq!(collect_terrain(&mut a), collect_terrain(&mut b));
}

#[test]
fn ramp_angle_reaches_the_transform() {
    let spec = BlockSpec {
        pos: [0.0, 0.0],
        size: [100.0, 20.0],
        kind: BodyKind::Static,
        angle: 0.15,
    };
    let cfg = LevelConfig {
        id: LevelId::One,
        floor: [[-640.0, -360.0], [640.0, -360.0]],
        launch_pad: [-500.0, -120.0],
        power_step: 100,
        blocks: vec![spec],
        enemies: vec![EnemySpec {
            pos: [300.0, -340.0],
            size: [30.0, 40.0],
        }],
    };

    let mut world = World::new();
    world.insert_resource(SelectedLevel(LevelId::One));
    run_system_once(&mut world, move |mut commands: Commands| {
        super::build_terrain(&mut commands, &cfg);
    });

    let mut q = world.query_filtered::<&Transform, With<Block>>();
    let tf = q.single(&world).unwrap();
    let (z, _, _) = tf.rotation.to_euler(EulerRot::ZYX);
    assert!((z - 0.15).abs() < 1e-5);
}
