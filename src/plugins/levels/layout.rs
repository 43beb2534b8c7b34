//! Static level layout data.
//!
//! A `LevelConfig` is plain data: positions, sizes, body kinds, angles. Level
//! builds are a pure function of this data plus the chosen weapon class, so
//! rebuilding from the same config reproduces identical bodies. Everything is
//! serde-friendly (positions as `[f32; 2]`) so layouts round-trip through JSON.

use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassId {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Static,
    Dynamic,
}

/// Box obstacle: center position, full extents, body kind, angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub kind: BodyKind,
    pub angle: f32,
}

/// Enemy target: center position and full extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

/// One projectile in a class roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub radius: f32,
    pub mass: f32,
    pub friction: f32,
    pub elasticity: f32,
    /// Impulse scale: launch impulse = `power_factor * power`.
    pub power_factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: LevelId,
    /// Ground segment endpoints.
    pub floor: [[f32; 2]; 2],
    /// Where the current weapon is staged before launch.
    pub launch_pad: [f32; 2],
    /// Power added/removed per power keypress; level-tuned.
    pub power_step: i32,
    pub blocks: Vec<BlockSpec>,
    pub enemies: Vec<EnemySpec>,
}

/// Layout validation failure, with enough context to name the bad entry.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    DegenerateFloor,
    BadBlockSize { index: usize, size: [f32; 2] },
    BadEnemySize { index: usize, size: [f32; 2] },
    NoEnemies,
    BadWeaponRadius { index: usize, radius: f32 },
    BadWeaponMass { index: usize, mass: f32 },
    EmptyRoster,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DegenerateFloor => write!(f, "floor endpoints coincide"),
            LayoutError::BadBlockSize { index, size } => {
                write!(f, "block #{index} has non-positive size {size:?}")
            }
            LayoutError::BadEnemySize { index, size } => {
                write!(f, "enemy #{index} has non-positive size {size:?}")
            }
            LayoutError::NoEnemies => write!(f, "level has no enemies"),
            LayoutError::BadWeaponRadius { index, radius } => {
                write!(f, "weapon #{index} has non-positive radius {radius}")
            }
            LayoutError::BadWeaponMass { index, mass } => {
                write!(f, "weapon #{index} has non-positive mass {mass}")
            }
            LayoutError::EmptyRoster => write!(f, "weapon roster is empty"),
        }
    }
}

impl core::error::Error for LayoutError {}

impl LevelConfig {
    pub fn for_level(id: LevelId) -> Self {
        match id {
            LevelId::One => Self::level_one(),
            LevelId::Two => Self::level_two(),
        }
    }

    /// Fail-fast check run at level load. Not recoverable mid-run.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let [start, end] = self.floor;
        if start == end {
            return Err(LayoutError::DegenerateFloor);
        }
        for (index, block) in self.blocks.iter().enumerate() {
            if block.size[0] <= 0.0 || block.size[1] <= 0.0 {
                return Err(LayoutError::BadBlockSize {
                    index,
                    size: block.size,
                });
            }
        }
        if self.enemies.is_empty() {
            return Err(LayoutError::NoEnemies);
        }
        for (index, enemy) in self.enemies.iter().enumerate() {
            if enemy.size[0] <= 0.0 || enemy.size[1] <= 0.0 {
                return Err(LayoutError::BadEnemySize {
                    index,
                    size: enemy.size,
                });
            }
        }
        Ok(())
    }

    /// Level 1: a static stack with targets on the ground and one raised shelf.
    fn level_one() -> Self {
        Self {
            id: LevelId::One,
            floor: [[-640.0, -360.0], [640.0, -360.0]],
            launch_pad: [-500.0, -120.0],
            power_step: 100,
            blocks: vec![
                BlockSpec {
                    pos: [-640.0, -260.0],
                    size: [300.0, 200.0],
                    kind: BodyKind::Static,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [-440.0, -172.0],
                    size: [120.0, 25.0],
                    kind: BodyKind::Static,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [-270.0, -330.0],
                    size: [256.0, 50.0],
                    kind: BodyKind::Static,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [420.0, -250.0],
                    size: [160.0, 20.0],
                    kind: BodyKind::Static,
                    angle: 0.0,
                },
            ],
            enemies: vec![
                EnemySpec {
                    pos: [300.0, -340.0],
                    size: [30.0, 40.0],
                },
                EnemySpec {
                    pos: [520.0, -340.0],
                    size: [30.0, 40.0],
                },
                EnemySpec {
                    pos: [420.0, -220.0],
                    size: [30.0, 40.0],
                },
            ],
        }
    }

    /// Level 2: dynamic towers that can be knocked over, finer power steps.
    fn level_two() -> Self {
        Self {
            id: LevelId::Two,
            floor: [[-640.0, -360.0], [640.0, -360.0]],
            launch_pad: [-500.0, -120.0],
            power_step: 10,
            blocks: vec![
                BlockSpec {
                    pos: [-100.0, -340.0],
                    size: [300.0, 20.0],
                    kind: BodyKind::Static,
                    angle: 0.15,
                },
                BlockSpec {
                    pos: [350.0, -320.0],
                    size: [40.0, 80.0],
                    kind: BodyKind::Dynamic,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [350.0, -240.0],
                    size: [40.0, 80.0],
                    kind: BodyKind::Dynamic,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [430.0, -320.0],
                    size: [40.0, 80.0],
                    kind: BodyKind::Dynamic,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [430.0, -240.0],
                    size: [40.0, 80.0],
                    kind: BodyKind::Dynamic,
                    angle: 0.0,
                },
                BlockSpec {
                    pos: [390.0, -190.0],
                    size: [160.0, 20.0],
                    kind: BodyKind::Dynamic,
                    angle: 0.0,
                },
            ],
            enemies: vec![
                EnemySpec {
                    pos: [390.0, -340.0],
                    size: [30.0, 40.0],
                },
                EnemySpec {
                    pos: [390.0, -160.0],
                    size: [30.0, 40.0],
                },
            ],
        }
    }
}

/// The projectiles a class brings into a level, in launch order.
pub fn class_roster(class: ClassId) -> Vec<WeaponSpec> {
    match class {
        // Cannon balls: three light shots.
        ClassId::One => vec![
            WeaponSpec {
                radius: 10.0,
                mass: 2.0,
                friction: 0.5,
                elasticity: 0.5,
                power_factor: 7.0,
            };
            3
        ],
        // Heavy balls: two shots with a stronger impulse scale.
        ClassId::Two => vec![
            WeaponSpec {
                radius: 14.0,
                mass: 4.0,
                friction: 0.5,
                elasticity: 0.3,
                power_factor: 12.0,
            };
            2
        ],
    }
}

/// Fail-fast check for a roster, mirroring `LevelConfig::validate`.
pub fn validate_roster(roster: &[WeaponSpec]) -> Result<(), LayoutError> {
    if roster.is_empty() {
        return Err(LayoutError::EmptyRoster);
    }
    for (index, weapon) in roster.iter().enumerate() {
        if weapon.radius <= 0.0 {
            return Err(LayoutError::BadWeaponRadius {
                index,
                radius: weapon.radius,
            });
        }
        if weapon.mass <= 0.0 {
            return Err(LayoutError::BadWeaponMass {
                index,
                mass: weapon.mass,
            });
        }
    }
    Ok(())
}
