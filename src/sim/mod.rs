//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only, owned by the session and threaded explicitly
//! - No rendering or platform dependencies
//! - Entities mutate only inside their own `update` or the collision step

pub mod collision;
pub mod motion;
pub mod obstacle;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use motion::Kinematics;
pub use obstacle::{Obstacle, ObstacleKind, ShapeSelector, SizeClass};
pub use projectile::{Projectile, WeaponKind};
pub use state::{GameState, MoveAxes, PlayerShip};
pub use tick::{TickInput, tick};
