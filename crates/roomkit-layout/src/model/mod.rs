//! Entity model: walls, openings bound to walls, and cabinets.

mod cabinet;
mod opening;
mod wall;

pub use cabinet::{Cabinet, CabinetPatch, Rotation};
pub use opening::{Opening, OpeningKind};
pub use wall::{Axis, Wall, WallEndpoint, DEFAULT_WALL_THICKNESS_PX};
