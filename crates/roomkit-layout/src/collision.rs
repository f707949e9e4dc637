//! Cabinet collision detection.
//!
//! Cabinets are tested as unrotated axis-aligned boxes against inflated wall
//! boxes and against small boxes centered on each opening. Everything is
//! recomputed from scratch; there is no incremental state to go stale.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::model::{Cabinet, Opening, Wall};
use roomkit_core::units::inches_to_px;

/// Height in pixels of the box standing in for an opening.
pub const OPENING_BOX_HEIGHT_PX: f64 = 20.0;

/// What a cabinet overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Violation {
    Wall,
    Opening,
}

impl Violation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::Wall => "wall",
            Violation::Opening => "opening",
        }
    }
}

/// Cabinet id to its violations. Only cabinets with at least one violation appear.
pub type CollisionMap = BTreeMap<u64, BTreeSet<Violation>>;

/// Box approximating an opening: centered on its wall position, `width * 2`
/// pixels wide and a fixed 20px tall. `None` when the host wall is missing.
pub fn opening_bounds(opening: &Opening, walls: &[Wall]) -> Option<Bounds> {
    let wall = walls.iter().find(|w| w.id == opening.wall_id)?;
    Some(Bounds::centered(
        opening.anchor(wall),
        inches_to_px(opening.width),
        OPENING_BOX_HEIGHT_PX,
    ))
}

/// Computes the collision map for the given layout.
pub fn detect_collisions(walls: &[Wall], openings: &[Opening], cabinets: &[Cabinet]) -> CollisionMap {
    let wall_boxes: Vec<Bounds> = walls.iter().map(Wall::bounds).collect();
    let opening_boxes: Vec<Bounds> = openings
        .iter()
        .filter_map(|o| opening_bounds(o, walls))
        .collect();

    let mut map = CollisionMap::new();
    for cabinet in cabinets {
        let footprint = cabinet.footprint();
        let mut violations = BTreeSet::new();
        if wall_boxes.iter().any(|b| footprint.intersects(b)) {
            violations.insert(Violation::Wall);
        }
        if opening_boxes.iter().any(|b| footprint.intersects(b)) {
            violations.insert(Violation::Opening);
        }
        if !violations.is_empty() {
            map.insert(cabinet.id, violations);
        }
    }
    map
}

/// Pairs of cabinet ids whose footprints overlap, each pair ordered `(low, high)`.
pub fn overlapping_cabinets(cabinets: &[Cabinet]) -> Vec<(u64, u64)> {
    let mut pairs = Vec::new();
    for (i, a) in cabinets.iter().enumerate() {
        let fa = a.footprint();
        for b in &cabinets[i + 1..] {
            if fa.intersects(&b.footprint()) {
                pairs.push((a.id.min(b.id), a.id.max(b.id)));
            }
        }
    }
    pairs.sort_unstable();
    pairs
}
