use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::Wall;

/// Door or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
        }
    }
}

impl std::fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A door or window bound to a wall at a normalized position.
///
/// `width`, `height` and `height_from_floor` are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub wall_id: u64,
    pub position: f64,
    pub width: f64,
    pub height: f64,
    #[serde(alias = "yPosition")]
    pub height_from_floor: f64,
}

impl Opening {
    /// Center of the opening on its host wall.
    pub fn anchor(&self, wall: &Wall) -> Point {
        wall.point_at(self.position)
    }

    /// Clamps a parametric position into `[0, 1]`. NaN maps to 0.
    pub fn clamp_position(position: f64) -> f64 {
        if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        }
    }
}
