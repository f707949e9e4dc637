use serde::{Deserialize, Serialize};

use crate::geometry::{distance_to_segment, interpolate, project_onto_segment, Bounds, Point};

/// Default wall thickness in pixels (about 4.5in).
pub const DEFAULT_WALL_THICKNESS_PX: f64 = 9.0;

/// A room boundary: a thick line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: u64,
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
}

/// Which end of a wall a handle drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallEndpoint {
    Start,
    End,
}

/// Coordinate axis for single-axis endpoint edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Wall {
    pub fn new(id: u64, start: Point, end: Point, thickness: f64) -> Self {
        Self {
            id,
            start,
            end,
            thickness,
        }
    }

    /// Length in pixels. Zero for a degenerate wall.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn endpoint(&self, endpoint: WallEndpoint) -> Point {
        match endpoint {
            WallEndpoint::Start => self.start,
            WallEndpoint::End => self.end,
        }
    }

    /// Point at parametric position `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point {
        interpolate(self.start, self.end, t)
    }

    /// Perpendicular distance from `p` to this wall, clamped to its endpoints.
    pub fn distance_to(&self, p: Point) -> f64 {
        distance_to_segment(p, self.start, self.end)
    }

    /// Clamped parametric projection of `p` onto this wall.
    pub fn position_of(&self, p: Point) -> f64 {
        project_onto_segment(p, self.start, self.end)
    }

    /// Segment bounding box grown by half the wall thickness on every side.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.start.x, self.start.y, self.end.x, self.end.y)
            .inflate(self.thickness / 2.0)
    }

    /// Copy of this wall with one coordinate of one endpoint replaced.
    pub fn with_endpoint_axis(&self, endpoint: WallEndpoint, axis: Axis, value: f64) -> Wall {
        let mut wall = self.clone();
        let p = match endpoint {
            WallEndpoint::Start => &mut wall.start,
            WallEndpoint::End => &mut wall.end,
        };
        match axis {
            Axis::X => p.x = value,
            Axis::Y => p.y = value,
        }
        wall
    }
}
