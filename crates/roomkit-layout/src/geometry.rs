//! Geometry utilities: points, segment projection, snapping and bounding boxes.
//!
//! All functions are pure and total. Degenerate segments (start == end) are
//! tolerated everywhere: projection returns `t = 0` and distances fall back to
//! the point-to-point distance.

use serde::{Deserialize, Serialize};

use crate::model::Rotation;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point snapped to the grid on both axes.
    pub fn snapped(&self, grid_size: f64) -> Point {
        Point::new(snap_to_grid(self.x, grid_size), snap_to_grid(self.y, grid_size))
    }

    /// Angle in degrees of the vector from `self` to `other`, in `(-180, 180]`.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Rounds `value` to the nearest multiple of `grid_size`.
///
/// Halves round towards positive infinity. A non-positive or non-finite grid
/// leaves the value unchanged.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return value;
    }
    (value / grid_size + 0.5).floor() * grid_size
}

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Shortest angular distance between two angles in degrees, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_angle(a - b);
    d.min(360.0 - d)
}

/// Magnetic angle snapping.
///
/// Returns the nearest candidate when it lies within `threshold` degrees
/// (measured around the circle), otherwise returns `angle` unchanged.
pub fn snap_angle(angle: f64, candidates: &[f64], threshold: f64) -> f64 {
    candidates
        .iter()
        .map(|&c| (c, angular_distance(angle, c)))
        .filter(|&(_, d)| d <= threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c)
        .unwrap_or(angle)
}

/// Default magnetic snap candidates: every 45 degrees.
pub const DEFAULT_ANGLE_CANDIDATES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Default magnetic snap threshold in degrees.
pub const DEFAULT_ANGLE_THRESHOLD: f64 = 10.0;

/// Quantizes a free angle to the nearest cardinal rotation.
pub fn quantize_rotation(angle: f64) -> Rotation {
    if !angle.is_finite() {
        return Rotation::Deg0;
    }
    let quarter = (normalize_angle(angle) / 90.0).round() as i64 % 4;
    match quarter {
        1 => Rotation::Deg90,
        2 => Rotation::Deg180,
        3 => Rotation::Deg270,
        _ => Rotation::Deg0,
    }
}

/// Clamped parametric projection of `p` onto segment `a -> b`, in `[0, 1]`.
pub fn project_onto_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return 0.0;
    }
    let dot = (p.x - a.x) * dx + (p.y - a.y) * dy;
    (dot / len_sq).clamp(0.0, 1.0)
}

/// Distance from `p` to the closest point of segment `a -> b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let t = project_onto_segment(p, a, b);
    p.distance_to(&interpolate(a, b, t))
}

/// Linear interpolation between `a` and `b`.
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds from two corners in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Creates bounds from a top-left corner and a size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Creates bounds of the given size centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::from_rect(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Strict overlap on both axes. Boxes that only touch do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
