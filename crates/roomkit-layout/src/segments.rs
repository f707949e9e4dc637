//! Wall segmentation around openings.
//!
//! A wall is parametrized over `[0, 1]`; each bound opening covers an interval
//! centered on its position. The renderable segments are what remains after
//! subtracting those intervals.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::{Opening, Wall};
use roomkit_core::units::inches_to_px;

/// A visible run of wall between openings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub start_t: f64,
    pub end_t: f64,
    pub start: Point,
    pub end: Point,
}

impl WallSegment {
    fn on(wall: &Wall, start_t: f64, end_t: f64) -> Self {
        Self {
            start_t,
            end_t,
            start: wall.point_at(start_t),
            end: wall.point_at(end_t),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Renderable segments of `wall`.
///
/// Openings not bound to `wall` are ignored. A zero-length wall, or a wall
/// with no openings, yields the single segment `[0, 1]`.
pub fn wall_segments(wall: &Wall, openings: &[Opening]) -> Vec<WallSegment> {
    let length = wall.length();
    let mut bound: Vec<&Opening> = openings.iter().filter(|o| o.wall_id == wall.id).collect();
    if bound.is_empty() || length <= 0.0 {
        return vec![WallSegment::on(wall, 0.0, 1.0)];
    }
    bound.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut segments = Vec::new();
    let mut cursor = 0.0_f64;
    for opening in bound {
        let half_ratio = inches_to_px(opening.width) / 2.0 / length;
        let gap_start = (opening.position - half_ratio).clamp(0.0, 1.0);
        let gap_end = (opening.position + half_ratio).clamp(0.0, 1.0);
        if gap_start > cursor {
            segments.push(WallSegment::on(wall, cursor, gap_start));
        }
        cursor = cursor.max(gap_end);
    }
    if cursor < 1.0 {
        segments.push(WallSegment::on(wall, cursor, 1.0));
    }
    segments
}

/// Segments for every wall, in wall order.
pub fn all_wall_segments(walls: &[Wall], openings: &[Opening]) -> Vec<(u64, Vec<WallSegment>)> {
    walls
        .iter()
        .map(|w| (w.id, wall_segments(w, openings)))
        .collect()
}
