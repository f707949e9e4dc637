//! Quick room layouts.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::layout_store::LayoutState;
use crate::model::Wall;
use roomkit_settings::PresetSettings;

/// Predefined wall arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPreset {
    /// One wall of the configured straight length
    Straight,
    /// Two walls meeting at the top-left corner
    LShape,
    /// Three walls open at the bottom
    UShape,
    /// Four walls forming a closed rectangle
    Closed,
}

impl RoomPreset {
    pub const ALL: [RoomPreset; 4] = [
        RoomPreset::Straight,
        RoomPreset::LShape,
        RoomPreset::UShape,
        RoomPreset::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomPreset::Straight => "straight",
            RoomPreset::LShape => "l_shape",
            RoomPreset::UShape => "u_shape",
            RoomPreset::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "straight" => Some(RoomPreset::Straight),
            "l_shape" | "l-shape" => Some(RoomPreset::LShape),
            "u_shape" | "u-shape" => Some(RoomPreset::UShape),
            "closed" => Some(RoomPreset::Closed),
            _ => None,
        }
    }

    /// Builds the preset's walls, numbered from 1, with no openings.
    pub fn build(&self, settings: &PresetSettings, thickness: f64) -> LayoutState {
        let (ox, oy) = settings.origin;
        let w = settings.room_width_px;
        let d = settings.room_depth_px;
        let tl = Point::new(ox, oy);
        let tr = Point::new(ox + w, oy);
        let br = Point::new(ox + w, oy + d);
        let bl = Point::new(ox, oy + d);

        let runs = match self {
            RoomPreset::Straight => vec![(tl, Point::new(ox + settings.straight_length_px, oy))],
            RoomPreset::LShape => vec![(bl, tl), (tl, tr)],
            RoomPreset::UShape => vec![(bl, tl), (tl, tr), (tr, br)],
            RoomPreset::Closed => return rectangle(tl, w, d, thickness),
        };
        LayoutState::new(numbered(runs, thickness), Vec::new())
    }
}

impl std::fmt::Display for RoomPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed clockwise rectangle of walls 1..=4: top, right, bottom, left.
pub fn rectangle(origin: Point, width: f64, depth: f64, thickness: f64) -> LayoutState {
    let tl = origin;
    let tr = Point::new(origin.x + width, origin.y);
    let br = Point::new(origin.x + width, origin.y + depth);
    let bl = Point::new(origin.x, origin.y + depth);
    LayoutState::new(
        numbered(vec![(tl, tr), (tr, br), (br, bl), (bl, tl)], thickness),
        Vec::new(),
    )
}

fn numbered(runs: Vec<(Point, Point)>, thickness: f64) -> Vec<Wall> {
    runs.into_iter()
        .zip(1u64..)
        .map(|((start, end), id)| Wall::new(id, start, end, thickness))
        .collect()
}
