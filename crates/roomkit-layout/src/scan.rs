//! Room scan import.
//!
//! A scan record carries real-world room measurements in meters. Import turns
//! it into a closed four-wall rectangle plus windows and doors distributed
//! round-robin over those walls. Validation happens before anything is built,
//! so a bad record never produces a partial layout.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::geometry::Point;
use crate::layout_store::LayoutState;
use crate::model::{Opening, OpeningKind};
use crate::presets::rectangle;
use roomkit_core::units::{meters_to_inches, meters_to_px};
use roomkit_core::ScanError;
use roomkit_settings::EditorSettings;

/// Number of walls a scan produces.
pub const SCAN_WALL_COUNT: u64 = 4;

/// External measurement record, as produced by the scanning app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub measurements: ScanMeasurements,
}

/// Room measurements in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMeasurements {
    pub width: f64,
    pub depth: f64,
    #[serde(default)]
    pub windows: Vec<ScanOpening>,
    #[serde(default)]
    pub doors: Vec<ScanOpening>,
}

/// A measured door or window, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanOpening {
    pub width: f64,
    pub height: f64,
}

/// Ids of entities that came from a scan. Presentation only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSourced {
    pub walls: Vec<u64>,
    pub openings: Vec<u64>,
}

impl ScanSourced {
    pub fn contains_wall(&self, id: u64) -> bool {
        self.walls.contains(&id)
    }

    pub fn contains_opening(&self, id: u64) -> bool {
        self.openings.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.openings.is_empty()
    }

    pub fn clear(&mut self) {
        self.walls.clear();
        self.openings.clear();
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanImport {
    pub layout: LayoutState,
    pub sourced: ScanSourced,
}

/// Parses a scan record from JSON.
pub fn parse_scan(json: &str) -> Result<ScanRecord, ScanError> {
    Ok(serde_json::from_str(json)?)
}

/// Builds a layout from a scan record.
///
/// Walls are numbered 1..=4 (top, right, bottom, left) from the preset
/// origin. Windows come first, then doors, with ids continuing from 1; the
/// n-th opening of each kind goes to wall `n % 4 + 1`.
pub fn import_scan(record: &ScanRecord, settings: &EditorSettings) -> Result<ScanImport, ScanError> {
    let m = &record.measurements;
    validate("width", m.width)?;
    validate("depth", m.depth)?;
    for (i, w) in m.windows.iter().enumerate() {
        validate(&format!("windows[{}].width", i), w.width)?;
        validate(&format!("windows[{}].height", i), w.height)?;
    }
    for (i, d) in m.doors.iter().enumerate() {
        validate(&format!("doors[{}].width", i), d.width)?;
        validate(&format!("doors[{}].height", i), d.height)?;
    }

    let (ox, oy) = settings.presets.origin;
    let mut layout = rectangle(
        Point::new(ox, oy),
        meters_to_px(m.width).round(),
        meters_to_px(m.depth).round(),
        settings.canvas.wall_thickness_px,
    );

    let openings = &settings.openings;
    let placed = m
        .windows
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            (
                OpeningKind::Window,
                idx,
                s,
                openings.scan_window_position,
                openings.window.height_from_floor,
            )
        })
        .chain(m.doors.iter().enumerate().map(|(idx, s)| {
            (
                OpeningKind::Door,
                idx,
                s,
                openings.scan_door_position,
                openings.door.height_from_floor,
            )
        }));

    for ((kind, idx, scanned, position, height_from_floor), id) in placed.zip(1u64..) {
        layout.openings.push(Opening {
            id,
            kind,
            wall_id: idx as u64 % SCAN_WALL_COUNT + 1,
            position,
            width: meters_to_inches(scanned.width).round(),
            height: meters_to_inches(scanned.height).round(),
            height_from_floor,
        });
    }

    let sourced = ScanSourced {
        walls: layout.walls.iter().map(|w| w.id).collect(),
        openings: layout.openings.iter().map(|o| o.id).collect(),
    };
    info!(
        "Imported scan {:.2}m x {:.2}m: {} walls, {} openings",
        m.width,
        m.depth,
        sourced.walls.len(),
        sourced.openings.len()
    );
    Ok(ScanImport { layout, sourced })
}

/// Parses and imports in one step. Failures are logged and nothing is produced.
pub fn import_scan_json(json: &str, settings: &EditorSettings) -> Result<ScanImport, ScanError> {
    parse_scan(json)
        .and_then(|record| import_scan(&record, settings))
        .inspect_err(|e| warn!("Scan import abandoned: {}", e))
}

fn validate(field: &str, value: f64) -> Result<(), ScanError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScanError::InvalidMeasurement {
            field: field.to_string(),
            value,
        })
    }
}
