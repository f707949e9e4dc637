//! Unit conversion utilities
//!
//! The layout lives in a single pixel space at a fixed scale of
//! [`PIXELS_PER_INCH`] pixels per inch. Scan measurements arrive in meters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed canvas scale.
pub const PIXELS_PER_INCH: f64 = 2.0;

/// Inches in one meter.
pub const INCHES_PER_METER: f64 = 39.3701;

/// Display grid cell in pixels (12 inches).
pub const GRID_SIZE_PX: f64 = 24.0;

/// Length unit used by measurements entering the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Canvas pixels
    Pixel,
    /// Inches
    Inch,
    /// Meters
    Meter,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel => write!(f, "px"),
            Self::Inch => write!(f, "in"),
            Self::Meter => write!(f, "m"),
        }
    }
}

/// Inches to canvas pixels.
pub fn inches_to_px(inches: f64) -> f64 {
    inches * PIXELS_PER_INCH
}

/// Canvas pixels to inches.
pub fn px_to_inches(px: f64) -> f64 {
    px / PIXELS_PER_INCH
}

/// Meters to inches.
pub fn meters_to_inches(meters: f64) -> f64 {
    meters * INCHES_PER_METER
}

/// Meters to canvas pixels.
pub fn meters_to_px(meters: f64) -> f64 {
    inches_to_px(meters_to_inches(meters))
}

/// Convert a value between any two units.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let inches = match from {
        LengthUnit::Pixel => px_to_inches(value),
        LengthUnit::Inch => value,
        LengthUnit::Meter => meters_to_inches(value),
    };
    match to {
        LengthUnit::Pixel => inches_to_px(inches),
        LengthUnit::Inch => inches,
        LengthUnit::Meter => inches / INCHES_PER_METER,
    }
}

/// Format a pixel length as feet and inches for display, e.g. `10' 6"`.
pub fn format_feet_inches(px: f64) -> String {
    let total = px_to_inches(px).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{}' {}\"", sign, total / 12, total % 12)
}
