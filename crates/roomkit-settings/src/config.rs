//! Configuration and settings management for RoomKit
//!
//! Provides editor configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (scale, grid, wall thickness)
//! - Snapping settings (angles, opening placement distance)
//! - History settings (undo depth)
//! - Opening defaults per tool (door, window)
//! - Room presets (straight run, closed room)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use roomkit_core::units::GRID_SIZE_PX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas settings
///
/// The inch-to-pixel scale is not configurable: every conversion uses
/// `roomkit_core::units::PIXELS_PER_INCH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Grid cell size in pixels
    pub grid_size_px: f64,
    /// Thickness of newly drawn walls in pixels
    pub wall_thickness_px: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            grid_size_px: GRID_SIZE_PX,
            wall_thickness_px: 9.0,
        }
    }
}

/// Snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// Candidate angles in degrees for magnetic rotation snapping
    pub angle_candidates: Vec<f64>,
    /// Maximum distance in degrees for a rotation to snap
    pub angle_threshold_deg: f64,
    /// Maximum perpendicular distance in pixels between a click and a wall
    /// for the door/window tools
    pub opening_distance_px: f64,
    /// Extra pixels around a wall's half thickness accepted by hit testing
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance_px: f64,
}

fn default_hit_tolerance() -> f64 {
    4.0
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            angle_candidates: (0..8).map(|i| i as f64 * 45.0).collect(),
            angle_threshold_deg: 10.0,
            opening_distance_px: 20.0,
            hit_tolerance_px: default_hit_tolerance(),
        }
    }
}

/// History settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of undo steps kept
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

/// Default dimensions for a newly placed opening, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningDefaults {
    /// Opening width
    pub width: f64,
    /// Opening height
    pub height: f64,
    /// Distance from the floor to the bottom of the opening
    pub height_from_floor: f64,
}

/// Opening defaults per tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningSettings {
    /// Door tool defaults
    pub door: OpeningDefaults,
    /// Window tool defaults
    pub window: OpeningDefaults,
    /// Parametric position of scanned doors along their wall
    pub scan_door_position: f64,
    /// Parametric position of scanned windows along their wall
    pub scan_window_position: f64,
}

impl Default for OpeningSettings {
    fn default() -> Self {
        Self {
            door: OpeningDefaults {
                width: 30.0,
                height: 84.0,
                height_from_floor: 0.0,
            },
            window: OpeningDefaults {
                width: 36.0,
                height: 36.0,
                height_from_floor: 42.0,
            },
            scan_door_position: 0.3,
            scan_window_position: 0.5,
        }
    }
}

/// Room preset settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetSettings {
    /// Top-left anchor of generated rooms, in pixels
    pub origin: (f64, f64),
    /// Length of the straight preset wall in pixels
    pub straight_length_px: f64,
    /// Width of L, U and closed rooms in pixels
    pub room_width_px: f64,
    /// Depth of L, U and closed rooms in pixels
    pub room_depth_px: f64,
}

impl Default for PresetSettings {
    fn default() -> Self {
        Self {
            origin: (120.0, 120.0),
            straight_length_px: 240.0,
            room_width_px: 240.0,
            room_depth_px: 192.0,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorSettings {
    /// Canvas settings
    #[serde(default)]
    pub canvas: CanvasSettings,
    /// Snapping settings
    #[serde(default)]
    pub snapping: SnapSettings,
    /// History settings
    #[serde(default)]
    pub history: HistorySettings,
    /// Opening defaults
    #[serde(default)]
    pub openings: OpeningSettings,
    /// Room presets
    #[serde(default)]
    pub presets: PresetSettings,
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        settings.validate()?;
        tracing::info!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    /// Load settings from `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas.grid_size_px", self.canvas.grid_size_px)?;
        positive("canvas.wall_thickness_px", self.canvas.wall_thickness_px)?;

        if self.snapping.angle_candidates.is_empty() {
            return Err(out_of_range("snapping.angle_candidates", "[]"));
        }
        if !(0.0..=180.0).contains(&self.snapping.angle_threshold_deg) {
            return Err(out_of_range(
                "snapping.angle_threshold_deg",
                self.snapping.angle_threshold_deg,
            ));
        }
        positive("snapping.opening_distance_px", self.snapping.opening_distance_px)?;

        if self.history.max_depth == 0 {
            return Err(out_of_range("history.max_depth", 0));
        }

        for (name, d) in [("door", &self.openings.door), ("window", &self.openings.window)] {
            positive(&format!("openings.{}.width", name), d.width)?;
            positive(&format!("openings.{}.height", name), d.height)?;
            if d.height_from_floor < 0.0 {
                return Err(out_of_range(
                    &format!("openings.{}.height_from_floor", name),
                    d.height_from_floor,
                ));
            }
        }
        for (key, pos) in [
            ("openings.scan_door_position", self.openings.scan_door_position),
            ("openings.scan_window_position", self.openings.scan_window_position),
        ] {
            if !(0.0..=1.0).contains(&pos) {
                return Err(out_of_range(key, pos));
            }
        }

        positive("presets.straight_length_px", self.presets.straight_length_px)?;
        positive("presets.room_width_px", self.presets.room_width_px)?;
        positive("presets.room_depth_px", self.presets.room_depth_px)?;

        Ok(())
    }
}

/// Platform-specific location of the editor settings file
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("roomkit").join("editor.toml"))
        .ok_or(SettingsError::NoConfigDir)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
