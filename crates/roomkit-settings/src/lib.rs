//! RoomKit Settings Crate
//!
//! Handles editor configuration: grid and scale, snapping behaviour,
//! opening defaults, room presets and their persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, EditorSettings, HistorySettings, OpeningDefaults,
    OpeningSettings, PresetSettings, SnapSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
