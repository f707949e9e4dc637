//! # RoomKit
//!
//! Room layout and cabinet placement for the vanity designer:
//! - Walls drawn on a snapping grid, doors and windows bound to walls
//! - Cabinets that can be dragged, rotated and priced from a catalog
//! - Undo/redo for walls and openings
//! - Room presets, room-scan import and a template library
//!
//! ## Architecture
//!
//! RoomKit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Errors, unit conversion, layout notices
//! 2. **roomkit-settings** - Editor configuration and persistence
//! 3. **roomkit-layout** - The layout engine and editor model
//! 4. **roomkit** - This crate: re-exports, logging setup and the command line

pub mod cli;

pub use roomkit_core::{
    inches_to_px, meters_to_inches, meters_to_px, px_to_inches, Error, LayoutError, LayoutNotice,
    NoticeDispatcher, NoticeLevel, Result, ScanError, TemplateError,
};
pub use roomkit_layout as layout;
pub use roomkit_layout::{
    Cabinet, CabinetStore, Catalog, CatalogTemplate, Editor, JsonFileTemplateStore, LayoutFile,
    LayoutTemplate, MemoryTemplateStore, Opening, OpeningKind, Point, PricingService, RoomPreset,
    Rotation, Selection, TemplateStore, Tool, Wall,
};
pub use roomkit_settings::{EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, INFO by default
/// - Output on stderr so command output on stdout stays parseable
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
