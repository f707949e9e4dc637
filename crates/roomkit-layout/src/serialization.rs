//! Serialization and deserialization for layout files.
//!
//! A layout file is the whole editing session on disk: walls, openings,
//! cabinets and the scan markers, as pretty-printed JSON. Unlike templates,
//! a layout file keeps its ids; loading it replaces the canvas.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cabinet_store::validate_cabinets;
use crate::layout_store::LayoutState;
use crate::model::Cabinet;
use crate::scan::ScanSourced;

/// Layout file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub layout: LayoutState,
    #[serde(default)]
    pub cabinets: Vec<Cabinet>,
    #[serde(default)]
    pub scan_sourced: ScanSourced,
}

/// Layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl LayoutFile {
    /// Create an empty layout file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            layout: LayoutState::default(),
            cabinets: Vec::new(),
            scan_sourced: ScanSourced::default(),
        }
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;

        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;

        Ok(())
    }

    /// Load layout from file
    ///
    /// Rejects files from an unknown major version and files whose walls,
    /// openings or cabinets break the model invariants, including openings
    /// whose wall is missing.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;

        let mut file: LayoutFile =
            serde_json::from_str(&content).context("Failed to parse layout file")?;

        if major(&file.version) != major(FILE_FORMAT_VERSION) {
            bail!(
                "Unsupported layout file version {} (expected {})",
                file.version,
                FILE_FORMAT_VERSION
            );
        }
        let dangling = file.layout.dangling_openings();
        if !dangling.is_empty() {
            bail!("Layout file has openings without a wall: {:?}", dangling);
        }
        file.layout
            .validate()
            .context("Layout file has an invalid wall or opening")?;
        validate_cabinets(&file.cabinets).context("Layout file has an invalid cabinet")?;

        file.metadata.modified = Utc::now();

        Ok(file)
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}
