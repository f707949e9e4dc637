//! # Layout Template Module
//!
//! Named snapshots of a full layout (walls, openings and cabinets) and the
//! storage they live in.
//!
//! Features:
//! - Capture the live canvas as a template with metadata
//! - Instantiate a template onto a non-empty canvas with fresh ids
//! - Backfill legacy openings that predate height fields
//! - In-memory and JSON-file template stores with search
//!
//! Instantiation never reuses ids: every loaded entity is numbered above the
//! canvas's current id floor, and opening wall references are remapped through
//! the same table so they keep pointing at the right wall.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cabinet_store::validate_cabinet;
use crate::ids::check_ids;
use crate::layout_store::{validate_opening, validate_wall, LayoutState};
use crate::model::{Cabinet, Opening, OpeningKind, Wall};
use roomkit_core::{LayoutError, TemplateError};
use roomkit_settings::OpeningSettings;

/// Opening as stored in a template.
///
/// Older templates were saved before openings carried a height and sill
/// height, so both are optional here and filled in on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    pub wall_id: u64,
    pub position: f64,
    pub width: f64,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default, alias = "yPosition")]
    pub height_from_floor: Option<f64>,
}

impl From<&Opening> for OpeningRecord {
    fn from(o: &Opening) -> Self {
        Self {
            id: o.id,
            kind: o.kind,
            wall_id: o.wall_id,
            position: o.position,
            width: o.width,
            height: Some(o.height),
            height_from_floor: Some(o.height_from_floor),
        }
    }
}

/// Layout template with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTemplate {
    /// Unique template identifier (uuid v4)
    pub id: String,
    /// Template name
    pub name: String,
    /// Template description
    #[serde(default)]
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub openings: Vec<OpeningRecord>,
    #[serde(default)]
    pub cabinets: Vec<Cabinet>,
}

impl LayoutTemplate {
    /// Deep snapshot of the given layout and cabinets.
    pub fn capture(
        name: impl Into<String>,
        description: impl Into<String>,
        layout: &LayoutState,
        cabinets: &[Cabinet],
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
            walls: layout.walls.clone(),
            openings: layout.openings.iter().map(OpeningRecord::from).collect(),
            cabinets: cabinets.to_vec(),
        }
    }

    /// Matches search query against name and description
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.description.to_lowercase().contains(&q)
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            walls: self.walls.len(),
            openings: self.openings.len(),
            cabinets: self.cabinets.len(),
        }
    }
}

/// Listing entry for a stored template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub walls: usize,
    pub openings: usize,
    pub cabinets: usize,
}

/// Id floors of the canvas a template is loaded onto.
///
/// Loaded entity `i` of a collection receives `floor + i + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdBase {
    pub wall: u64,
    pub opening: u64,
    pub cabinet: u64,
}

/// Template contents renumbered for a specific canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTemplate {
    pub walls: Vec<Wall>,
    pub openings: Vec<Opening>,
    pub cabinets: Vec<Cabinet>,
    /// Openings dropped because their wall is not part of the template.
    pub dropped_openings: usize,
}

/// Renumbers a template above `base`, remaps opening wall references and
/// backfills missing opening heights from the tool defaults.
///
/// The whole template is rejected as malformed if any wall, opening or
/// cabinet breaks the model invariants, or if two walls share an id.
pub fn instantiate(
    template: &LayoutTemplate,
    base: IdBase,
    defaults: &OpeningSettings,
) -> Result<LoadedTemplate, TemplateError> {
    check_ids("wall", template.walls.iter().map(|w| w.id))
        .map_err(|e| malformed(&template.name, e))?;

    let mut wall_map: HashMap<u64, u64> = HashMap::new();
    let mut walls = Vec::with_capacity(template.walls.len());
    for (w, i) in template.walls.iter().zip(1u64..) {
        validate_wall(w).map_err(|e| malformed(&template.name, e))?;
        let id = base.wall.saturating_add(i);
        wall_map.insert(w.id, id);
        walls.push(Wall { id, ..w.clone() });
    }

    let mut dropped = 0;
    let mut openings = Vec::with_capacity(template.openings.len());
    for (record, i) in template.openings.iter().zip(1u64..) {
        let Some(&wall_id) = wall_map.get(&record.wall_id) else {
            warn!(
                "Template '{}': opening {} references missing wall {}, dropped",
                template.name, record.id, record.wall_id
            );
            dropped += 1;
            continue;
        };
        let fallback = match record.kind {
            OpeningKind::Door => defaults.door,
            OpeningKind::Window => defaults.window,
        };
        let opening = Opening {
            id: base.opening.saturating_add(i),
            kind: record.kind,
            wall_id,
            position: Opening::clamp_position(record.position),
            width: record.width,
            height: record.height.unwrap_or(fallback.height),
            height_from_floor: record.height_from_floor.unwrap_or(fallback.height_from_floor),
        };
        validate_opening(&opening).map_err(|e| malformed(&template.name, e))?;
        openings.push(opening);
    }

    let mut cabinets = Vec::with_capacity(template.cabinets.len());
    for (c, i) in template.cabinets.iter().zip(1u64..) {
        validate_cabinet(c).map_err(|e| malformed(&template.name, e))?;
        cabinets.push(Cabinet {
            id: base.cabinet.saturating_add(i),
            ..c.clone()
        });
    }

    Ok(LoadedTemplate {
        walls,
        openings,
        cabinets,
        dropped_openings: dropped,
    })
}

fn malformed(name: &str, err: LayoutError) -> TemplateError {
    TemplateError::Malformed {
        reason: format!("template '{}': {}", name, err),
    }
}

/// Persistence collaborator for templates.
pub trait TemplateStore {
    fn save(&mut self, template: LayoutTemplate) -> Result<(), TemplateError>;
    fn load(&self, id: &str) -> Result<LayoutTemplate, TemplateError>;
    fn delete(&mut self, id: &str) -> Result<LayoutTemplate, TemplateError>;
    /// Stores a copy under a new id and returns it.
    fn duplicate(&mut self, id: &str) -> Result<LayoutTemplate, TemplateError>;
    /// All templates, newest first.
    fn list(&self) -> Vec<TemplateSummary>;
}

/// In-memory template library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, LayoutTemplate>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates whose name or description contains `query`, newest first
    pub fn search(&self, query: &str) -> Vec<&LayoutTemplate> {
        let mut found: Vec<&LayoutTemplate> = self
            .templates
            .values()
            .filter(|t| t.matches_search(query))
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }

    pub fn get(&self, id: &str) -> Option<&LayoutTemplate> {
        self.templates.get(id)
    }

    pub fn count(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> impl Iterator<Item = &LayoutTemplate> {
        self.templates.values()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn save(&mut self, template: LayoutTemplate) -> Result<(), TemplateError> {
        if self.templates.contains_key(&template.id) {
            return Err(TemplateError::DuplicateId { id: template.id });
        }
        debug!("Stored template '{}' ({})", template.name, template.id);
        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<LayoutTemplate, TemplateError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() })
    }

    fn delete(&mut self, id: &str) -> Result<LayoutTemplate, TemplateError> {
        self.templates
            .remove(id)
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() })
    }

    fn duplicate(&mut self, id: &str) -> Result<LayoutTemplate, TemplateError> {
        let source = self.load(id)?;
        let copy = LayoutTemplate {
            id: Uuid::new_v4().to_string(),
            name: format!("{} (copy)", source.name),
            created_at: Utc::now(),
            ..source
        };
        self.save(copy.clone())?;
        Ok(copy)
    }

    fn list(&self) -> Vec<TemplateSummary> {
        let mut all: Vec<TemplateSummary> =
            self.templates.values().map(LayoutTemplate::summary).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
        all
    }
}

/// Template library persisted as one JSON file, written after every mutation
#[derive(Debug)]
pub struct JsonFileTemplateStore {
    library: MemoryTemplateStore,
    path: PathBuf,
}

impl JsonFileTemplateStore {
    /// Opens the library at `path`. A missing file is an empty library.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TemplateError> {
        let path = path.into();
        let library = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            MemoryTemplateStore::new()
        };
        info!(
            "Opened template library {} ({} templates)",
            path.display(),
            library.count()
        );
        Ok(Self { library, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &MemoryTemplateStore {
        &self.library
    }

    pub fn search(&self, query: &str) -> Vec<&LayoutTemplate> {
        self.library.search(query)
    }

    /// Reload library from disk
    pub fn reload(&mut self) -> Result<(), TemplateError> {
        *self = Self::open(self.path.clone())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), TemplateError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.library)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TemplateStore for JsonFileTemplateStore {
    fn save(&mut self, template: LayoutTemplate) -> Result<(), TemplateError> {
        self.library.save(template)?;
        self.flush()
    }

    fn load(&self, id: &str) -> Result<LayoutTemplate, TemplateError> {
        self.library.load(id)
    }

    fn delete(&mut self, id: &str) -> Result<LayoutTemplate, TemplateError> {
        let removed = self.library.delete(id)?;
        self.flush()?;
        Ok(removed)
    }

    fn duplicate(&mut self, id: &str) -> Result<LayoutTemplate, TemplateError> {
        let copy = self.library.duplicate(id)?;
        self.flush()?;
        Ok(copy)
    }

    fn list(&self) -> Vec<TemplateSummary> {
        self.library.list()
    }
}
