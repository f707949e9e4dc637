//! Presets, scan import, templates and layout files.

use std::path::Path;

use super::{Editor, EditorSession};
use crate::layout_store::LayoutState;
use crate::presets::RoomPreset;
use crate::scan::{import_scan_json, ScanSourced};
use crate::serialization::LayoutFile;
use crate::templates::{instantiate, IdBase, LayoutTemplate, LoadedTemplate, TemplateStore};
use roomkit_core::{Error, LayoutError, LayoutNotice, TemplateError};
use tracing::{info, warn};

impl Editor {
    /// Replaces walls and openings with a preset, as one undo step.
    pub fn apply_preset(&mut self, preset: RoomPreset) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        let state = preset.build(&self.settings.presets, self.settings.canvas.wall_thickness_px);
        self.layout.replace_layout(state);
        self.scan_sourced.clear();
        self.session.reset_wall_draw();
        self.drop_stale_selection();
        info!("Applied {} preset", preset);
        self.notify(LayoutNotice::PresetApplied(preset.to_string()));
        Ok(())
    }

    /// Removes every wall and opening as one undo step.
    ///
    /// Cabinets stay, since the history could not bring them back.
    pub fn clear_room(&mut self) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.layout.clear_all();
        self.scan_sourced.clear();
        self.session.reset_wall_draw();
        self.drop_stale_selection();
        self.notify(LayoutNotice::RoomCleared);
        Ok(())
    }

    /// Replaces walls and openings with an imported scan, as one undo step.
    ///
    /// On failure nothing changes and a notice is emitted.
    pub fn import_scan(&mut self, json: &str) -> Result<&ScanSourced, Error> {
        self.ensure_idle()?;
        let import = match import_scan_json(json, &self.settings) {
            Ok(import) => import,
            Err(e) => {
                self.notify(LayoutNotice::ScanRejected(e.to_string()));
                return Err(e.into());
            }
        };
        self.layout.replace_layout(import.layout);
        self.scan_sourced = import.sourced;
        self.session.reset_wall_draw();
        self.drop_stale_selection();
        self.notify(LayoutNotice::ScanImported {
            walls: self.scan_sourced.walls.len(),
            openings: self.scan_sourced.openings.len(),
        });
        Ok(&self.scan_sourced)
    }

    /// Snapshots the canvas into `store` and returns the new template id.
    pub fn save_template(
        &mut self,
        store: &mut dyn TemplateStore,
        name: &str,
        description: &str,
    ) -> Result<String, TemplateError> {
        let template =
            LayoutTemplate::capture(name, description, self.layout.state(), self.cabinets.all());
        let id = template.id.clone();
        if let Err(e) = store.save(template) {
            self.notify(LayoutNotice::TemplateFailed(e.to_string()));
            return Err(e);
        }
        info!("Saved template '{}' ({})", name, id);
        self.notify(LayoutNotice::TemplateSaved(name.to_string()));
        Ok(id)
    }

    /// Adds a stored template to the canvas with fresh ids.
    ///
    /// Walls and openings land as one undo step; cabinets are added directly.
    pub fn load_template(&mut self, store: &dyn TemplateStore, id: &str) -> Result<LoadedTemplate, Error> {
        self.ensure_idle()?;
        let template = match store.load(id) {
            Ok(t) => t,
            Err(e) => {
                self.notify(LayoutNotice::TemplateFailed(e.to_string()));
                return Err(e.into());
            }
        };
        self.apply_template(&template)
    }

    /// Adds a template to the canvas with fresh ids.
    ///
    /// A template with an invalid entity is rejected whole and nothing changes.
    pub fn apply_template(&mut self, template: &LayoutTemplate) -> Result<LoadedTemplate, Error> {
        self.ensure_idle()?;
        let base = IdBase {
            wall: self.layout.wall_id_floor(),
            opening: self.layout.opening_id_floor(),
            cabinet: self.cabinets.id_floor(),
        };
        let loaded = match instantiate(template, base, &self.settings.openings) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("{}", e);
                self.notify(LayoutNotice::TemplateFailed(e.to_string()));
                return Err(e.into());
            }
        };
        if loaded.dropped_openings > 0 {
            warn!(
                "Template '{}': {} openings dropped",
                template.name, loaded.dropped_openings
            );
        }

        let current = self.layout.state();
        let mut walls = current.walls.clone();
        walls.extend(loaded.walls.iter().cloned());
        let mut openings = current.openings.clone();
        openings.extend(loaded.openings.iter().cloned());
        self.layout.commit(LayoutState::new(walls, openings));
        self.cabinets.insert_loaded(loaded.cabinets.clone());

        info!(
            "Loaded template '{}': {} walls, {} openings, {} cabinets",
            template.name,
            loaded.walls.len(),
            loaded.openings.len(),
            loaded.cabinets.len()
        );
        self.notify(LayoutNotice::TemplateLoaded(template.name.clone()));
        Ok(loaded)
    }

    /// Saves the whole session to a layout file.
    pub fn save_layout_file(&self, name: &str, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut file = LayoutFile::new(name);
        file.layout = self.layout.state().clone();
        file.cabinets = self.cabinets.all().to_vec();
        file.scan_sourced = self.scan_sourced.clone();
        file.save_to_file(&path)?;
        info!("Saved layout to {}", path.as_ref().display());
        Ok(())
    }

    /// Replaces the canvas with a layout file. History starts over.
    pub fn load_layout_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.ensure_idle()?;
        let file = LayoutFile::load_from_file(&path)?;
        self.layout.reset(file.layout);
        self.cabinets.clear();
        self.cabinets.insert_loaded(file.cabinets);
        self.scan_sourced = file.scan_sourced;
        self.session = EditorSession {
            tool: self.session.tool,
            ..Default::default()
        };
        info!("Loaded layout '{}' from {}", file.metadata.name, path.as_ref().display());
        Ok(())
    }
}
