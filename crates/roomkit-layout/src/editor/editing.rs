//! Wall, opening and cabinet commands.
//!
//! Every command is refused with `GestureInProgress` while a gesture runs.

use super::{Editor, Selection};
use crate::catalog::CatalogTemplate;
use crate::geometry::Point;
use crate::model::{Axis, Cabinet, CabinetPatch, OpeningKind, Rotation, WallEndpoint};
use roomkit_core::{LayoutError, LayoutNotice};
use tracing::info;

impl Editor {
    /// Adds a wall with the configured thickness.
    pub fn add_wall(&mut self, start: Point, end: Point) -> Result<u64, LayoutError> {
        self.ensure_idle()?;
        let id = self
            .layout
            .add_wall(start, end, self.settings.canvas.wall_thickness_px);
        self.notify(LayoutNotice::WallAdded(id));
        Ok(id)
    }

    pub fn update_wall_endpoint(
        &mut self,
        wall_id: u64,
        endpoint: WallEndpoint,
        axis: Axis,
        value: f64,
    ) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.layout.update_wall_endpoint(wall_id, endpoint, axis, value)
    }

    /// Removes a wall and its openings.
    pub fn remove_wall(&mut self, wall_id: u64) -> Result<usize, LayoutError> {
        self.ensure_idle()?;
        let removed = self.layout.remove_wall(wall_id)?;
        self.drop_stale_selection();
        self.notify(LayoutNotice::WallRemoved {
            wall_id,
            openings_removed: removed,
        });
        Ok(removed)
    }

    /// Adds an opening with the tool defaults for its kind.
    pub fn add_opening(&mut self, kind: OpeningKind, wall_id: u64, position: f64) -> Result<u64, LayoutError> {
        self.ensure_idle()?;
        let defaults = match kind {
            OpeningKind::Door => self.settings.openings.door,
            OpeningKind::Window => self.settings.openings.window,
        };
        let id = self.layout.add_opening(kind, wall_id, position, defaults)?;
        self.notify(LayoutNotice::OpeningPlaced {
            opening_id: id,
            wall_id,
        });
        Ok(id)
    }

    pub fn update_opening_position(&mut self, opening_id: u64, position: f64) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.layout.update_opening_position(opening_id, position)
    }

    pub fn update_opening_dimensions(
        &mut self,
        opening_id: u64,
        width: f64,
        height: f64,
        height_from_floor: f64,
    ) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.layout
            .update_opening_dimensions(opening_id, width, height, height_from_floor)
    }

    pub fn remove_opening(&mut self, opening_id: u64) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.layout.remove_opening(opening_id)?;
        self.drop_stale_selection();
        Ok(())
    }

    /// Adds a cabinet at its own position with a fresh id.
    pub fn add_cabinet(&mut self, cabinet: Cabinet) -> Result<u64, LayoutError> {
        self.ensure_idle()?;
        let id = self.cabinets.add(cabinet)?;
        self.notify(LayoutNotice::CabinetAdded(id));
        Ok(id)
    }

    /// Drops a catalog cabinet with its top-left corner snapped to the grid.
    pub fn drop_cabinet(&mut self, label: &str, at: Point) -> Result<u64, LayoutError> {
        self.ensure_idle()?;
        let at = at.snapped(self.settings.canvas.grid_size_px);
        let id = self.cabinets.add_from_catalog(label, at)?;
        self.notify(LayoutNotice::CabinetAdded(id));
        Ok(id)
    }

    pub fn catalog_entries(&self) -> &[CatalogTemplate] {
        self.cabinets.catalog().entries()
    }

    pub fn update_cabinet(&mut self, cabinet_id: u64, patch: &CabinetPatch) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.cabinets.update(cabinet_id, patch)
    }

    /// Turns a cabinet a further 90 degrees.
    pub fn turn_cabinet(&mut self, cabinet_id: u64) -> Result<Rotation, LayoutError> {
        self.ensure_idle()?;
        let next = self
            .cabinets
            .get(cabinet_id)
            .ok_or(LayoutError::CabinetNotFound { id: cabinet_id })?
            .rotation
            .turned();
        self.cabinets.set_rotation(cabinet_id, next)?;
        Ok(next)
    }

    pub fn remove_cabinet(&mut self, cabinet_id: u64) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        self.cabinets.remove(cabinet_id)?;
        self.drop_stale_selection();
        self.notify(LayoutNotice::CabinetRemoved(cabinet_id));
        Ok(())
    }

    pub fn select(&mut self, selection: Option<Selection>) {
        self.session.selection = selection;
        self.drop_stale_selection();
    }

    /// Deletes the selected entity. Returns false when nothing is selected.
    pub fn delete_selection(&mut self) -> Result<bool, LayoutError> {
        let Some(selection) = self.session.selection else {
            return Ok(false);
        };
        match selection {
            Selection::Wall(id) => {
                self.remove_wall(id)?;
            }
            Selection::Opening(id) => self.remove_opening(id)?,
            Selection::Cabinet(id) => self.remove_cabinet(id)?,
        }
        info!("Deleted {:?}", selection);
        Ok(true)
    }
}
