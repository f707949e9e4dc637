//! Walls and openings as one atomic, historied value.
//!
//! [`LayoutState`] is an immutable value: every operation returns a new state.
//! [`LayoutStore`] wraps it in a [`History`] and owns the id allocators, so
//! each committed mutation is exactly one undo step covering walls and
//! openings together.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::geometry::Point;
use crate::history::History;
use crate::ids::{check_ids, IdAllocator};
use crate::model::{Axis, Opening, OpeningKind, Wall, WallEndpoint};
use roomkit_core::LayoutError;
use roomkit_settings::OpeningDefaults;

/// The `{ walls, openings }` pair tracked by undo/redo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub walls: Vec<Wall>,
    pub openings: Vec<Opening>,
}

impl LayoutState {
    pub fn new(walls: Vec<Wall>, openings: Vec<Opening>) -> Self {
        Self { walls, openings }
    }

    pub fn wall(&self, id: u64) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn opening(&self, id: u64) -> Option<&Opening> {
        self.openings.iter().find(|o| o.id == id)
    }

    /// Openings hosted by `wall_id`, in insertion order.
    pub fn openings_on(&self, wall_id: u64) -> impl Iterator<Item = &Opening> {
        self.openings.iter().filter(move |o| o.wall_id == wall_id)
    }

    pub fn max_wall_id(&self) -> Option<u64> {
        self.walls.iter().map(|w| w.id).max()
    }

    pub fn max_opening_id(&self) -> Option<u64> {
        self.openings.iter().map(|o| o.id).max()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.openings.is_empty()
    }

    /// Ids of openings whose host wall does not exist.
    pub fn dangling_openings(&self) -> Vec<u64> {
        self.openings
            .iter()
            .filter(|o| self.wall(o.wall_id).is_none())
            .map(|o| o.id)
            .collect()
    }

    /// Nearest wall whose perpendicular distance to `p` is within `threshold`.
    pub fn nearest_wall(&self, p: Point, threshold: f64) -> Option<&Wall> {
        self.walls
            .iter()
            .map(|w| (w, w.distance_to(p)))
            .filter(|&(_, d)| d <= threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(w, _)| w)
    }

    /// Checks every entity against the model invariants: finite geometry,
    /// positive sizes, positions in `[0, 1]`, unique ids and live host walls.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_ids("wall", self.walls.iter().map(|w| w.id))?;
        check_ids("opening", self.openings.iter().map(|o| o.id))?;
        for wall in &self.walls {
            validate_wall(wall)?;
        }
        for opening in &self.openings {
            validate_opening(opening)?;
            if self.wall(opening.wall_id).is_none() {
                return Err(LayoutError::WallNotFound {
                    id: opening.wall_id,
                });
            }
        }
        Ok(())
    }

    pub fn with_wall(&self, wall: Wall) -> Self {
        let mut walls = self.walls.clone();
        walls.push(wall);
        Self::new(walls, self.openings.clone())
    }

    /// Replaces one coordinate of one endpoint of a wall.
    pub fn with_wall_endpoint(
        &self,
        wall_id: u64,
        endpoint: WallEndpoint,
        axis: Axis,
        value: f64,
    ) -> Result<Self, LayoutError> {
        self.map_wall(wall_id, |w| w.with_endpoint_axis(endpoint, axis, value))
    }

    /// Moves one endpoint of a wall to `p`.
    pub fn with_wall_endpoint_at(
        &self,
        wall_id: u64,
        endpoint: WallEndpoint,
        p: Point,
    ) -> Result<Self, LayoutError> {
        self.map_wall(wall_id, |w| {
            w.with_endpoint_axis(endpoint, Axis::X, p.x)
                .with_endpoint_axis(endpoint, Axis::Y, p.y)
        })
    }

    /// Removes a wall and every opening bound to it.
    ///
    /// Returns the new state and the number of openings removed.
    pub fn without_wall(&self, wall_id: u64) -> Result<(Self, usize), LayoutError> {
        if self.wall(wall_id).is_none() {
            return Err(LayoutError::WallNotFound { id: wall_id });
        }
        let walls = self
            .walls
            .iter()
            .filter(|w| w.id != wall_id)
            .cloned()
            .collect();
        let openings: Vec<Opening> = self
            .openings
            .iter()
            .filter(|o| o.wall_id != wall_id)
            .cloned()
            .collect();
        let removed = self.openings.len() - openings.len();
        Ok((Self::new(walls, openings), removed))
    }

    /// Adds an opening. The host wall must exist; the position is clamped.
    pub fn with_opening(&self, mut opening: Opening) -> Result<Self, LayoutError> {
        if self.wall(opening.wall_id).is_none() {
            return Err(LayoutError::WallNotFound {
                id: opening.wall_id,
            });
        }
        validate_dimension("width", opening.width)?;
        validate_dimension("height", opening.height)?;
        opening.position = Opening::clamp_position(opening.position);
        let mut openings = self.openings.clone();
        openings.push(opening);
        Ok(Self::new(self.walls.clone(), openings))
    }

    /// Moves an opening along its wall. The stored position is always in `[0, 1]`.
    pub fn with_opening_position(&self, opening_id: u64, position: f64) -> Result<Self, LayoutError> {
        let position = Opening::clamp_position(position);
        self.map_opening(opening_id, |o| Opening {
            position,
            ..o.clone()
        })
    }

    /// Changes an opening's size and sill height, all in inches.
    pub fn with_opening_dimensions(
        &self,
        opening_id: u64,
        width: f64,
        height: f64,
        height_from_floor: f64,
    ) -> Result<Self, LayoutError> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        validate_sill(height_from_floor)?;
        self.map_opening(opening_id, |o| Opening {
            width,
            height,
            height_from_floor,
            ..o.clone()
        })
    }

    pub fn without_opening(&self, opening_id: u64) -> Result<Self, LayoutError> {
        if self.opening(opening_id).is_none() {
            return Err(LayoutError::OpeningNotFound { id: opening_id });
        }
        let openings = self
            .openings
            .iter()
            .filter(|o| o.id != opening_id)
            .cloned()
            .collect();
        Ok(Self::new(self.walls.clone(), openings))
    }

    fn map_wall<F>(&self, wall_id: u64, f: F) -> Result<Self, LayoutError>
    where
        F: Fn(&Wall) -> Wall,
    {
        if self.wall(wall_id).is_none() {
            return Err(LayoutError::WallNotFound { id: wall_id });
        }
        let walls = self
            .walls
            .iter()
            .map(|w| if w.id == wall_id { f(w) } else { w.clone() })
            .collect();
        Ok(Self::new(walls, self.openings.clone()))
    }

    fn map_opening<F>(&self, opening_id: u64, f: F) -> Result<Self, LayoutError>
    where
        F: Fn(&Opening) -> Opening,
    {
        if self.opening(opening_id).is_none() {
            return Err(LayoutError::OpeningNotFound { id: opening_id });
        }
        let openings = self
            .openings
            .iter()
            .map(|o| if o.id == opening_id { f(o) } else { o.clone() })
            .collect();
        Ok(Self::new(self.walls.clone(), openings))
    }
}

pub(crate) fn validate_dimension(field: &str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension {
            field: field.to_string(),
            value,
        })
    }
}

fn validate_sill(height_from_floor: f64) -> Result<(), LayoutError> {
    if height_from_floor.is_finite() && height_from_floor >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension {
            field: "height_from_floor".to_string(),
            value: height_from_floor,
        })
    }
}

fn validate_coordinate(field: &str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension {
            field: field.to_string(),
            value,
        })
    }
}

pub(crate) fn validate_wall(wall: &Wall) -> Result<(), LayoutError> {
    validate_coordinate("start.x", wall.start.x)?;
    validate_coordinate("start.y", wall.start.y)?;
    validate_coordinate("end.x", wall.end.x)?;
    validate_coordinate("end.y", wall.end.y)?;
    validate_dimension("thickness", wall.thickness)
}

pub(crate) fn validate_opening(opening: &Opening) -> Result<(), LayoutError> {
    validate_dimension("width", opening.width)?;
    validate_dimension("height", opening.height)?;
    validate_sill(opening.height_from_floor)?;
    if (0.0..=1.0).contains(&opening.position) {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension {
            field: "position".to_string(),
            value: opening.position,
        })
    }
}

pub(crate) fn validate_point(field: &str, p: Point) -> Result<(), LayoutError> {
    validate_coordinate(&format!("{}.x", field), p.x)?;
    validate_coordinate(&format!("{}.y", field), p.y)
}

/// Historied owner of the layout.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    history: History<LayoutState>,
    wall_ids: IdAllocator,
    opening_ids: IdAllocator,
}

impl LayoutStore {
    pub fn new(max_depth: usize) -> Self {
        Self {
            history: History::with_depth(LayoutState::default(), max_depth),
            wall_ids: IdAllocator::new(),
            opening_ids: IdAllocator::new(),
        }
    }

    pub fn state(&self) -> &LayoutState {
        self.history.state()
    }

    pub fn history(&self) -> &History<LayoutState> {
        &self.history
    }

    /// Records `next` as one undo step.
    pub fn commit(&mut self, next: LayoutState) {
        self.observe_ids(&next);
        self.history.set_state(next);
    }

    /// Installs `next` without an undo step (intermediate gesture frames).
    pub fn replace_present(&mut self, next: LayoutState) {
        self.observe_ids(&next);
        self.history.replace_present(next);
    }

    /// Abandons the latest undo step without making it redoable.
    pub fn rollback(&mut self) -> bool {
        self.history.rollback()
    }

    /// Replaces the whole layout as a single undo step.
    pub fn replace_layout(&mut self, next: LayoutState) {
        debug!(
            "Replacing layout: {} walls, {} openings",
            next.walls.len(),
            next.openings.len()
        );
        self.commit(next);
    }

    /// Replaces the whole layout and drops all history.
    pub fn reset(&mut self, state: LayoutState) {
        self.observe_ids(&state);
        self.history.reset(state);
    }

    /// Id floor above which loaded walls must be numbered.
    pub fn wall_id_floor(&self) -> u64 {
        self.wall_ids.floor(self.state().max_wall_id())
    }

    /// Id floor above which loaded openings must be numbered.
    pub fn opening_id_floor(&self) -> u64 {
        self.opening_ids.floor(self.state().max_opening_id())
    }

    pub fn add_wall(&mut self, start: Point, end: Point, thickness: f64) -> u64 {
        let id = self.wall_ids.allocate(self.state().max_wall_id());
        let next = self.state().with_wall(Wall::new(id, start, end, thickness));
        self.history.set_state(next);
        debug!("Added wall {} from {:?} to {:?}", id, start, end);
        id
    }

    pub fn update_wall_endpoint(
        &mut self,
        wall_id: u64,
        endpoint: WallEndpoint,
        axis: Axis,
        value: f64,
    ) -> Result<(), LayoutError> {
        let next = self
            .state()
            .with_wall_endpoint(wall_id, endpoint, axis, value)?;
        self.history.set_state(next);
        Ok(())
    }

    /// Removes a wall and cascades to its openings. Returns the number of
    /// openings removed.
    pub fn remove_wall(&mut self, wall_id: u64) -> Result<usize, LayoutError> {
        let (next, removed) = self.state().without_wall(wall_id)?;
        self.history.set_state(next);
        info!("Removed wall {} and {} openings", wall_id, removed);
        Ok(removed)
    }

    pub fn add_opening(
        &mut self,
        kind: OpeningKind,
        wall_id: u64,
        position: f64,
        defaults: OpeningDefaults,
    ) -> Result<u64, LayoutError> {
        let mut allocator = self.opening_ids;
        let id = allocator.allocate(self.state().max_opening_id());
        let next = self.state().with_opening(Opening {
            id,
            kind,
            wall_id,
            position,
            width: defaults.width,
            height: defaults.height,
            height_from_floor: defaults.height_from_floor,
        })?;
        self.opening_ids = allocator;
        self.history.set_state(next);
        debug!("Added {} {} on wall {}", kind, id, wall_id);
        Ok(id)
    }

    pub fn update_opening_position(&mut self, opening_id: u64, position: f64) -> Result<(), LayoutError> {
        let next = self.state().with_opening_position(opening_id, position)?;
        self.history.set_state(next);
        Ok(())
    }

    pub fn update_opening_dimensions(
        &mut self,
        opening_id: u64,
        width: f64,
        height: f64,
        height_from_floor: f64,
    ) -> Result<(), LayoutError> {
        let next = self
            .state()
            .with_opening_dimensions(opening_id, width, height, height_from_floor)?;
        self.history.set_state(next);
        Ok(())
    }

    pub fn remove_opening(&mut self, opening_id: u64) -> Result<(), LayoutError> {
        let next = self.state().without_opening(opening_id)?;
        self.history.set_state(next);
        Ok(())
    }

    /// Removes all walls and openings as one undo step. No-op when already empty.
    pub fn clear_all(&mut self) {
        if self.state().is_empty() {
            return;
        }
        self.history.set_state(LayoutState::default());
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            debug!("Undo: {} steps left", self.history.undo_depth());
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            debug!("Redo: {} steps left", self.history.redo_depth());
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn observe_ids(&mut self, state: &LayoutState) {
        if let Some(id) = state.max_wall_id() {
            self.wall_ids.observe(id);
        }
        if let Some(id) = state.max_opening_id() {
            self.opening_ids.observe(id);
        }
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(crate::history::DEFAULT_MAX_DEPTH)
    }
}
