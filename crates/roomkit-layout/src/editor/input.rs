//! Pointer routing: wall drawing, opening placement and hit testing.

use super::{Editor, Gesture, Selection, Tool, WallDrawState};
use crate::collision::opening_bounds;
use crate::geometry::Point;
use crate::model::OpeningKind;
use roomkit_core::{LayoutError, LayoutNotice};
use tracing::{debug, warn};

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// First wall corner captured at the snapped point
    WallStarted(Point),
    WallAdded(u64),
    OpeningPlaced(u64),
    Selected(Selection),
    /// Select-mode click on empty canvas
    Deselected,
}

impl Editor {
    /// Switches tool. Any captured wall point is discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.session.tool != tool {
            debug!("Tool {:?} -> {:?}", self.session.tool, tool);
        }
        self.session.tool = tool;
        self.session.reset_wall_draw();
    }

    pub fn tool(&self) -> Tool {
        self.session.tool
    }

    /// Pointer pressed at `p` in canvas pixels.
    pub fn pointer_down(&mut self, p: Point) -> Result<PointerOutcome, LayoutError> {
        self.ensure_idle()?;
        match self.session.tool {
            Tool::Wall => self.wall_click(p),
            Tool::Door => self
                .place_opening(OpeningKind::Door, p)
                .map(PointerOutcome::OpeningPlaced),
            Tool::Window => self
                .place_opening(OpeningKind::Window, p)
                .map(PointerOutcome::OpeningPlaced),
            Tool::Select => self.select_at(p),
        }
    }

    /// Pointer moved to `p`. Routes to the active gesture, or updates the wall preview.
    pub fn pointer_move(&mut self, p: Point) -> Result<(), LayoutError> {
        match self.session.gesture {
            Some(Gesture::CabinetDrag { .. }) => self.drag_cabinet(p),
            Some(Gesture::CabinetRotate { .. }) => self.rotate_cabinet(p).map(|_| ()),
            Some(Gesture::WallHandle { .. }) => self.drag_wall_handle(p),
            Some(Gesture::OpeningHandle { .. }) => self.drag_opening_handle(p),
            None => {
                if self.session.captured_point().is_some() {
                    self.session.wall_preview = Some(p.snapped(self.settings.canvas.grid_size_px));
                }
                Ok(())
            }
        }
    }

    /// Pointer released. Ends the active gesture, if any.
    pub fn pointer_up(&mut self) -> Result<Option<Gesture>, LayoutError> {
        self.end_gesture()
    }

    fn wall_click(&mut self, p: Point) -> Result<PointerOutcome, LayoutError> {
        let snapped = p.snapped(self.settings.canvas.grid_size_px);
        match self.session.wall_draw {
            WallDrawState::Idle => {
                self.session.wall_draw = WallDrawState::PointCaptured(snapped);
                self.session.wall_preview = Some(snapped);
                Ok(PointerOutcome::WallStarted(snapped))
            }
            WallDrawState::PointCaptured(start) => {
                self.session.reset_wall_draw();
                self.add_wall(start, snapped).map(PointerOutcome::WallAdded)
            }
        }
    }

    /// Places an opening on the nearest wall within the placement threshold.
    ///
    /// A click with no wall in range is rejected and a notice is emitted.
    pub fn place_opening(&mut self, kind: OpeningKind, p: Point) -> Result<u64, LayoutError> {
        let threshold = self.settings.snapping.opening_distance_px;
        let Some(wall) = self.layout.state().nearest_wall(p, threshold) else {
            let err = LayoutError::NoWallNearby {
                x: p.x,
                y: p.y,
                threshold,
            };
            warn!("{} placement rejected: {}", kind, err);
            self.notify(LayoutNotice::OpeningRejected(err.to_string()));
            return Err(err);
        };
        let (wall_id, position) = (wall.id, wall.position_of(p));
        self.add_opening(kind, wall_id, position)
    }

    /// Topmost entity under `p`: cabinets, then openings, then walls.
    pub fn hit_test(&self, p: Point) -> Option<Selection> {
        let state = self.layout.state();
        if let Some(c) = self
            .cabinets
            .all()
            .iter()
            .rev()
            .find(|c| c.footprint().contains_point(p))
        {
            return Some(Selection::Cabinet(c.id));
        }
        if let Some(o) = state.openings.iter().rev().find(|o| {
            opening_bounds(o, &state.walls).is_some_and(|b| b.contains_point(p))
        }) {
            return Some(Selection::Opening(o.id));
        }
        let tolerance = self.settings.snapping.hit_tolerance_px;
        state
            .walls
            .iter()
            .rev()
            .find(|w| w.distance_to(p) <= w.thickness / 2.0 + tolerance)
            .map(|w| Selection::Wall(w.id))
    }

    fn select_at(&mut self, p: Point) -> Result<PointerOutcome, LayoutError> {
        let hit = self.hit_test(p);
        self.session.selection = hit;
        match hit {
            Some(Selection::Cabinet(id)) => {
                self.begin_cabinet_drag(id, p)?;
                Ok(PointerOutcome::Selected(Selection::Cabinet(id)))
            }
            Some(selection) => Ok(PointerOutcome::Selected(selection)),
            None => Ok(PointerOutcome::Deselected),
        }
    }
}
