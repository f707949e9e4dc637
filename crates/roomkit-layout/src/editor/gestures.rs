//! Drag and rotate gestures.
//!
//! At most one gesture is active. Cabinet drags write through to the cabinet
//! store on every move. Rotations keep a free live angle and only write the
//! quantized rotation on end. Handle drags record one undo step on their
//! first move and replace the present afterwards.

use super::{Editor, Gesture};
use crate::geometry::{normalize_angle, quantize_rotation, snap_angle, Point};
use crate::model::{Rotation, WallEndpoint};
use roomkit_core::LayoutError;
use tracing::debug;

impl Editor {
    /// Starts dragging a cabinet grabbed at `pointer`.
    pub fn begin_cabinet_drag(&mut self, cabinet_id: u64, pointer: Point) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        let origin = self
            .cabinets
            .get(cabinet_id)
            .ok_or(LayoutError::CabinetNotFound { id: cabinet_id })?
            .origin();
        self.session.gesture = Some(Gesture::CabinetDrag {
            cabinet_id,
            offset: pointer - origin,
            origin,
        });
        Ok(())
    }

    /// Moves the dragged cabinet so its origin is `pointer - offset`, grid-snapped.
    pub(crate) fn drag_cabinet(&mut self, pointer: Point) -> Result<(), LayoutError> {
        let Some(Gesture::CabinetDrag {
            cabinet_id, offset, ..
        }) = self.session.gesture
        else {
            return Ok(());
        };
        let target = (pointer - offset).snapped(self.settings.canvas.grid_size_px);
        self.cabinets.move_to(cabinet_id, target)
    }

    /// Starts rotating a cabinet around its center.
    pub fn begin_cabinet_rotate(&mut self, cabinet_id: u64, pointer: Point) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        let cabinet = self
            .cabinets
            .get(cabinet_id)
            .ok_or(LayoutError::CabinetNotFound { id: cabinet_id })?;
        let current = cabinet.rotation.degrees();
        self.session.gesture = Some(Gesture::CabinetRotate {
            cabinet_id,
            start_angle: cabinet.center().angle_to(&pointer) - current,
            current_rotation: current,
            original: cabinet.rotation,
        });
        Ok(())
    }

    /// Updates the live rotation angle and returns it.
    pub(crate) fn rotate_cabinet(&mut self, pointer: Point) -> Result<f64, LayoutError> {
        let Some(Gesture::CabinetRotate {
            cabinet_id,
            start_angle,
            ref mut current_rotation,
            ..
        }) = self.session.gesture
        else {
            return Ok(0.0);
        };
        let center = self
            .cabinets
            .get(cabinet_id)
            .ok_or(LayoutError::CabinetNotFound { id: cabinet_id })?
            .center();
        let raw = normalize_angle(center.angle_to(&pointer) - start_angle);
        let snapping = &self.settings.snapping;
        *current_rotation = snap_angle(raw, &snapping.angle_candidates, snapping.angle_threshold_deg);
        Ok(*current_rotation)
    }

    /// Live angle of the active rotate gesture.
    pub fn live_rotation(&self) -> Option<f64> {
        match self.session.gesture {
            Some(Gesture::CabinetRotate {
                current_rotation, ..
            }) => Some(current_rotation),
            _ => None,
        }
    }

    /// Starts dragging one endpoint of a wall.
    pub fn begin_wall_handle_drag(&mut self, wall_id: u64, endpoint: WallEndpoint) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        if self.layout.state().wall(wall_id).is_none() {
            return Err(LayoutError::WallNotFound { id: wall_id });
        }
        self.session.drag_trail.clear();
        self.session.gesture = Some(Gesture::WallHandle {
            wall_id,
            endpoint,
            committed: false,
        });
        Ok(())
    }

    pub(crate) fn drag_wall_handle(&mut self, pointer: Point) -> Result<(), LayoutError> {
        let Some(Gesture::WallHandle {
            wall_id,
            endpoint,
            ref mut committed,
        }) = self.session.gesture
        else {
            return Ok(());
        };
        let snapped = pointer.snapped(self.settings.canvas.grid_size_px);
        let next = self
            .layout
            .state()
            .with_wall_endpoint_at(wall_id, endpoint, snapped)?;
        if *committed {
            self.layout.replace_present(next);
        } else {
            self.layout.commit(next);
            *committed = true;
        }
        if self.session.drag_trail.last() != Some(&snapped) {
            self.session.drag_trail.push(snapped);
        }
        Ok(())
    }

    /// Starts sliding an opening along its wall.
    pub fn begin_opening_handle_drag(&mut self, opening_id: u64) -> Result<(), LayoutError> {
        self.ensure_idle()?;
        if self.layout.state().opening(opening_id).is_none() {
            return Err(LayoutError::OpeningNotFound { id: opening_id });
        }
        self.session.drag_trail.clear();
        self.session.gesture = Some(Gesture::OpeningHandle {
            opening_id,
            committed: false,
        });
        Ok(())
    }

    pub(crate) fn drag_opening_handle(&mut self, pointer: Point) -> Result<(), LayoutError> {
        let Some(Gesture::OpeningHandle {
            opening_id,
            ref mut committed,
        }) = self.session.gesture
        else {
            return Ok(());
        };
        let state = self.layout.state();
        let opening = state
            .opening(opening_id)
            .ok_or(LayoutError::OpeningNotFound { id: opening_id })?;
        let wall = state
            .wall(opening.wall_id)
            .ok_or(LayoutError::WallNotFound { id: opening.wall_id })?;
        let position = wall.position_of(pointer);
        let anchor = wall.point_at(position);
        let next = state.with_opening_position(opening_id, position)?;
        if *committed {
            self.layout.replace_present(next);
        } else {
            self.layout.commit(next);
            *committed = true;
        }
        self.session.drag_trail.push(anchor);
        Ok(())
    }

    /// Ends the active gesture and returns it.
    ///
    /// A rotate gesture commits its live angle quantized to the nearest
    /// quarter turn.
    pub fn end_gesture(&mut self) -> Result<Option<Gesture>, LayoutError> {
        let Some(gesture) = self.session.gesture.take() else {
            return Ok(None);
        };
        self.session.drag_trail.clear();
        if let Gesture::CabinetRotate {
            cabinet_id,
            current_rotation,
            ..
        } = gesture
        {
            let rotation: Rotation = quantize_rotation(current_rotation);
            debug!(
                "Cabinet {} rotation {:.1} committed as {}",
                cabinet_id,
                current_rotation,
                rotation.degrees()
            );
            self.cabinets.set_rotation(cabinet_id, rotation)?;
        }
        Ok(Some(gesture))
    }

    /// Abandons the active gesture and any captured wall point.
    ///
    /// Drags go back to where they started; handle drags are rolled back
    /// without leaving a redo step; rotations leave the cabinet as it was.
    /// Other commands are refused while a gesture runs, so the step rolled
    /// back is always the gesture's own.
    pub fn cancel_gesture(&mut self) -> Result<Option<Gesture>, LayoutError> {
        self.session.reset_wall_draw();
        self.session.drag_trail.clear();
        let Some(gesture) = self.session.gesture.take() else {
            return Ok(None);
        };
        match gesture {
            Gesture::CabinetDrag {
                cabinet_id, origin, ..
            } => self.cabinets.move_to(cabinet_id, origin)?,
            Gesture::CabinetRotate { .. } => {}
            Gesture::WallHandle { committed, .. } | Gesture::OpeningHandle { committed, .. } => {
                if committed {
                    self.layout.rollback();
                }
            }
        }
        debug!("Cancelled {}", gesture.name());
        Ok(Some(gesture))
    }
}
