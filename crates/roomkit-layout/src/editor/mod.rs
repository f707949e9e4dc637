//! Editor state for UI integration.
//! Owns the stores and the session and routes pointer input into them.
//!
//! This module is split into submodules for better organization:
//! - `session`: Tool, selection and gesture state
//! - `editing`: Wall, opening and cabinet commands, undo/redo
//! - `input`: Pointer routing, wall drawing, opening placement, hit testing
//! - `gestures`: Cabinet drag/rotate and handle drags
//! - `file_io`: Presets, scan import, templates and layout files

mod editing;
mod file_io;
mod gestures;
mod input;
pub mod session;

pub use input::PointerOutcome;
pub use session::{EditorSession, Gesture, Selection, Tool, WallDrawState};

use crate::cabinet_store::CabinetStore;
use crate::collision::{detect_collisions, overlapping_cabinets, CollisionMap};
use crate::layout_store::{LayoutState, LayoutStore};
use crate::model::{Cabinet, Opening, Wall};
use crate::scan::ScanSourced;
use crate::segments::{wall_segments, WallSegment};
use roomkit_core::{LayoutError, LayoutNotice, NoticeDispatcher};
use roomkit_settings::EditorSettings;
use tokio::sync::broadcast;
use tracing::debug;

/// Editor state
#[derive(Debug)]
pub struct Editor {
    settings: EditorSettings,
    layout: LayoutStore,
    cabinets: CabinetStore,
    session: EditorSession,
    scan_sourced: ScanSourced,
    notices: NoticeDispatcher,
}

impl Editor {
    /// Creates an empty editor.
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            layout: LayoutStore::new(settings.history.max_depth),
            settings,
            cabinets: CabinetStore::new(),
            session: EditorSession::new(),
            scan_sourced: ScanSourced::default(),
            notices: NoticeDispatcher::default(),
        }
    }

    /// Replaces the cabinet store, typically one carrying a catalog and pricing.
    pub fn with_cabinet_store(mut self, cabinets: CabinetStore) -> Self {
        self.cabinets = cabinets;
        self
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn layout(&self) -> &LayoutState {
        self.layout.state()
    }

    pub fn walls(&self) -> &[Wall] {
        &self.layout.state().walls
    }

    pub fn openings(&self) -> &[Opening] {
        &self.layout.state().openings
    }

    pub fn cabinets(&self) -> &[Cabinet] {
        self.cabinets.all()
    }

    pub fn cabinet_store(&self) -> &CabinetStore {
        &self.cabinets
    }

    pub fn cabinet_store_mut(&mut self) -> &mut CabinetStore {
        &mut self.cabinets
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn scan_sourced(&self) -> &ScanSourced {
        &self.scan_sourced
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LayoutNotice> {
        self.notices.subscribe()
    }

    pub fn notices(&self) -> &NoticeDispatcher {
        &self.notices
    }

    /// Undoes the last wall/opening change. Cabinets are not historied.
    ///
    /// Refused while a gesture is active.
    pub fn undo(&mut self) -> bool {
        if self.session.gesture.is_some() {
            debug!("Undo ignored during gesture");
            return false;
        }
        let undone = self.layout.undo();
        if undone {
            self.drop_stale_selection();
        }
        undone
    }

    /// Redoes the last undone wall/opening change.
    pub fn redo(&mut self) -> bool {
        if self.session.gesture.is_some() {
            debug!("Redo ignored during gesture");
            return false;
        }
        let redone = self.layout.redo();
        if redone {
            self.drop_stale_selection();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.layout.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.layout.can_redo()
    }

    /// Cabinet id to wall/opening violations for the current state.
    pub fn collisions(&self) -> CollisionMap {
        let state = self.layout.state();
        detect_collisions(&state.walls, &state.openings, self.cabinets.all())
    }

    /// Pairs of overlapping cabinets.
    pub fn overlapping_cabinets(&self) -> Vec<(u64, u64)> {
        overlapping_cabinets(self.cabinets.all())
    }

    /// Renderable segments of one wall, `None` if the wall does not exist.
    pub fn wall_segments(&self, wall_id: u64) -> Option<Vec<WallSegment>> {
        let state = self.layout.state();
        state
            .wall(wall_id)
            .map(|wall| wall_segments(wall, &state.openings))
    }

    /// Fails with `GestureInProgress` while a gesture is active.
    ///
    /// Every command that changes walls, openings or cabinets checks this
    /// first.
    pub(crate) fn ensure_idle(&self) -> Result<(), LayoutError> {
        match &self.session.gesture {
            Some(g) => Err(LayoutError::GestureInProgress {
                active: g.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn notify(&self, notice: LayoutNotice) {
        self.notices.publish(notice);
    }

    pub(crate) fn drop_stale_selection(&mut self) {
        let live = match self.session.selection {
            Some(Selection::Wall(id)) => self.layout.state().wall(id).is_some(),
            Some(Selection::Opening(id)) => self.layout.state().opening(id).is_some(),
            Some(Selection::Cabinet(id)) => self.cabinets.get(id).is_some(),
            None => true,
        };
        if !live {
            self.session.selection = None;
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
