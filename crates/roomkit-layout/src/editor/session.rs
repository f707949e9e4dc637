//! Explicit, serializable interaction state.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::{OpeningKind, Rotation, WallEndpoint};

/// Active drawing tool. Only the UI changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Door,
    Window,
}

impl Tool {
    /// Opening kind placed by this tool, if it places openings.
    pub fn opening_kind(&self) -> Option<OpeningKind> {
        match self {
            Tool::Door => Some(OpeningKind::Door),
            Tool::Window => Some(OpeningKind::Window),
            _ => None,
        }
    }
}

/// Selected entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Selection {
    Wall(u64),
    Opening(u64),
    Cabinet(u64),
}

/// Wall tool sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum WallDrawState {
    #[default]
    Idle,
    /// First corner captured, grid-snapped.
    PointCaptured(Point),
}

/// The single gesture that may be active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    CabinetDrag {
        cabinet_id: u64,
        /// Pointer minus cabinet origin at drag start.
        offset: Point,
        /// Cabinet origin before the drag, restored on cancel.
        origin: Point,
    },
    CabinetRotate {
        cabinet_id: u64,
        /// Pointer angle from the cabinet center minus the starting rotation.
        start_angle: f64,
        /// Live angle in degrees, snapped when near a candidate.
        current_rotation: f64,
        original: Rotation,
    },
    WallHandle {
        wall_id: u64,
        endpoint: WallEndpoint,
        /// Whether the gesture already recorded its undo step.
        committed: bool,
    },
    OpeningHandle {
        opening_id: u64,
        committed: bool,
    },
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::CabinetDrag { .. } => "cabinet drag",
            Gesture::CabinetRotate { .. } => "cabinet rotate",
            Gesture::WallHandle { .. } => "wall handle drag",
            Gesture::OpeningHandle { .. } => "opening handle drag",
        }
    }
}

/// Everything the interaction controller needs besides the stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorSession {
    pub tool: Tool,
    pub wall_draw: WallDrawState,
    /// Transient end point of the wall being drawn. Never committed.
    pub wall_preview: Option<Point>,
    pub gesture: Option<Gesture>,
    pub selection: Option<Selection>,
    /// Snapped points visited by the current handle drag, for feedback only.
    pub drag_trail: Vec<Point>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.gesture.is_none() && self.wall_draw == WallDrawState::Idle
    }

    pub fn captured_point(&self) -> Option<Point> {
        match self.wall_draw {
            WallDrawState::PointCaptured(p) => Some(p),
            WallDrawState::Idle => None,
        }
    }

    pub(crate) fn reset_wall_draw(&mut self) {
        self.wall_draw = WallDrawState::Idle;
        self.wall_preview = None;
    }
}
