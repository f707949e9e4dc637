//! Layout notices for the presentation layer
//!
//! Provides:
//! - Notice types for successful and rejected editing operations
//! - A dispatcher publishing notices to any number of subscribers
//!
//! The engine never renders these; the UI turns them into toasts.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Severity used by the UI to pick a toast style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Operation completed
    Success,
    /// Operation completed with caveats
    Warning,
    /// Operation rejected
    Error,
}

/// Layout notice types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutNotice {
    /// A wall was drawn
    WallAdded(u64),
    /// A wall and its openings were removed
    WallRemoved {
        /// Removed wall id.
        wall_id: u64,
        /// Number of openings removed with it.
        openings_removed: usize,
    },
    /// An opening was placed on a wall
    OpeningPlaced {
        /// New opening id.
        opening_id: u64,
        /// Host wall id.
        wall_id: u64,
    },
    /// Opening tool click was too far from any wall
    OpeningRejected(String),
    /// A cabinet was added
    CabinetAdded(u64),
    /// A cabinet was removed
    CabinetRemoved(u64),
    /// A room preset replaced the layout
    PresetApplied(String),
    /// A scan import replaced the layout
    ScanImported {
        /// Walls created.
        walls: usize,
        /// Openings created.
        openings: usize,
    },
    /// A scan payload was rejected
    ScanRejected(String),
    /// A template was saved
    TemplateSaved(String),
    /// A template was loaded onto the canvas
    TemplateLoaded(String),
    /// A template operation failed
    TemplateFailed(String),
    /// The room was cleared
    RoomCleared,
}

impl LayoutNotice {
    /// Severity of this notice
    pub fn level(&self) -> NoticeLevel {
        match self {
            LayoutNotice::OpeningRejected(_)
            | LayoutNotice::ScanRejected(_)
            | LayoutNotice::TemplateFailed(_) => NoticeLevel::Error,
            LayoutNotice::RoomCleared => NoticeLevel::Warning,
            _ => NoticeLevel::Success,
        }
    }
}

impl std::fmt::Display for LayoutNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutNotice::WallAdded(id) => write!(f, "Wall {} added", id),
            LayoutNotice::WallRemoved {
                wall_id,
                openings_removed,
            } => write!(
                f,
                "Wall {} removed ({} openings)",
                wall_id, openings_removed
            ),
            LayoutNotice::OpeningPlaced {
                opening_id,
                wall_id,
            } => write!(f, "Opening {} placed on wall {}", opening_id, wall_id),
            LayoutNotice::OpeningRejected(reason) => {
                write!(f, "Click near a wall to place opening ({})", reason)
            }
            LayoutNotice::CabinetAdded(id) => write!(f, "Cabinet {} added", id),
            LayoutNotice::CabinetRemoved(id) => write!(f, "Cabinet {} removed", id),
            LayoutNotice::PresetApplied(name) => write!(f, "Applied {} layout", name),
            LayoutNotice::ScanImported { walls, openings } => write!(
                f,
                "Imported scan: {} walls, {} openings",
                walls, openings
            ),
            LayoutNotice::ScanRejected(reason) => write!(f, "Scan import failed: {}", reason),
            LayoutNotice::TemplateSaved(name) => write!(f, "Template '{}' saved", name),
            LayoutNotice::TemplateLoaded(name) => write!(f, "Template '{}' loaded", name),
            LayoutNotice::TemplateFailed(reason) => write!(f, "Template error: {}", reason),
            LayoutNotice::RoomCleared => write!(f, "Room cleared"),
        }
    }
}

/// Notice dispatcher for publishing notices to subscribers
#[derive(Clone)]
pub struct NoticeDispatcher {
    tx: broadcast::Sender<LayoutNotice>,
}

impl NoticeDispatcher {
    /// Create a new dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Notices retained for slow subscribers
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Subscribe to notices
    pub fn subscribe(&self) -> broadcast::Receiver<LayoutNotice> {
        self.tx.subscribe()
    }

    /// Publish a notice to all subscribers.
    ///
    /// Returns the number of subscribers reached; a notice with no subscriber is
    /// dropped silently.
    pub fn publish(&self, notice: LayoutNotice) -> usize {
        tracing::debug!("notice: {}", notice);
        self.tx.send(notice).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NoticeDispatcher {
    fn default() -> Self {
        Self::new(64)
    }
}

impl std::fmt::Debug for NoticeDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoticeDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
