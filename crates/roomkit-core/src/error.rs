//! Error handling for RoomKit
//!
//! Provides error types for every layer of the layout engine:
//! - Layout errors (store mutations, placement, gestures)
//! - Scan errors (measurement import)
//! - Template errors (snapshot persistence and loading)
//!
//! All error types use `thiserror` for ergonomic error handling. None of them is
//! fatal: callers treat an `Err` as "no-op + notify" and keep the editor state.

use thiserror::Error;

/// Layout error type
///
/// Represents rejected mutations of the wall, opening and cabinet collections
/// and rejected interaction gestures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Wall id does not exist in the current layout
    #[error("Wall {id} not found")]
    WallNotFound {
        /// The missing wall id.
        id: u64,
    },

    /// Opening id does not exist in the current layout
    #[error("Opening {id} not found")]
    OpeningNotFound {
        /// The missing opening id.
        id: u64,
    },

    /// Cabinet id does not exist in the cabinet store
    #[error("Cabinet {id} not found")]
    CabinetNotFound {
        /// The missing cabinet id.
        id: u64,
    },

    /// No wall lies close enough to the click to host an opening
    #[error("No wall within {threshold}px of ({x:.1}, {y:.1})")]
    NoWallNearby {
        /// Click x coordinate in pixels.
        x: f64,
        /// Click y coordinate in pixels.
        y: f64,
        /// Maximum accepted perpendicular distance in pixels.
        threshold: f64,
    },

    /// A dimension was zero, negative or not finite
    #[error("Invalid {field}: {value}")]
    InvalidDimension {
        /// The offending field name.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// An id is repeated within a collection or cannot be allocated past
    #[error("Invalid {entity} id {id}: {reason}")]
    InvalidId {
        /// Collection the id belongs to.
        entity: String,
        /// The rejected id.
        id: u64,
        /// Why it was rejected.
        reason: String,
    },

    /// A gesture or command was attempted while a gesture is still active
    #[error("Gesture already in progress: {active}")]
    GestureInProgress {
        /// The gesture that is currently active.
        active: String,
    },

    /// Catalog template referenced by a cabinet does not exist
    #[error("Catalog entry '{label}' not found")]
    CatalogEntryNotFound {
        /// The catalog label that failed to resolve.
        label: String,
    },
}

/// Scan import error type
///
/// A scan is imported all-or-nothing; any of these aborts the whole import.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    /// Payload is not valid JSON or does not have the measurement shape
    #[error("Malformed scan payload: {reason}")]
    Malformed {
        /// Parser message.
        reason: String,
    },

    /// A measurement is missing, zero, negative or not finite
    #[error("Invalid scan measurement '{field}': {value}")]
    InvalidMeasurement {
        /// The offending measurement name.
        field: String,
        /// The rejected value in meters.
        value: f64,
    },
}

/// Template error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// No template with this id exists in the store
    #[error("Template '{id}' not found")]
    NotFound {
        /// The missing template id.
        id: String,
    },

    /// A template with this id already exists
    #[error("Template with ID '{id}' already exists")]
    DuplicateId {
        /// The conflicting template id.
        id: String,
    },

    /// Template payload could not be parsed or serialized
    #[error("Malformed template payload: {reason}")]
    Malformed {
        /// Serializer message.
        reason: String,
    },

    /// Backing storage failed
    #[error("Template storage error: {reason}")]
    Storage {
        /// Underlying I/O message.
        reason: String,
    },
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Malformed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::Malformed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        TemplateError::Storage {
            reason: err.to_string(),
        }
    }
}

/// Main error type for RoomKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Scan import error
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Template error
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a rejected placement (user should click closer to a wall)
    pub fn is_invalid_placement(&self) -> bool {
        matches!(self, Error::Layout(LayoutError::NoWallNearby { .. }))
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a serialization failure of a scan or template payload
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            Error::Scan(ScanError::Malformed { .. })
                | Error::Template(TemplateError::Malformed { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
