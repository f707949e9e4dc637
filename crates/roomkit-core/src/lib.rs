//! # RoomKit Core
//!
//! Core types and utilities shared by the RoomKit crates:
//! error taxonomy, unit conversion between pixels, inches and meters,
//! and the notice dispatcher the editor uses to talk to the UI.

pub mod error;
pub mod notice;
pub mod units;

pub use error::{Error, LayoutError, Result, ScanError, TemplateError};
pub use notice::{LayoutNotice, NoticeDispatcher, NoticeLevel};
pub use units::{
    inches_to_px, meters_to_inches, meters_to_px, px_to_inches, LengthUnit, GRID_SIZE_PX,
    INCHES_PER_METER, PIXELS_PER_INCH,
};
