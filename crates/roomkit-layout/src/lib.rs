//! # RoomKit Layout
//!
//! This crate provides the room-layout and cabinet-placement engine behind the
//! vanity designer: a 2D editor model of walls, doors and windows bound to
//! walls, and movable, rotatable cabinets.
//!
//! ## Core Components
//!
//! ### Model and Stores
//! - **Model**: Walls, openings and cabinets in a 2 px/inch canvas space
//! - **Layout Store**: Walls and openings as one atomic, historied value
//! - **Cabinet Store**: Non-historied cabinets with catalog-driven pricing
//! - **History**: Generic past/present/future undo/redo with a depth limit
//!
//! ### Queries
//! - **Geometry**: Segment projection, grid and magnetic angle snapping
//! - **Collision**: Cabinet boxes against walls and openings
//! - **Segments**: Wall runs between openings, for rendering gaps
//!
//! ### Import and Persistence
//! - **Scan**: Real-world measurements to a closed four-wall room
//! - **Templates**: Named snapshots loaded onto the canvas with fresh ids
//! - **Serialization**: Whole-session layout files
//!
//! ## Architecture
//!
//! ```text
//! Editor (pointer routing, gestures, session)
//!   ├── LayoutStore ── History<LayoutState { walls, openings }>
//!   ├── CabinetStore ── Catalog, PricingService
//!   └── NoticeDispatcher
//!
//! Derived on demand: detect_collisions, wall_segments
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use roomkit_layout::{Editor, Point, RoomPreset, Tool};
//!
//! let mut editor = Editor::default();
//! editor.apply_preset(RoomPreset::Closed).unwrap();
//!
//! editor.set_tool(Tool::Door);
//! editor.pointer_down(Point::new(200.0, 125.0)).unwrap();
//! assert_eq!(editor.openings().len(), 1);
//!
//! editor.undo();
//! assert!(editor.openings().is_empty());
//! ```

pub mod cabinet_store;
pub mod catalog;
pub mod collision;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod ids;
pub mod layout_store;
pub mod model;
pub mod presets;
pub mod scan;
pub mod segments;
pub mod serialization;
pub mod templates;

pub use cabinet_store::CabinetStore;
pub use catalog::{Catalog, CatalogTemplate, PricingService};
pub use collision::{detect_collisions, opening_bounds, overlapping_cabinets, CollisionMap, Violation};
pub use editor::{Editor, EditorSession, Gesture, PointerOutcome, Selection, Tool, WallDrawState};
pub use geometry::{
    distance_to_segment, interpolate, project_onto_segment, quantize_rotation, snap_angle,
    snap_to_grid, Bounds, Point,
};
pub use history::History;
pub use ids::IdAllocator;
pub use layout_store::{LayoutState, LayoutStore};
pub use model::{Axis, Cabinet, CabinetPatch, Opening, OpeningKind, Rotation, Wall, WallEndpoint};
pub use presets::RoomPreset;
pub use scan::{import_scan, import_scan_json, parse_scan, ScanImport, ScanRecord, ScanSourced};
pub use segments::{all_wall_segments, wall_segments, WallSegment};
pub use serialization::LayoutFile;
pub use templates::{
    instantiate, IdBase, JsonFileTemplateStore, LayoutTemplate, LoadedTemplate,
    MemoryTemplateStore, OpeningRecord, TemplateStore, TemplateSummary,
};

/// Point-to-wall distance, clamped to the wall's endpoints.
pub fn point_to_line_distance(point: Point, wall: &Wall) -> f64 {
    wall.distance_to(point)
}

/// Clamped parametric position of `point` along `wall`, in `[0, 1]`.
pub fn position_on_wall(point: Point, wall: &Wall) -> f64 {
    wall.position_of(point)
}
