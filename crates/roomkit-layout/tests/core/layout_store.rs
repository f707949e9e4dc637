use proptest::prelude::*;
use roomkit_core::LayoutError;
use roomkit_layout::{Axis, LayoutStore, OpeningKind, Point, WallEndpoint};
use roomkit_settings::EditorSettings;

fn door() -> roomkit_settings::OpeningDefaults {
    EditorSettings::default().openings.door
}

fn two_walls_with_openings() -> (LayoutStore, u64, u64) {
    let mut store = LayoutStore::default();
    let a = store.add_wall(Point::new(0.0, 0.0), Point::new(240.0, 0.0), 9.0);
    let b = store.add_wall(Point::new(240.0, 0.0), Point::new(240.0, 192.0), 9.0);
    store.add_opening(OpeningKind::Door, a, 0.3, door()).unwrap();
    store.add_opening(OpeningKind::Window, a, 0.7, door()).unwrap();
    store.add_opening(OpeningKind::Window, b, 0.5, door()).unwrap();
    (store, a, b)
}

#[test]
fn test_remove_wall_cascades_only_its_openings() {
    let (mut store, a, b) = two_walls_with_openings();
    let removed = store.remove_wall(a).unwrap();
    assert_eq!(removed, 2);
    let state = store.state();
    assert!(state.wall(a).is_none());
    assert_eq!(state.openings.len(), 1);
    assert!(state.openings.iter().all(|o| o.wall_id == b));
    assert!(state.dangling_openings().is_empty());
}

#[test]
fn test_remove_wall_is_single_undo_step() {
    let (mut store, a, _) = two_walls_with_openings();
    store.remove_wall(a).unwrap();
    store.undo();
    assert!(store.state().wall(a).is_some());
    assert_eq!(store.state().openings.len(), 3);
}

#[test]
fn test_unknown_ids_are_rejected_without_mutation() {
    let (mut store, _, _) = two_walls_with_openings();
    let before = store.state().clone();
    assert_eq!(store.remove_wall(42), Err(LayoutError::WallNotFound { id: 42 }));
    assert_eq!(
        store.update_opening_position(42, 0.5),
        Err(LayoutError::OpeningNotFound { id: 42 })
    );
    assert!(store
        .update_wall_endpoint(42, WallEndpoint::Start, Axis::X, 0.0)
        .is_err());
    assert_eq!(store.state(), &before);
}

#[test]
fn test_mutations_do_not_touch_previous_snapshot() {
    let (mut store, a, _) = two_walls_with_openings();
    let before = store.state().clone();
    store
        .update_wall_endpoint(a, WallEndpoint::Start, Axis::Y, 48.0)
        .unwrap();
    assert_ne!(store.state(), &before);
    store.undo();
    assert_eq!(store.state(), &before);
}

#[test]
fn test_wall_ids_are_never_reissued() {
    let mut store = LayoutStore::default();
    store.add_wall(Point::new(0.0, 0.0), Point::new(24.0, 0.0), 9.0);
    let second = store.add_wall(Point::new(0.0, 0.0), Point::new(0.0, 24.0), 9.0);
    store.remove_wall(second).unwrap();
    let third = store.add_wall(Point::new(0.0, 0.0), Point::new(48.0, 0.0), 9.0);
    assert_eq!(third, 3);

    // Undoing back past the third wall and adding again still skips 3
    store.undo();
    store.undo();
    let fourth = store.add_wall(Point::new(0.0, 0.0), Point::new(48.0, 48.0), 9.0);
    assert_eq!(fourth, 4);
}

proptest! {
    #[test]
    fn prop_opening_position_is_clamped(position in -1e6..1e6f64) {
        let (mut store, _, _) = two_walls_with_openings();
        store.update_opening_position(1, position).unwrap();
        let stored = store.state().opening(1).unwrap().position;
        prop_assert!((0.0..=1.0).contains(&stored));
        if (0.0..=1.0).contains(&position) {
            prop_assert_eq!(stored, position);
        }
    }

    #[test]
    fn prop_added_opening_position_is_clamped(position in -10.0..10.0f64) {
        let mut store = LayoutStore::default();
        let wall = store.add_wall(Point::new(0.0, 0.0), Point::new(96.0, 0.0), 9.0);
        let id = store.add_opening(OpeningKind::Door, wall, position, door()).unwrap();
        let stored = store.state().opening(id).unwrap().position;
        prop_assert!((0.0..=1.0).contains(&stored));
    }
}
