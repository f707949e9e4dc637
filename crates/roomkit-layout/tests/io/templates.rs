use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use roomkit_core::{Error, LayoutNotice, TemplateError};
use roomkit_layout::{
    Cabinet, Editor, JsonFileTemplateStore, LayoutTemplate, MemoryTemplateStore, OpeningKind,
    Point, RoomPreset, TemplateStore,
};

fn furnished_room() -> Editor {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::Closed).unwrap();
    editor.add_opening(OpeningKind::Door, 3, 0.5).unwrap();
    editor.add_opening(OpeningKind::Window, 1, 0.25).unwrap();
    editor
        .add_cabinet(Cabinet::new("vanity", 30.0, 34.5, 21.0, Point::new(144.0, 130.0)))
        .unwrap();
    editor
}

#[test]
fn test_round_trip_through_memory_store() {
    let mut source = furnished_room();
    let mut store = MemoryTemplateStore::new();
    let id = source.save_template(&mut store, "Guest bath", "Closed room").unwrap();

    let mut target = Editor::default();
    let loaded = target.load_template(&store, &id).unwrap();
    assert_eq!(loaded.dropped_openings, 0);
    assert_eq!(target.walls().len(), 4);
    assert_eq!(target.openings().len(), 2);
    assert_eq!(target.cabinets().len(), 1);
    // Geometry survives; the door still sits on the bottom wall
    assert_eq!(target.walls(), source.walls());
    assert_eq!(target.openings()[0].wall_id, 3);
}

#[test]
fn test_loading_onto_existing_canvas_renumbers() {
    let mut source = furnished_room();
    let mut store = MemoryTemplateStore::new();
    let id = source.save_template(&mut store, "Bath", "").unwrap();

    // Loading a second copy onto the same canvas
    let loaded = source.load_template(&store, &id).unwrap();
    let wall_ids: Vec<u64> = loaded.walls.iter().map(|w| w.id).collect();
    assert_eq!(wall_ids, vec![5, 6, 7, 8]);
    let opening_walls: Vec<u64> = loaded.openings.iter().map(|o| o.wall_id).collect();
    assert_eq!(opening_walls, vec![7, 5]);
    assert_eq!(loaded.openings[0].id, 3);
    assert_eq!(loaded.cabinets[0].id, 2);

    assert_eq!(source.walls().len(), 8);
    assert_eq!(source.cabinets().len(), 2);
    assert!(source.layout().dangling_openings().is_empty());

    // Walls and openings come back off in one step; cabinets stay
    source.undo();
    assert_eq!(source.walls().len(), 4);
    assert_eq!(source.cabinets().len(), 2);
}

#[test]
fn test_legacy_template_backfills_heights() {
    let json = r#"{
        "id": "legacy-1",
        "name": "Old bath",
        "createdAt": "2023-04-01T10:00:00Z",
        "walls": [
            { "id": 10, "start": { "x": 0.0, "y": 0.0 }, "end": { "x": 240.0, "y": 0.0 }, "thickness": 9.0 }
        ],
        "openings": [
            { "id": 4, "type": "window", "wallId": 10, "position": 0.5, "width": 36.0 },
            { "id": 5, "type": "door", "wallId": 10, "position": 0.2, "width": 30.0, "yPosition": 2.0 },
            { "id": 6, "type": "door", "wallId": 99, "position": 0.2, "width": 30.0 }
        ]
    }"#;
    let template: LayoutTemplate = serde_json::from_str(json).unwrap();
    let mut editor = Editor::default();
    let loaded = editor.apply_template(&template).unwrap();

    assert_eq!(loaded.dropped_openings, 1);
    assert_eq!(editor.walls()[0].id, 1);
    let window = &editor.openings()[0];
    assert_eq!(window.wall_id, 1);
    assert_eq!((window.height, window.height_from_floor), (36.0, 42.0));
    let door = &editor.openings()[1];
    assert_eq!((door.height, door.height_from_floor), (84.0, 2.0));
}

#[test]
fn test_invalid_template_is_rejected_whole() {
    let bad_opening = r#"{
        "id": "bad-1", "name": "Bad sizes", "createdAt": "2024-06-01T10:00:00Z",
        "walls": [
            { "id": 1, "start": { "x": 0.0, "y": 0.0 }, "end": { "x": 240.0, "y": 0.0 }, "thickness": 9.0 }
        ],
        "openings": [
            { "id": 1, "type": "window", "wallId": 1, "position": 0.5, "width": -40.0 }
        ]
    }"#;
    let bad_cabinet = r#"{
        "id": "bad-2", "name": "Flat vanity", "createdAt": "2024-06-01T10:00:00Z",
        "cabinets": [
            { "id": 1, "type": "vanity", "width": 0.0, "height": -3.0, "depth": 21.0, "x": 0.0, "y": 0.0 }
        ]
    }"#;

    for json in [bad_opening, bad_cabinet] {
        let template: LayoutTemplate = serde_json::from_str(json).unwrap();
        let mut editor = furnished_room();
        let layout = editor.layout().clone();
        let cabinets = editor.cabinets().to_vec();
        let mut notices = editor.subscribe();

        let err = editor.apply_template(&template).unwrap_err();
        assert!(matches!(err, Error::Template(TemplateError::Malformed { .. })));
        assert_eq!(editor.layout(), &layout);
        assert_eq!(editor.cabinets(), cabinets.as_slice());
        assert!(matches!(notices.try_recv(), Ok(LayoutNotice::TemplateFailed(_))));

        // The furnished room's own openings are still the last undo step
        editor.undo();
        assert_eq!(editor.openings().len(), 1);
    }
}

#[test]
fn test_load_missing_template_notifies() {
    let store = MemoryTemplateStore::new();
    let mut editor = Editor::default();
    let mut notices = editor.subscribe();
    let err = editor.load_template(&store, "nope").unwrap_err();
    assert!(matches!(
        err,
        Error::Template(TemplateError::NotFound { ref id }) if id == "nope"
    ));
    assert!(matches!(notices.try_recv(), Ok(LayoutNotice::TemplateFailed(_))));
    assert!(editor.walls().is_empty());
}

#[test]
fn test_list_is_newest_first() {
    let mut store = MemoryTemplateStore::new();
    for (name, day) in [("A", 1), ("B", 3), ("C", 2)] {
        let mut t = LayoutTemplate::capture(name, "", &Default::default(), &[]);
        t.created_at = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        store.save(t).unwrap();
    }
    let names: Vec<String> = store.list().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["B", "C", "A"]);
}

#[test]
fn test_store_crud() {
    let mut store = MemoryTemplateStore::new();
    let template = LayoutTemplate::capture("Powder room", "half bath", &Default::default(), &[]);
    let id = template.id.clone();
    store.save(template.clone()).unwrap();
    assert_eq!(
        store.save(template),
        Err(TemplateError::DuplicateId { id: id.clone() })
    );

    let copy = store.duplicate(&id).unwrap();
    assert_ne!(copy.id, id);
    assert_eq!(copy.name, "Powder room (copy)");
    assert_eq!(store.search("HALF").len(), 2);

    store.delete(&id).unwrap();
    assert!(store.load(&id).is_err());
    assert_eq!(store.count(), 1);
}

#[test]
fn test_json_file_store_persists_each_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library").join("templates.json");

    let mut editor = furnished_room();
    let id = {
        let mut store = JsonFileTemplateStore::open(&path).unwrap();
        assert!(store.library().is_empty());
        editor.save_template(&mut store, "Main bath", "").unwrap()
    };
    assert!(path.exists());

    let mut reopened = JsonFileTemplateStore::open(&path).unwrap();
    assert_eq!(reopened.list().len(), 1);
    assert_eq!(reopened.load(&id).unwrap().cabinets.len(), 1);

    reopened.delete(&id).unwrap();
    let again = JsonFileTemplateStore::open(&path).unwrap();
    assert!(again.list().is_empty());
}

#[test]
fn test_corrupt_library_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonFileTemplateStore::open(&path),
        Err(TemplateError::Malformed { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_loaded_ids_are_fresh(existing in 0usize..6, removed in 0usize..3, template_walls in 1usize..5) {
        let mut editor = Editor::default();
        for i in 0..existing {
            let y = i as f64 * 48.0;
            editor.add_wall(Point::new(0.0, y), Point::new(96.0, y)).unwrap();
        }
        for _ in 0..removed.min(existing) {
            let last = editor.walls().last().map(|w| w.id);
            if let Some(id) = last {
                editor.remove_wall(id).unwrap();
            }
        }
        let max_before = editor.walls().iter().map(|w| w.id).max().unwrap_or(0);

        let mut source = Editor::default();
        for i in 0..template_walls {
            let x = i as f64 * 48.0;
            let wall = source.add_wall(Point::new(x, 0.0), Point::new(x, 96.0)).unwrap();
            source.add_opening(OpeningKind::Window, wall, 0.5).unwrap();
        }
        let template = LayoutTemplate::capture("t", "", source.layout(), &[]);
        let loaded = editor.apply_template(&template).unwrap();

        prop_assert!(loaded.walls.iter().all(|w| w.id > max_before));
        let mut ids: Vec<u64> = editor.walls().iter().map(|w| w.id).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
        prop_assert!(editor.layout().dangling_openings().is_empty());
        for opening in &loaded.openings {
            prop_assert!(loaded.walls.iter().any(|w| w.id == opening.wall_id));
        }
    }
}
