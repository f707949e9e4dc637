use roomkit_core::{Error, LayoutNotice, ScanError};
use roomkit_layout::{import_scan_json, Editor, OpeningKind, Point, RoomPreset, Tool};
use roomkit_settings::EditorSettings;

const BATHROOM: &str = r#"{
    "measurements": {
        "width": 3.0,
        "depth": 2.0,
        "windows": [
            { "width": 0.9, "height": 1.2 },
            { "width": 0.6, "height": 0.6 }
        ],
        "doors": [
            { "width": 0.8, "height": 2.0 }
        ]
    }
}"#;

#[test]
fn test_scan_builds_rectangle_in_pixels() {
    let import = import_scan_json(BATHROOM, &EditorSettings::default()).unwrap();
    let walls = &import.layout.walls;
    assert_eq!(walls.len(), 4);
    assert_eq!(walls[0].start, Point::new(120.0, 120.0));
    assert_eq!(walls[0].end, Point::new(356.0, 120.0));
    assert_eq!(walls[1].end, Point::new(356.0, 277.0));
    assert_eq!(walls[3].end, walls[0].start);
}

#[test]
fn test_scan_openings_windows_then_doors() {
    let import = import_scan_json(BATHROOM, &EditorSettings::default()).unwrap();
    let openings = &import.layout.openings;
    let summary: Vec<(u64, OpeningKind, u64)> =
        openings.iter().map(|o| (o.id, o.kind, o.wall_id)).collect();
    assert_eq!(
        summary,
        vec![
            (1, OpeningKind::Window, 1),
            (2, OpeningKind::Window, 2),
            (3, OpeningKind::Door, 1),
        ]
    );

    let window = &openings[0];
    assert_eq!((window.width, window.height), (35.0, 47.0));
    assert_eq!(window.position, 0.5);
    assert_eq!(window.height_from_floor, 42.0);

    let door = &openings[2];
    assert_eq!((door.width, door.height), (31.0, 79.0));
    assert_eq!(door.position, 0.3);
    assert_eq!(door.height_from_floor, 0.0);

    assert_eq!(import.sourced.walls, vec![1, 2, 3, 4]);
    assert_eq!(import.sourced.openings, vec![1, 2, 3]);
}

#[test]
fn test_scan_without_openings() {
    let json = r#"{ "measurements": { "width": 1.5, "depth": 1.5 } }"#;
    let import = import_scan_json(json, &EditorSettings::default()).unwrap();
    assert_eq!(import.layout.walls.len(), 4);
    assert!(import.layout.openings.is_empty());
}

#[test]
fn test_editor_import_replaces_layout_and_marks_sources() {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::LShape).unwrap();
    let mut notices = editor.subscribe();

    let sourced = editor.import_scan(BATHROOM).unwrap();
    assert_eq!(sourced.openings.len(), 3);
    assert_eq!(editor.walls().len(), 4);
    assert!(editor.scan_sourced().contains_wall(4));
    assert_eq!(
        notices.try_recv(),
        Ok(LayoutNotice::ScanImported {
            walls: 4,
            openings: 3
        })
    );

    // One undo step back to the L-shape
    assert!(editor.undo());
    assert_eq!(editor.walls().len(), 2);
}

#[test]
fn test_walls_drawn_after_scan_continue_numbering() {
    let mut editor = Editor::default();
    editor.import_scan(BATHROOM).unwrap();
    editor.set_tool(Tool::Wall);
    editor.pointer_down(Point::new(0.0, 0.0)).unwrap();
    editor.pointer_down(Point::new(0.0, 96.0)).unwrap();
    assert_eq!(editor.walls().last().map(|w| w.id), Some(5));
    assert!(!editor.scan_sourced().contains_wall(5));
}

#[test]
fn test_rejected_scan_leaves_editor_untouched() {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::Closed).unwrap();
    let before = editor.layout().clone();
    let mut notices = editor.subscribe();

    let bad_door = r#"{ "measurements": { "width": 3.0, "depth": 2.0,
        "doors": [ { "width": 0.8, "height": 0.0 } ] } }"#;
    let err = editor.import_scan(bad_door).unwrap_err();
    assert!(matches!(
        err,
        Error::Scan(ScanError::InvalidMeasurement { ref field, value })
            if field == "doors[0].height" && value == 0.0
    ));
    assert_eq!(editor.layout(), &before);
    assert!(editor.scan_sourced().is_empty());
    assert!(matches!(notices.try_recv(), Ok(LayoutNotice::ScanRejected(_))));
}

#[test]
fn test_malformed_payloads() {
    let settings = EditorSettings::default();
    for json in [
        "not json",
        r#"{ "width": 3.0, "depth": 2.0 }"#,
        r#"{ "measurements": { "width": "wide", "depth": 2.0 } }"#,
    ] {
        assert!(matches!(
            import_scan_json(json, &settings),
            Err(ScanError::Malformed { .. })
        ));
    }
    assert!(matches!(
        import_scan_json(r#"{ "measurements": { "width": -3.0, "depth": 2.0 } }"#, &settings),
        Err(ScanError::InvalidMeasurement { .. })
    ));
}

#[test]
fn test_preset_clears_scan_markers() {
    let mut editor = Editor::default();
    editor.import_scan(BATHROOM).unwrap();
    editor.apply_preset(RoomPreset::Straight).unwrap();
    assert!(editor.scan_sourced().is_empty());
}
