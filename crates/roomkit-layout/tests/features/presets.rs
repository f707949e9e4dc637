use roomkit_layout::{Editor, OpeningKind, Point, RoomPreset, Tool};
use roomkit_settings::PresetSettings;

#[test]
fn test_straight_is_one_wall() {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::Straight).unwrap();
    assert_eq!(editor.walls().len(), 1);
    assert_eq!(editor.walls()[0].id, 1);
    assert_eq!(editor.walls()[0].length(), 240.0);
    assert!(editor.openings().is_empty());
}

#[test]
fn test_closed_is_a_rectangle() {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::Closed).unwrap();
    let walls = editor.walls();
    assert_eq!(walls.len(), 4);
    assert!(editor.openings().is_empty());

    let ids: Vec<u64> = walls.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    // Each wall ends where the next begins, and the last closes the loop
    for (i, wall) in walls.iter().enumerate() {
        assert_eq!(wall.end, walls[(i + 1) % 4].start);
    }
    assert_eq!(walls[0].start, Point::new(120.0, 120.0));
    assert_eq!(walls[1].length(), 192.0);
}

#[test]
fn test_shapes_share_corners() {
    let settings = PresetSettings::default();
    let l = RoomPreset::LShape.build(&settings, 9.0);
    assert_eq!(l.walls[0].end, l.walls[1].start);

    let u = RoomPreset::UShape.build(&settings, 9.0);
    assert_eq!(u.walls.len(), 3);
    assert_eq!(u.walls[1].end, u.walls[2].start);
    assert_ne!(u.walls[2].end, u.walls[0].start);
}

#[test]
fn test_preset_replaces_layout_in_one_step() {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::Closed).unwrap();
    editor.add_opening(OpeningKind::Door, 1, 0.5).unwrap();

    editor.apply_preset(RoomPreset::LShape).unwrap();
    assert_eq!(editor.walls().len(), 2);
    assert!(editor.openings().is_empty());

    assert!(editor.undo());
    assert_eq!(editor.walls().len(), 4);
    assert_eq!(editor.openings().len(), 1);
}

#[test]
fn test_walls_drawn_after_preset_get_fresh_ids() {
    let mut editor = Editor::default();
    editor.apply_preset(RoomPreset::UShape).unwrap();
    editor.set_tool(Tool::Wall);
    editor.pointer_down(Point::new(0.0, 0.0)).unwrap();
    editor.pointer_down(Point::new(48.0, 0.0)).unwrap();
    let ids: Vec<u64> = editor.walls().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_preset_names_parse() {
    for preset in RoomPreset::ALL {
        assert_eq!(RoomPreset::parse(preset.as_str()), Some(preset));
    }
    assert_eq!(RoomPreset::parse("l-shape"), Some(RoomPreset::LShape));
    assert_eq!(RoomPreset::parse("hexagon"), None);
}
