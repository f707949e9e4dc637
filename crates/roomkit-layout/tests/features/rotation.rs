use roomkit_layout::{Cabinet, Editor, Gesture, Point, Rotation};

/// Pointer at `degrees` around the cabinet center, 100 px out.
fn around(center: Point, degrees: f64) -> Point {
    let r = degrees.to_radians();
    Point::new(center.x + 100.0 * r.cos(), center.y + 100.0 * r.sin())
}

fn editor_with_cabinet() -> (Editor, u64, Point) {
    let mut editor = Editor::default();
    let id = editor
        .add_cabinet(Cabinet::new("vanity", 30.0, 34.5, 21.0, Point::new(0.0, 0.0)))
        .unwrap();
    let center = editor.cabinet_store().get(id).unwrap().center();
    (editor, id, center)
}

fn rotation_of(editor: &Editor, id: u64) -> Rotation {
    editor.cabinet_store().get(id).unwrap().rotation
}

#[test]
fn test_near_quarter_turn_snaps_live_and_commits() {
    let (mut editor, id, center) = editor_with_cabinet();
    assert_eq!(center, Point::new(30.0, 21.0));

    editor.begin_cabinet_rotate(id, around(center, 0.0)).unwrap();
    editor.pointer_move(around(center, 88.0)).unwrap();
    assert_eq!(editor.live_rotation(), Some(90.0));

    let ended = editor.pointer_up().unwrap();
    assert!(matches!(ended, Some(Gesture::CabinetRotate { .. })));
    assert_eq!(rotation_of(&editor, id), Rotation::Deg90);
    assert_eq!(editor.live_rotation(), None);
}

#[test]
fn test_free_angle_stays_live_then_quantizes() {
    let (mut editor, id, center) = editor_with_cabinet();
    editor.begin_cabinet_rotate(id, around(center, 0.0)).unwrap();
    editor.pointer_move(around(center, 50.0)).unwrap();

    let live = editor.live_rotation().unwrap();
    assert!((live - 50.0).abs() < 1e-9);
    // Nothing is written until the gesture ends
    assert_eq!(rotation_of(&editor, id), Rotation::Deg0);

    editor.pointer_up().unwrap();
    assert_eq!(rotation_of(&editor, id), Rotation::Deg90);
}

#[test]
fn test_small_turn_commits_zero() {
    let (mut editor, id, center) = editor_with_cabinet();
    editor.begin_cabinet_rotate(id, around(center, 0.0)).unwrap();
    editor.pointer_move(around(center, 40.0)).unwrap();
    editor.pointer_up().unwrap();
    assert_eq!(rotation_of(&editor, id), Rotation::Deg0);
}

#[test]
fn test_rotation_is_relative_to_grab_angle() {
    let (mut editor, id, center) = editor_with_cabinet();
    editor.turn_cabinet(id).unwrap();
    assert_eq!(rotation_of(&editor, id), Rotation::Deg90);

    editor.begin_cabinet_rotate(id, around(center, 0.0)).unwrap();
    assert_eq!(editor.live_rotation(), Some(90.0));
    editor.pointer_move(around(center, 89.0)).unwrap();
    assert_eq!(editor.live_rotation(), Some(180.0));
    editor.pointer_up().unwrap();
    assert_eq!(rotation_of(&editor, id), Rotation::Deg180);
}

#[test]
fn test_negative_sweep_wraps() {
    let (mut editor, id, center) = editor_with_cabinet();
    editor.begin_cabinet_rotate(id, around(center, 0.0)).unwrap();
    editor.pointer_move(around(center, -92.0)).unwrap();
    assert_eq!(editor.live_rotation(), Some(270.0));
    editor.pointer_up().unwrap();
    assert_eq!(rotation_of(&editor, id), Rotation::Deg270);
}

#[test]
fn test_cancelled_rotation_leaves_cabinet() {
    let (mut editor, id, center) = editor_with_cabinet();
    editor.begin_cabinet_rotate(id, around(center, 0.0)).unwrap();
    editor.pointer_move(around(center, 178.0)).unwrap();
    editor.cancel_gesture().unwrap();
    assert_eq!(rotation_of(&editor, id), Rotation::Deg0);
    assert!(editor.session().is_idle());
}

#[test]
fn test_turn_cabinet_cycles() {
    let (mut editor, id, _) = editor_with_cabinet();
    let turns: Vec<Rotation> = (0..4).map(|_| editor.turn_cabinet(id).unwrap()).collect();
    assert_eq!(
        turns,
        vec![Rotation::Deg90, Rotation::Deg180, Rotation::Deg270, Rotation::Deg0]
    );
}
