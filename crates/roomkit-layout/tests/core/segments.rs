use roomkit_layout::{all_wall_segments, wall_segments, Opening, OpeningKind, Point, Wall};

fn door(id: u64, wall_id: u64, position: f64, width: f64) -> Opening {
    Opening {
        id,
        kind: OpeningKind::Door,
        wall_id,
        position,
        width,
        height: 84.0,
        height_from_floor: 0.0,
    }
}

fn spans(wall: &Wall, openings: &[Opening]) -> Vec<(f64, f64)> {
    let round = |v: f64| (v * 1e9).round() / 1e9;
    wall_segments(wall, openings)
        .iter()
        .map(|s| (round(s.start_t), round(s.end_t)))
        .collect()
}

fn wall() -> Wall {
    // 400 px long, so a 40 inch door covers 0.2 of it
    Wall::new(1, Point::new(0.0, 0.0), Point::new(400.0, 0.0), 9.0)
}

#[test]
fn test_no_openings_is_whole_wall() {
    assert_eq!(spans(&wall(), &[]), vec![(0.0, 1.0)]);
}

#[test]
fn test_single_opening_splits_wall() {
    assert_eq!(spans(&wall(), &[door(1, 1, 0.5, 40.0)]), vec![(0.0, 0.4), (0.6, 1.0)]);
}

#[test]
fn test_unsorted_openings_are_ordered() {
    let openings = [door(1, 1, 0.8, 20.0), door(2, 1, 0.2, 20.0)];
    assert_eq!(
        spans(&wall(), &openings),
        vec![(0.0, 0.15), (0.25, 0.75), (0.85, 1.0)]
    );
}

#[test]
fn test_gap_at_end_is_clamped() {
    assert_eq!(spans(&wall(), &[door(1, 1, 0.0, 40.0)]), vec![(0.1, 1.0)]);
    assert_eq!(spans(&wall(), &[door(1, 1, 1.0, 40.0)]), vec![(0.0, 0.9)]);
}

#[test]
fn test_overlapping_openings_merge() {
    let openings = [door(1, 1, 0.4, 40.0), door(2, 1, 0.5, 40.0)];
    assert_eq!(spans(&wall(), &openings), vec![(0.0, 0.3), (0.6, 1.0)]);
}

#[test]
fn test_opening_wider_than_wall_leaves_nothing() {
    assert!(wall_segments(&wall(), &[door(1, 1, 0.5, 400.0)]).is_empty());
}

#[test]
fn test_other_walls_openings_ignored() {
    assert_eq!(spans(&wall(), &[door(1, 2, 0.5, 40.0)]), vec![(0.0, 1.0)]);
}

#[test]
fn test_zero_length_wall() {
    let w = Wall::new(1, Point::new(5.0, 5.0), Point::new(5.0, 5.0), 9.0);
    assert_eq!(spans(&w, &[door(1, 1, 0.5, 30.0)]), vec![(0.0, 1.0)]);
}

#[test]
fn test_segment_endpoints_lie_on_wall() {
    let segments = wall_segments(&wall(), &[door(1, 1, 0.5, 40.0)]);
    assert_eq!(segments[0].start, Point::new(0.0, 0.0));
    assert!((segments[0].end.x - 160.0).abs() < 1e-9);
    assert_eq!(segments[0].end.y, 0.0);
    assert!((segments[1].length() - 160.0).abs() < 1e-9);
}

#[test]
fn test_all_walls_in_order() {
    let walls = vec![
        wall(),
        Wall::new(2, Point::new(400.0, 0.0), Point::new(400.0, 200.0), 9.0),
    ];
    let all = all_wall_segments(&walls, &[door(1, 2, 0.5, 20.0)]);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].0, 1);
    assert_eq!(all[0].1.len(), 1);
    assert_eq!(all[1].1.len(), 2);
}
