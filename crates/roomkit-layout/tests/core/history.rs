use proptest::prelude::*;
use roomkit_layout::History;

#[test]
fn test_set_undo_redo() {
    let mut history = History::new("empty");
    history.set_state("A");
    history.set_state("B");

    assert!(history.undo());
    assert_eq!(*history.state(), "A");
    assert!(history.can_undo());
    assert!(history.can_redo());

    assert!(history.redo());
    assert_eq!(*history.state(), "B");
    assert!(!history.can_redo());
}

#[test]
fn test_undo_redo_are_noops_on_empty_stacks() {
    let mut history = History::new(0);
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(*history.state(), 0);
}

#[test]
fn test_set_state_clears_future() {
    let mut history = History::new(0);
    history.set_state(1);
    history.set_state(2);
    history.undo();
    history.set_state(3);
    assert!(!history.can_redo());
    assert!(!history.redo());
    assert_eq!(*history.state(), 3);
    history.undo();
    assert_eq!(*history.state(), 1);
}

#[test]
fn test_update_applies_function_to_present() {
    let mut history = History::new(vec![1]);
    history.update(|v| {
        let mut next = v.clone();
        next.push(2);
        next
    });
    assert_eq!(history.state(), &vec![1, 2]);
    history.undo();
    assert_eq!(history.state(), &vec![1]);
}

#[test]
fn test_depth_limit_drops_oldest() {
    let mut history = History::with_depth(0, 3);
    for i in 1..=5 {
        history.set_state(i);
    }
    assert_eq!(history.undo_depth(), 3);
    while history.undo() {}
    assert_eq!(*history.state(), 2);
}

#[test]
fn test_rollback_leaves_no_redo() {
    let mut history = History::new('a');
    history.set_state('b');
    history.replace_present('c');
    assert!(history.rollback());
    assert_eq!(*history.state(), 'a');
    assert!(!history.can_redo());
}

#[derive(Debug, Clone)]
enum Op {
    Set(i32),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Set),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

proptest! {
    #[test]
    fn prop_flags_track_stack_emptiness(ops in prop::collection::vec(op(), 0..60)) {
        let mut history = History::new(0);
        let mut undo_depth = 0usize;
        let mut redo_depth = 0usize;
        for op in ops {
            match op {
                Op::Set(v) => {
                    history.set_state(v);
                    undo_depth += 1;
                    redo_depth = 0;
                }
                Op::Undo => {
                    let moved = history.undo();
                    prop_assert_eq!(moved, undo_depth > 0);
                    if moved {
                        undo_depth -= 1;
                        redo_depth += 1;
                    }
                }
                Op::Redo => {
                    let moved = history.redo();
                    prop_assert_eq!(moved, redo_depth > 0);
                    if moved {
                        redo_depth -= 1;
                        undo_depth += 1;
                    }
                }
            }
            prop_assert_eq!(history.can_undo(), undo_depth > 0);
            prop_assert_eq!(history.can_redo(), redo_depth > 0);
        }
    }
}
