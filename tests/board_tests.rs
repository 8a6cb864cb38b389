//! Board properties: bounds, exclusivity, line clearing, cascades

use std::thread;

use blockfall::core::{Board, BoardSnapshot, RandomShapes, SequenceShapes, Shape, ShapeCatalog};
use blockfall::types::{Command, CommandOutcome};

fn assert_consistent(snap: &BoardSnapshot) {
    if let Some(active) = snap.active {
        for (r, c) in active.shape.cells() {
            let (row, col) = (active.row + r as i16, active.col + c as i16);
            assert!(row >= 0 && row < snap.height as i16, "row {row} out of bounds");
            assert!(col >= 0 && col < snap.width as i16, "col {col} out of bounds");
            assert!(!snap.is_settled(row, col), "({row}, {col}) settled and active");
        }
    }
}

#[test]
fn test_random_play_never_breaks_invariants() {
    let board = Board::new(10, 20, ShapeCatalog::standard(), RandomShapes::seeded(42)).unwrap();
    let script = [
        Command::Left,
        Command::Rotate,
        Command::Down,
        Command::Right,
        Command::Right,
        Command::Rotate,
        Command::Down,
        Command::Left,
    ];

    for (i, command) in script.iter().cycle().take(5_000).enumerate() {
        board.apply_command(*command);
        assert_consistent(&board.snapshot());
        if board.is_over() {
            assert!(i > 0);
            break;
        }
    }
}

#[test]
fn test_concurrent_gravity_and_input() {
    let board = Board::new(10, 20, ShapeCatalog::standard(), RandomShapes::seeded(7)).unwrap();

    let gravity = {
        let board = board.clone();
        thread::spawn(move || {
            while !board.is_over() {
                board.apply_command(Command::Down);
            }
        })
    };
    let input = {
        let board = board.clone();
        thread::spawn(move || {
            let keys = [Command::Left, Command::Rotate, Command::Right];
            for command in keys.iter().cycle().take(20_000) {
                if board.is_over() {
                    break;
                }
                board.apply_command(*command);
            }
        })
    };
    let observer = {
        let board = board.clone();
        thread::spawn(move || {
            let mut snap = BoardSnapshot::default();
            for _ in 0..2_000 {
                board.snapshot_into(&mut snap);
                assert_consistent(&snap);
            }
        })
    };

    input.join().unwrap();
    observer.join().unwrap();
    gravity.join().unwrap();
    assert!(board.is_over());
}

#[test]
fn test_clear_lines_keeps_survivors_in_order() {
    // 3x6 grid, rows from the top (the O piece sits in rows 0-1):
    // 2: # . .
    // 3: # # #   full
    // 4: . # .
    // 5: # # #   full
    let o = Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap();
    let catalog = ShapeCatalog::new(vec![o]).unwrap();
    let board = Board::new(3, 6, catalog, SequenceShapes::repeat(0)).unwrap();
    board.with_state(|state| {
        let grid = state.grid_mut();
        grid.set(2, 0, true);
        for col in 0..3 {
            grid.set(3, col, true);
            grid.set(5, col, true);
        }
        grid.set(4, 1, true);
    });

    assert_eq!(board.clear_lines(), 2);

    let snap = board.snapshot();
    let rows: Vec<&[bool]> = snap.grid.chunks(3).collect();
    for row in &rows[..4] {
        assert_eq!(*row, [false, false, false]);
    }
    assert_eq!(rows[4], [true, false, false]);
    assert_eq!(rows[5], [false, true, false]);
    assert_eq!(snap.score, 200);
    assert_eq!(snap.lines, 2);
}

#[test]
fn test_blocked_shift_steps_down() {
    // I at (0, 3); wall of settled cells at column 2 on row 0 only.
    let board = Board::new(10, 20, ShapeCatalog::standard(), SequenceShapes::repeat(0)).unwrap();
    board.with_state(|state| {
        state.grid_mut().set(0, 2, true);
    });

    assert_eq!(
        board.apply_command(Command::Left),
        CommandOutcome::ShiftBlockedDropped
    );
    let active = board.snapshot().active.unwrap();
    assert_eq!((active.row, active.col), (1, 3));

    assert_eq!(board.apply_command(Command::Left), CommandOutcome::Moved);
}

#[test]
fn test_rejected_rotation_keeps_shape() {
    // I flat against the floor of a 10x2 board cannot stand up.
    let board = Board::new(10, 2, ShapeCatalog::standard(), SequenceShapes::repeat(0)).unwrap();
    let before = board.snapshot();
    assert_eq!(
        board.apply_command(Command::Rotate),
        CommandOutcome::RotationRejected
    );
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_freeze_spawns_exactly_one_piece() {
    let board = Board::new(10, 20, ShapeCatalog::standard(), SequenceShapes::new(vec![1, 2])).unwrap();
    let pieces_before = board.with_state(|s| s.pieces());

    while board.apply_command(Command::Down) == CommandOutcome::Moved {}

    let snap = board.snapshot();
    assert_eq!(snap.grid.iter().filter(|&&c| c).count(), 4);
    assert_eq!(board.with_state(|s| s.pieces()), pieces_before + 1);
    let next = snap.active.unwrap();
    assert_eq!(next.shape, *ShapeCatalog::standard().get(2).unwrap());
    assert_eq!((next.row, next.col), (0, 4));
}
