//! Piece tests - spawning, transactional moves and pivot rotation

use tetris_mini::core::piece::{rotated, spawn_points, SHAPES};
use tetris_mini::core::{Grid, Piece};
use tetris_mini::types::{Point, Variant, BOARD_HEIGHT, BOARD_WIDTH};

fn pts(raw: [(i8, i8); 4]) -> [Point; 4] {
    raw.map(|(x, y)| Point::new(x, y))
}

/// Spawn `variant` and walk it to open space in the middle of an empty grid.
fn centered(variant: Variant, grid: &Grid) -> Piece {
    let mut piece = Piece::spawn(variant);
    for _ in 0..4 {
        assert!(piece.try_move(1, grid));
    }
    for _ in 0..6 {
        assert!(piece.try_fall(grid));
    }
    piece
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_all_variants_in_bounds() {
    for variant in Variant::ALL {
        let piece = Piece::spawn(variant);
        assert_eq!(piece.points().len(), 4);
        for p in piece.points() {
            assert!(p.x >= 0 && p.x < BOARD_WIDTH as i8, "{variant:?} {p:?}");
            assert!(p.y >= 0 && p.y < BOARD_HEIGHT as i8, "{variant:?} {p:?}");
        }
        assert!(piece.fits(&Grid::new()));
    }
}

#[test]
fn test_shape_table_literal() {
    assert_eq!(
        SHAPES,
        [
            [1, 3, 5, 7],
            [2, 4, 5, 7],
            [3, 5, 4, 6],
            [3, 5, 4, 7],
            [2, 3, 5, 7],
            [3, 5, 7, 6],
            [2, 3, 4, 5],
        ]
    );
}

#[test]
fn test_spawn_decoding() {
    assert_eq!(spawn_points(Variant::I), pts([(1, 0), (1, 1), (1, 2), (1, 3)]));
    assert_eq!(spawn_points(Variant::Z), pts([(0, 1), (0, 2), (1, 2), (1, 3)]));
    assert_eq!(spawn_points(Variant::S), pts([(1, 1), (1, 2), (0, 2), (0, 3)]));
    assert_eq!(spawn_points(Variant::T), pts([(1, 1), (1, 2), (0, 2), (1, 3)]));
    assert_eq!(spawn_points(Variant::L), pts([(0, 1), (1, 1), (1, 2), (1, 3)]));
    assert_eq!(spawn_points(Variant::J), pts([(1, 1), (1, 2), (1, 3), (0, 3)]));
    assert_eq!(spawn_points(Variant::O), pts([(0, 1), (1, 1), (0, 2), (1, 2)]));
}

// ============== Move Tests ==============

#[test]
fn test_i_piece_moves_to_wall_then_stops() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::I);
    assert_eq!(piece.points(), &pts([(1, 0), (1, 1), (1, 2), (1, 3)]));

    assert!(piece.try_move(-1, &grid));
    assert_eq!(piece.points(), &pts([(0, 0), (0, 1), (0, 2), (0, 3)]));

    assert!(!piece.try_move(-1, &grid));
    assert_eq!(piece.points(), &pts([(0, 0), (0, 1), (0, 2), (0, 3)]));
}

#[test]
fn test_move_right_stops_at_wall() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::I);
    let mut moves = 0;
    while piece.try_move(1, &grid) {
        moves += 1;
    }
    assert_eq!(moves, 8);
    assert!(piece.points().iter().all(|p| p.x == 9));
}

#[test]
fn test_move_blocked_by_settled_cell() {
    let mut grid = Grid::new();
    grid.set(2, 1, Some(Variant::O));

    let mut piece = Piece::spawn(Variant::I);
    let before = *piece.points();
    assert!(!piece.try_move(1, &grid));
    assert_eq!(piece.points(), &before);
}

// ============== Fall Tests ==============

#[test]
fn test_fall_until_landed() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::I);

    let mut falls = 0;
    while piece.try_fall(&grid) {
        falls += 1;
    }
    assert_eq!(falls, 16);
    assert_eq!(piece.points(), &pts([(1, 16), (1, 17), (1, 18), (1, 19)]));

    // Landed: further attempts leave it untouched.
    assert!(!piece.try_fall(&grid));
    assert_eq!(piece.points(), &pts([(1, 16), (1, 17), (1, 18), (1, 19)]));
}

#[test]
fn test_fall_blocked_by_stack() {
    let mut grid = Grid::new();
    grid.set(0, 3, Some(Variant::J));

    let mut piece = Piece::spawn(Variant::O);
    assert!(!piece.try_fall(&grid));
    assert_eq!(piece.points(), &spawn_points(Variant::O));
}

// ============== Rotation Tests ==============

#[test]
fn test_i_rotation_rejected_at_spawn() {
    // Pivot (1,1): the bottom cell would land at x = -1.
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::I);
    assert!(!piece.try_rotate(&grid));
    assert_eq!(piece.points(), &spawn_points(Variant::I));
}

#[test]
fn test_i_rotation_after_moving_off_wall() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::I);
    assert!(piece.try_move(1, &grid));
    assert!(piece.try_rotate(&grid));
    assert_eq!(piece.points(), &pts([(3, 1), (2, 1), (1, 1), (0, 1)]));
}

#[test]
fn test_rotation_may_reach_above_grid() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::I);
    assert!(piece.try_move(1, &grid));
    assert!(piece.try_rotate(&grid));

    // Horizontal I on row 1 rotates back up into row -1.
    assert!(piece.try_rotate(&grid));
    assert_eq!(piece.points(), &pts([(2, 2), (2, 1), (2, 0), (2, -1)]));
}

#[test]
fn test_four_rotations_restore_every_variant() {
    let grid = Grid::new();
    for variant in Variant::ALL {
        let mut piece = centered(variant, &grid);
        let start = *piece.points();
        for turn in 0..4 {
            assert!(piece.try_rotate(&grid), "{variant:?} turn {turn}");
        }
        assert_eq!(piece.points(), &start, "{variant:?}");
    }
}

#[test]
fn test_o_rotation_keeps_square_but_shifts_up() {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::O);
    assert!(piece.try_rotate(&grid));
    assert_eq!(piece.points(), &pts([(1, 0), (1, 1), (0, 0), (0, 1)]));

    let mut cells: Vec<(i8, i8)> = piece.points().iter().map(|p| (p.x, p.y)).collect();
    cells.sort();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_rotation_blocked_by_settled_cell() {
    let mut grid = Grid::new();
    let mut piece = centered(Variant::T, &grid);
    let target = rotated(piece.points());
    let blocker = target
        .iter()
        .find(|p| !piece.points().contains(*p))
        .copied()
        .expect("rotation moves at least one cell");
    grid.set(blocker.x, blocker.y, Some(Variant::S));

    let before = *piece.points();
    assert!(!piece.try_rotate(&grid));
    assert_eq!(piece.points(), &before);
}
