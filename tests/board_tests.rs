//! Board tests: placement legality and neighbor order

use just_divide::core::{Board, PlaceError};
use just_divide::types::{Pos, GRID_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), GRID_SIZE);
    assert!(board.is_empty());
    assert!(!board.is_full());

    for pos in Board::positions() {
        assert_eq!(board.get(pos), Some(None), "cell {:?} should be empty", pos);
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(GRID_SIZE, 0)), None);
    assert_eq!(board.get(Pos::new(0, GRID_SIZE)), None);
}

#[test]
fn test_board_set_and_clear() {
    let mut board = Board::new();
    assert!(board.set(Pos::new(2, 3), Some(18)));
    assert_eq!(board.value(Pos::new(2, 3)), Some(18));
    assert_eq!(board.occupied_count(), 1);

    assert!(board.set(Pos::new(2, 3), None));
    assert!(board.is_empty());

    assert!(!board.set(Pos::new(4, 0), Some(2)));
}

#[test]
fn test_neighbors_follow_up_down_left_right() {
    let board = Board::new();

    let center: Vec<Pos> = board.neighbors_of(Pos::new(1, 1)).into_iter().collect();
    assert_eq!(
        center,
        vec![Pos::new(0, 1), Pos::new(2, 1), Pos::new(1, 0), Pos::new(1, 2)]
    );

    let corner: Vec<Pos> = board.neighbors_of(Pos::new(0, 0)).into_iter().collect();
    assert_eq!(corner, vec![Pos::new(1, 0), Pos::new(0, 1)]);

    let far_corner: Vec<Pos> = board.neighbors_of(Pos::new(3, 3)).into_iter().collect();
    assert_eq!(far_corner, vec![Pos::new(2, 3), Pos::new(3, 2)]);

    let edge = board.neighbors_of(Pos::new(0, 2));
    assert_eq!(edge.len(), 3);
}

#[test]
fn test_first_tile_goes_anywhere() {
    for pos in Board::positions() {
        let mut board = Board::new();
        assert_eq!(board.place(pos, 6), Ok(()));
        assert_eq!(board.value(pos), Some(6));
    }
}

#[test]
fn test_place_errors_leave_board_untouched() {
    let mut board = Board::new();
    board.place(Pos::new(1, 1), 8).unwrap();
    let before = board;

    assert_eq!(board.place(Pos::new(1, 1), 4), Err(PlaceError::OccupiedCell));
    assert_eq!(board.place(Pos::new(3, 3), 4), Err(PlaceError::IsolatedPlacement));
    assert_eq!(board.place(Pos::new(0, 4), 4), Err(PlaceError::OutOfBounds));
    assert_eq!(board, before);

    // Diagonal contact does not count as adjacency.
    assert_eq!(board.place(Pos::new(0, 0), 4), Err(PlaceError::IsolatedPlacement));
    assert_eq!(board.place(Pos::new(0, 1), 4), Ok(()));
}

#[test]
fn test_full_board() {
    let board = Board::from_rows([[Some(2); GRID_SIZE]; GRID_SIZE]);
    assert!(board.is_full());
    assert_eq!(board.occupied_count(), GRID_SIZE * GRID_SIZE);
    assert!(board.has_occupied_neighbor(Pos::new(0, 0)));
}
