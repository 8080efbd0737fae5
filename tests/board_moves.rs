mod common;

use common::{board, dead_board, first_cell_rng, values};
use rand::rngs::StdRng;
use rand::SeedableRng;
use twenty48::board::{Board, BoardError, Direction};

#[test]
fn left_merges_pairs_once() {
    let b = board([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(values(&b.shift(Direction::Left))[0], [4, 4, 0, 0]);
}

#[test]
fn right_merges_from_the_far_end() {
    let b = board([[4, 2, 2, 4], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(values(&b.shift(Direction::Right))[0], [0, 4, 4, 4]);
}

#[test]
fn left_slides_over_gaps_before_merging() {
    let b = board([[2, 0, 2, 4], [0, 0, 0, 2], [8, 8, 0, 8], [0; 4]]);
    assert_eq!(
        values(&b.shift(Direction::Left)),
        [[4, 4, 0, 0], [2, 0, 0, 0], [16, 8, 0, 0], [0; 4]]
    );
}

#[test]
fn up_and_down_work_on_columns() {
    let b = board([[2, 0, 0, 4], [2, 0, 0, 0], [4, 0, 0, 4], [4, 0, 2, 8]]);

    assert_eq!(
        values(&b.shift(Direction::Up)),
        [[4, 0, 2, 8], [8, 0, 0, 8], [0, 0, 0, 0], [0, 0, 0, 0]]
    );
    assert_eq!(
        values(&b.shift(Direction::Down)),
        [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 8], [8, 0, 2, 8]]
    );
}

#[test]
fn shift_preserves_tile_sum_and_never_adds_tiles() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut b = Board::initialize(&mut rng);
    for step in 0..200 {
        let direction = Direction::ALL[step % 4];
        let shifted = b.shift(direction);
        assert_eq!(shifted.score(), b.score());
        assert!(shifted.tile_count() <= b.tile_count());
        b = shifted.spawn(&mut rng);
    }
}

#[test]
fn initialize_places_two_tiles() {
    let mut rng = StdRng::seed_from_u64(3);
    let b = Board::initialize(&mut rng);
    assert_eq!(b.tile_count(), 2);
    assert!(b.rows().iter().flatten().flatten().all(|v| *v == 2 || *v == 4));
}

#[test]
fn spawn_fills_first_empty_cell_with_step_rng() {
    let b = board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let spawned = b.spawn(&mut first_cell_rng());
    assert_eq!(spawned.get(0, 1), Some(2));
    assert_eq!(spawned.count_empty(), 14);
}

#[test]
fn spawn_on_full_board_is_a_no_op() {
    let b = dead_board();
    assert_eq!(b.spawn(&mut first_cell_rng()), b);
}

#[test]
fn spawned_values_are_mostly_twos() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut twos = 0;
    let mut fours = 0;
    for _ in 0..2000 {
        match Board::EMPTY.spawn(&mut rng).highest_tile() {
            Some(2) => twos += 1,
            Some(4) => fours += 1,
            other => panic!("unexpected spawn {:?}", other),
        }
    }
    assert!(fours > 100 && fours < 320, "fours = {}", fours);
    assert!(twos > fours);
}

#[test]
fn dead_board_has_no_move() {
    assert!(!dead_board().has_any_move());
    for direction in Direction::ALL {
        assert_eq!(dead_board().shift(direction), dead_board());
    }
}

#[test]
fn full_board_with_vertical_pair_still_moves() {
    let b = board([[2, 4, 2, 4], [2, 8, 4, 2], [4, 2, 8, 4], [2, 4, 2, 8]]);
    assert!(b.is_full());
    assert!(b.has_any_move());
}

#[test]
fn empty_board_counts() {
    assert_eq!(Board::EMPTY.count_empty(), 16);
    assert_eq!(Board::EMPTY.score(), 0);
    assert_eq!(Board::EMPTY.highest_tile(), None);
    assert!(Board::EMPTY.has_any_move());
}

#[test]
fn from_rows_rejects_non_powers_of_two() {
    let mut rows = [[None; 4]; 4];
    rows[2][1] = Some(6);
    assert!(matches!(
        Board::from_rows(rows),
        Err(BoardError::InvalidTile {
            row: 2,
            col: 1,
            value: 6
        })
    ));
}

#[test]
fn board_serializes_as_nested_rows() {
    let b = board([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(
        json,
        "[[2,null,null,null],[null,null,null,null],[null,null,null,null],[null,null,null,4]]"
    );
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);

    assert!(serde_json::from_str::<Board>(
        "[[3,null,null,null],[null,null,null,null],[null,null,null,null],[null,null,null,null]]"
    )
    .is_err());
}

#[test]
fn oversized_tiles_are_rejected_on_deserialize() {
    let json = "[[2147483648,2147483648,null,null],[null,null,null,null],\
                [null,null,null,null],[null,null,null,null]]";
    let err = serde_json::from_str::<Board>(json).unwrap_err();
    assert!(err.to_string().contains("expected a power of two"), "{}", err);
}
