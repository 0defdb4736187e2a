//! Board-level tests: invariants, adjacency, solvability, win detection.

use tui_fifteen::core::{is_solvable, is_too_easy, Board, SimpleRng};
use tui_fifteen::core::shuffle::generate;
use tui_fifteen::types::{GridSize, Tile};

fn tiles(values: &[i16]) -> Vec<Tile> {
    values
        .iter()
        .map(|&v| if v < 0 { None } else { Some(v as u8) })
        .collect()
}

#[test]
fn test_solved_board_for_every_size() {
    for size in [
        GridSize::Three,
        GridSize::Four,
        GridSize::Five,
        GridSize::Six,
    ] {
        let board = Board::solved(size);
        assert!(board.is_solved());
        assert_eq!(board.empty_pos(), size.cell_count() - 1);
        assert_eq!(board.tiles().len(), size.cell_count());
    }
}

#[test]
fn test_is_solved_exact_sequence_only() {
    let solved = Board::solved(GridSize::Four);
    assert!(solved.is_solved());

    // Any single transposition of two non-empty values breaks it.
    let base = solved.tiles().to_vec();
    for i in 0..14 {
        for j in i + 1..15 {
            let mut swapped = base.clone();
            swapped.swap(i, j);
            assert!(!Board::from_tiles(GridSize::Four, &swapped).is_solved());
        }
    }
}

#[test]
fn test_generated_boards_are_solvable_and_nontrivial() {
    // Parity even, strictly fewer than n-4 solved slots, across sizes/seeds.
    for seed in [1, 2, 3, 5, 8, 13, 21, 34, 55, 89] {
        let mut rng = SimpleRng::new(seed);
        for size in [
            GridSize::Three,
            GridSize::Four,
            GridSize::Five,
            GridSize::Six,
        ] {
            let board = generate(size, &mut rng);
            assert!(is_solvable(&board));
            assert!(board.solved_positions() < size.cell_count() - 4);
            assert!(!is_too_easy(&board));
        }
    }
}

#[test]
fn test_inversion_parity_examples() {
    // [2,1,...] has one inversion: unsolvable.
    let odd = Board::from_tiles(GridSize::Three, &tiles(&[2, 1, 3, 4, 5, 6, 7, 8, -1]));
    assert!(!is_solvable(&odd));

    // Reversing a 3-cycle keeps parity even.
    let even = Board::from_tiles(GridSize::Three, &tiles(&[2, 3, 1, 4, 5, 6, 7, 8, -1]));
    assert!(is_solvable(&even));

    // Parity rule does not change with board size.
    let odd4 = Board::from_tiles(
        GridSize::Four,
        &tiles(&[2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, -1]),
    );
    assert!(!is_solvable(&odd4));
}

#[test]
fn test_slide_round_trip_preserves_tiles() {
    let mut board = Board::solved(GridSize::Three);
    let before = board.tiles().to_vec();
    board.slide(7);
    board.slide(8);
    assert_eq!(board.tiles(), before.as_slice());
}

#[test]
fn test_adjacency_at_corners() {
    // Empty in the top-left corner of a 4x4: only two neighbors.
    let mut values: Vec<i16> = (1..16).map(|v| v as i16).collect();
    values.insert(0, -1);
    let board = Board::from_tiles(GridSize::Four, &tiles(&values));
    assert_eq!(board.empty_pos(), 0);

    let adjacent: Vec<usize> = (0..16).filter(|&p| board.is_adjacent_to_empty(p)).collect();
    assert_eq!(adjacent, vec![1, 4]);
}
