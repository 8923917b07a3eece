//! Board state-machine integration tests.

use krow::{Board, BoardConfig, BoardError, Mark, MoveOutcome};

/// Play a scripted game, asserting every move is accepted.
fn play_all(board: &mut Board, moves: &[usize]) {
    for &index in moves {
        let outcome = board.play(index).expect("game should not be over");
        assert_eq!(outcome, MoveOutcome::Placed, "move {index} rejected");
    }
}

// =============================================================================
// Invariants Across Move Sequences
// =============================================================================

#[test]
fn test_count_invariant_holds_after_every_move() {
    let mut board = Board::standard();
    let cells = board.config().cell_count();

    for index in [4, 0, 8, 2, 6] {
        play_all(&mut board, &[index]);
        assert_eq!(board.move_count() + board.available_moves().len(), cells);
    }
}

#[test]
fn test_turn_alternates_by_move_parity() {
    let mut board = Board::standard();

    for (i, index) in [4, 0, 8, 2, 6, 3].into_iter().enumerate() {
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(board.turn(), expected, "wrong mover at move {i}");
        if board.is_game_over() {
            break;
        }
        play_all(&mut board, &[index]);
    }
}

#[test]
fn test_marks_never_revert() {
    let mut board = Board::standard();
    let script = [4, 0, 8, 2, 1, 7, 5];

    let mut placed: Vec<(usize, Mark)> = Vec::new();
    for &index in &script {
        if board.is_game_over() {
            break;
        }
        let mover = board.turn();
        play_all(&mut board, &[index]);
        placed.push((index, mover));

        for &(cell, mark) in &placed {
            let (row, col) = board.config().coords_of(cell);
            assert_eq!(board.mark_at(row, col), mark, "cell {cell} changed");
        }
    }
}

// =============================================================================
// Error Taxonomy
// =============================================================================

#[test]
fn test_premature_winner_query_fails() {
    let mut board = Board::standard();
    assert_eq!(board.winner(), Err(BoardError::NotOver));

    play_all(&mut board, &[4, 0]);
    assert_eq!(board.winner(), Err(BoardError::NotOver));
}

#[test]
fn test_moving_on_terminal_board_fails() {
    let mut board = Board::standard();
    play_all(&mut board, &[0, 3, 1, 4, 2]);
    assert!(board.is_game_over());

    assert_eq!(board.play(8), Err(BoardError::GameOver));
    assert_eq!(board.play_at(2, 2), Err(BoardError::GameOver));
}

#[test]
fn test_rejection_leaves_board_identical() {
    let mut board = Board::standard();
    play_all(&mut board, &[4, 0]);

    let grid_before = board.to_string();
    let turn_before = board.turn();
    let count_before = board.move_count();
    let available_before = board.available_moves().clone();

    assert_eq!(board.play(4).unwrap(), MoveOutcome::Rejected);
    assert_eq!(board.play(0).unwrap(), MoveOutcome::Rejected);

    assert_eq!(board.to_string(), grid_before);
    assert_eq!(board.turn(), turn_before);
    assert_eq!(board.move_count(), count_before);
    assert_eq!(board.available_moves(), &available_before);
}

// =============================================================================
// Cloning and Lookahead
// =============================================================================

#[test]
fn test_clone_divergence_preserves_original() {
    let mut original = Board::standard();
    play_all(&mut original, &[4, 0]);
    let rendered = original.to_string();

    let mut fork = original.clone();
    play_all(&mut fork, &[8, 2, 5]);

    assert_eq!(original.to_string(), rendered);
    assert_ne!(fork.to_string(), rendered);
}

#[test]
fn test_children_cover_every_available_move() {
    let mut board = Board::standard();
    play_all(&mut board, &[4, 0]);

    let children = board.children();
    assert_eq!(children.len(), board.available_moves().len());

    // every child differs from the parent in exactly one cell
    for child in &children {
        let config = board.config();
        let changed = (0..config.rows())
            .flat_map(|r| (0..config.cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| board.mark_at(r, c) != child.mark_at(r, c))
            .count();
        assert_eq!(changed, 1);
    }
}

// =============================================================================
// Geometry Variants
// =============================================================================

#[test]
fn test_four_by_four_connect_three() {
    let mut board = Board::new(BoardConfig::new(4, 4, 3));
    // X marches down the main diagonal: 0, 5, 10
    play_all(&mut board, &[0, 1, 5, 2, 10]);
    assert!(board.is_game_over());
    assert_eq!(board.winner().unwrap(), Mark::X);
}

#[test]
fn test_one_by_five_connect_five() {
    let mut board = Board::new(BoardConfig::new(1, 5, 5));
    // Alternating marks can never complete the row: forced draw
    play_all(&mut board, &[0, 1, 2, 3, 4]);
    assert!(board.is_game_over());
    assert_eq!(board.winner().unwrap(), Mark::Blank);
}

#[test]
fn test_rectangular_display_shape() {
    let board = Board::new(BoardConfig::new(2, 3, 2));
    assert_eq!(board.to_string(), "- - - \n- - - ");
}
