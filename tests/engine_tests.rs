use minesweeper::{Board, GameError, GameState, Position, RevealKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn seeded_boards_share_a_layout() {
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let board_a = Board::with_rng(9, 10, &mut rng_a).expect("board");
    let board_b = Board::with_rng(9, 10, &mut rng_b).expect("board");

    let mines_a: HashSet<Position> = board_a.mine_positions().collect();
    let mines_b: HashSet<Position> = board_b.mine_positions().collect();
    assert_eq!(mines_a, mines_b);
}

#[test]
fn reset_with_same_seed_reproduces_construction_layout() {
    let mut rng = StdRng::seed_from_u64(7);
    let fresh = Board::with_rng(6, 5, &mut rng).expect("board");

    let mut reused = Board::with_rng(6, 5, &mut StdRng::seed_from_u64(1234)).expect("board");
    reused.reset_game_with(&mut StdRng::seed_from_u64(7));

    let fresh_mines: HashSet<Position> = fresh.mine_positions().collect();
    let reused_mines: HashSet<Position> = reused.mine_positions().collect();
    assert_eq!(fresh_mines, reused_mines);
}

#[test]
fn adjacency_matches_neighbor_mines() {
    let mut rng = StdRng::seed_from_u64(999);
    let board = Board::with_rng(8, 10, &mut rng).expect("board");

    let mut mine_count = 0;
    for pos in board.iter_positions() {
        let cell = board.get_cell(pos).unwrap();
        if cell.has_mine() {
            mine_count += 1;
            continue;
        }
        let adjacent = board
            .adjacent_positions(pos)
            .filter(|&p| board.get_cell(p).unwrap().has_mine())
            .count();
        assert_eq!(
            cell.adjacent_mines() as usize,
            adjacent,
            "adjacency mismatch at {}",
            pos
        );
    }
    assert_eq!(mine_count, board.total_mines());
}

#[test]
fn construction_rejects_too_many_mines() {
    // max_mines(4) == floor(16 * 0.35) == 5
    assert!(Board::new(4, 5).is_ok());
    assert!(matches!(
        Board::new(4, 6),
        Err(GameError::InvalidConfiguration { .. })
    ));
}

#[test]
fn playthrough_reveals_every_safe_cell() {
    let mines = [
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(1, 3),
    ];
    let mut board = Board::with_mine_positions(4, &mines).expect("board");

    for pos in board.iter_positions().collect::<Vec<_>>() {
        if board.get_cell(pos).unwrap().has_mine() {
            continue;
        }
        if board.get_cell(pos).unwrap().is_revealed() {
            continue;
        }
        let outcome = board.reveal_cell(pos).unwrap();
        assert_ne!(outcome.kind, RevealKind::MineHit);
    }

    assert_eq!(board.state(), GameState::Won);
    assert_eq!(board.revealed_count(), 12);
    for mine in &mines {
        assert!(!board.get_cell(*mine).unwrap().is_revealed());
    }
}

#[test]
fn outcome_positions_match_board_flags() {
    let mines = [
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(1, 3),
    ];
    let mut board = Board::with_mine_positions(4, &mines).expect("board");

    let outcome = board.reveal_cell(Position::new(3, 0)).unwrap();

    let unique: HashSet<Position> = outcome.revealed.iter().copied().collect();
    assert_eq!(unique.len(), outcome.revealed.len(), "duplicate reveals");
    assert_eq!(outcome.revealed.len(), board.revealed_count());
    for pos in &outcome.revealed {
        assert!(board.get_cell(*pos).unwrap().is_revealed());
        assert!(!board.get_cell(*pos).unwrap().has_mine());
    }
}

#[test]
fn reveal_after_game_over_is_rejected() {
    let mut board = Board::with_mine_positions(2, &[Position::new(0, 0)]).expect("board");

    let outcome = board.reveal_cell(Position::new(0, 0)).unwrap();
    assert_eq!(outcome.kind, RevealKind::MineHit);

    assert_eq!(
        board.reveal_cell(Position::new(1, 1)).unwrap_err(),
        GameError::InvalidGameState
    );
}

#[test]
fn lost_round_recovers_through_reset() {
    let mut board = Board::with_mine_positions(2, &[Position::new(0, 0)]).expect("board");
    board.reveal_cell(Position::new(0, 0)).unwrap();
    assert_eq!(board.state(), GameState::Lost);

    board.reset_game_with(&mut StdRng::seed_from_u64(3));

    assert_eq!(board.state(), GameState::Playing);
    assert_eq!(board.revealed_count(), 0);
    assert_eq!(board.mine_positions().count(), 1);
    assert!(board.reveal_cell(Position::new(0, 0)).is_ok());
}
