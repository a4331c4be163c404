use crate::{Board, Cell, GameError, Position};
use rand::Rng;
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Won and Lost accept no further reveals until a reset.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// A safe cell was revealed and the game continues.
    Revealed,
    /// The revealed cell held a mine; the game is lost.
    MineHit,
    /// The reveal uncovered the last safe cell; the game is won.
    Won,
    /// The cell was revealed before this call; nothing changed.
    AlreadyRevealed,
}

/// What a single [`Board::reveal_cell`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub kind: RevealKind,
    /// Adjacent-mine count of the targeted cell, 0 for a mine hit.
    pub adjacent_mines: u8,
    /// Every position revealed by this call, the targeted cell first.
    pub revealed: Vec<Position>,
}

impl RevealOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self.kind, RevealKind::MineHit | RevealKind::Won)
    }

    fn single(kind: RevealKind, adjacent_mines: u8, pos: Position) -> Self {
        Self {
            kind,
            adjacent_mines,
            revealed: vec![pos],
        }
    }
}

impl Board {
    pub fn reveal_cell(&mut self, pos: Position) -> Result<RevealOutcome, GameError> {
        if !self.is_within_bounds(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        if self.state.is_terminal() {
            return Err(GameError::InvalidGameState);
        }

        let cell = self.cells[[pos.row, pos.col]];
        if cell.revealed {
            return Ok(RevealOutcome::single(
                RevealKind::AlreadyRevealed,
                cell.adjacent_mines,
                pos,
            ));
        }

        self.cells[[pos.row, pos.col]].revealed = true;
        self.revealed_count += 1;

        if cell.has_mine {
            self.state = GameState::Lost;
            return Ok(RevealOutcome::single(RevealKind::MineHit, 0, pos));
        }

        let mut revealed = vec![pos];
        if cell.adjacent_mines == 0 {
            self.flood_reveal(pos, &mut revealed);
        }

        let kind = if self.is_won() {
            self.state = GameState::Won;
            RevealKind::Won
        } else {
            RevealKind::Revealed
        };
        Ok(RevealOutcome {
            kind,
            adjacent_mines: cell.adjacent_mines,
            revealed,
        })
    }

    /// Breadth-first auto-reveal from a zero-count seed cell. Expands through
    /// the connected zero-count region and stops at the numbered frontier;
    /// mines are never auto-revealed.
    fn flood_reveal(&mut self, seed: Position, revealed: &mut Vec<Position>) {
        let mut worklist: VecDeque<Position> = self.adjacent_positions(seed).collect();
        let mut visited: HashSet<Position> = worklist.iter().copied().collect();

        while let Some(pos) = worklist.pop_front() {
            let cell = self.cells[[pos.row, pos.col]];
            if cell.revealed || cell.has_mine {
                continue;
            }

            self.cells[[pos.row, pos.col]].revealed = true;
            self.revealed_count += 1;
            revealed.push(pos);

            if cell.adjacent_mines == 0 {
                worklist.extend(self.adjacent_positions(pos).filter(|&p| visited.insert(p)));
            }
        }
    }

    /// Discards the round in progress and deals a fresh mine layout. Valid
    /// from any state, including mid-round.
    pub fn reset_game(&mut self) {
        self.reset_game_with(&mut rand::thread_rng());
    }

    /// [`Board::reset_game`] with an explicit random source.
    pub fn reset_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::default();
        }
        self.mine_positions.clear();
        self.revealed_count = 0;
        self.state = GameState::Playing;
        self.place_mines(rng);
        self.compute_adjacent_counts();
    }

    /// Rejection sampling: draw candidates until `total_mines` distinct
    /// positions are mined.
    pub(crate) fn place_mines<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.mine_positions.len() < self.total_mines {
            let pos = Position::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size));
            if self.mine_positions.insert(pos) {
                self.cells[[pos.row, pos.col]].has_mine = true;
            }
        }
        log::debug!(
            "placed {} mines on a {}x{} grid",
            self.total_mines,
            self.size,
            self.size
        );
    }

    pub(crate) fn compute_adjacent_counts(&mut self) {
        for pos in self.iter_positions() {
            if self.cells[[pos.row, pos.col]].has_mine {
                continue;
            }
            let count = self
                .adjacent_positions(pos)
                .filter(|p| self.cells[[p.row, p.col]].has_mine)
                .count() as u8;
            self.cells[[pos.row, pos.col]].adjacent_mines = count;
        }
    }
}
