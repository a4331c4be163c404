use crate::{config, GameError, GameState, Position};
use itertools::iproduct;
use ndarray::Array2;
use rand::Rng;
use std::collections::HashSet;

/// One square of the grid. Mutated only by the engine; callers outside the
/// crate read through the accessors and never hold a mutable reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of mined neighbors, fixed once at placement time. Not
    /// meaningful for mined cells.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) total_mines: usize,
    pub(crate) cells: Array2<Cell>,
    pub(crate) mine_positions: HashSet<Position>,
    pub(crate) revealed_count: usize,
    pub(crate) state: GameState,
}

impl Board {
    /// Smallest playable board.
    pub const MIN_SIZE: usize = 2;
    /// Rows are addressed by a single letter, which caps the size at 26.
    pub const MAX_SIZE: usize = 26;

    pub fn new(size: usize, total_mines: usize) -> Result<Self, GameError> {
        Self::with_rng(size, total_mines, &mut rand::thread_rng())
    }

    /// Like [`Board::new`] with an explicit random source, so a seeded
    /// generator yields a reproducible mine layout.
    pub fn with_rng<R: Rng + ?Sized>(
        size: usize,
        total_mines: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Self::validate_config(size, total_mines)?;
        let mut board = Self::empty(size, total_mines);
        board.place_mines(rng);
        board.compute_adjacent_counts();
        Ok(board)
    }

    /// Builds a board with mines at exactly the given positions, subject to
    /// the same configuration rule as random placement.
    pub fn with_mine_positions(size: usize, mines: &[Position]) -> Result<Self, GameError> {
        if let Some(&outside) = mines.iter().find(|p| p.row >= size || p.col >= size) {
            return Err(GameError::OutOfBounds(outside));
        }
        let mine_positions: HashSet<Position> = mines.iter().copied().collect();
        Self::validate_config(size, mine_positions.len())?;

        let mut board = Self::empty(size, mine_positions.len());
        for &pos in &mine_positions {
            board.cells[[pos.row, pos.col]].has_mine = true;
        }
        board.mine_positions = mine_positions;
        board.compute_adjacent_counts();
        Ok(board)
    }

    fn empty(size: usize, total_mines: usize) -> Self {
        Self {
            size,
            total_mines,
            cells: Array2::default((size, size)),
            mine_positions: HashSet::with_capacity(total_mines),
            revealed_count: 0,
            state: GameState::Playing,
        }
    }

    fn validate_config(size: usize, mines: usize) -> Result<(), GameError> {
        let size_ok = (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size);
        if !size_ok || !config::is_valid_mine_count(size, mines) {
            return Err(GameError::InvalidConfiguration {
                size,
                mines,
                max_mines: config::max_mines(size),
            });
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_mines(&self) -> usize {
        self.total_mines
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.cells
            .get((pos.row, pos.col))
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// In-bounds neighbors of `pos`: 3 for a corner, 5 for an edge, 8 for an
    /// interior cell.
    pub fn adjacent_positions(&self, pos: Position) -> impl Iterator<Item = Position> {
        let size = self.size;
        pos.neighbors().filter(move |p| p.row < size && p.col < size)
    }

    /// Every position on the board in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        iproduct!(0..size, 0..size).map(|(row, col)| Position::new(row, col))
    }

    /// Borrowed view of the mine layout; the set itself is only mutated by
    /// placement and reset.
    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.mine_positions.iter().copied()
    }

    pub fn is_won(&self) -> bool {
        self.revealed_count == self.size * self.size - self.total_mines
    }

    /// Converts letter+number notation (e.g. "A1") to a [`Position`].
    /// A1 is the top-left corner; the letter selects the row.
    pub fn parse_position(&self, input: &str) -> Result<Position, GameError> {
        let invalid = || GameError::InvalidFormat(input.to_string());

        let mut chars = input.chars();
        let row_char = chars.next().ok_or_else(invalid)?;
        let column_digits = chars.as_str();
        if !row_char.is_ascii_alphabetic() || column_digits.is_empty() {
            return Err(invalid());
        }

        let row = (row_char.to_ascii_uppercase() as u8 - b'A') as usize;
        let column: usize = column_digits.parse().map_err(|_| invalid())?;

        let pos = Position::new(row, column.saturating_sub(1));
        if column == 0 || !self.is_within_bounds(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(pos)
    }
}
