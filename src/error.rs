use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("Cannot reveal a cell once the game is over")]
    InvalidGameState,
    #[error("Cannot parse a position from {0:?}")]
    InvalidFormat(String),
    #[error("Invalid configuration: {mines} mines on a {size}x{size} board (expected 1 to {max_mines})")]
    InvalidConfiguration {
        size: usize,
        mines: usize,
        max_mines: usize,
    },
}
