pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod position;

pub use board::{Board, Cell};
pub use config::MineRules;
pub use error::GameError;
pub use game::{GameState, RevealKind, RevealOutcome};
pub use position::Position;
