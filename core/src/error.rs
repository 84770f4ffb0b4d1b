use thiserror::Error;

use crate::protocol::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Only {found} categories have enough clues, {needed} required")]
    NotEnoughCategories { found: usize, needed: usize },
    #[error("Category {id} has {found} clues, {needed} required")]
    NotEnoughClues {
        id: CategoryId,
        found: usize,
        needed: usize,
    },
    #[error("Board setup was superseded by a newer restart")]
    StaleSetup,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure while building a fresh board, either from the trivia source itself or from the data it returned.
#[derive(Error, Debug)]
pub enum SetupError<E> {
    #[error("Trivia source failed: {0}")]
    Source(E),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl<E> SetupError<E> {
    pub fn game_error(&self) -> Option<GameError> {
        match self {
            Self::Source(_) => None,
            Self::Game(err) => Some(*err),
        }
    }
}
