#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use source::*;
pub use types::*;

pub use trivito_protocol as protocol;

mod board;
mod clue;
mod error;
mod generator;
mod session;
mod source;
mod types;

/// Shape of a game: how many categories, how many clues per category, and how many candidate categories to draw them
/// from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    pub candidate_pool: u16,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: Coord = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: Coord = 5;
    pub const DEFAULT_CANDIDATE_POOL: u16 = 100;

    pub const fn new_unchecked(
        categories: Coord,
        clues_per_category: Coord,
        candidate_pool: u16,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            candidate_pool,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord, candidate_pool: u16) -> Self {
        let categories = categories.clamp(1, Coord::MAX);
        let clues_per_category = clues_per_category.clamp(1, Coord::MAX);
        let candidate_pool = candidate_pool.clamp(categories.into(), u16::MAX);
        Self::new_unchecked(categories, clues_per_category, candidate_pool)
    }

    pub const fn size(&self) -> Coord2 {
        (self.categories, self.clues_per_category)
    }

    pub const fn total_clues(&self) -> u16 {
        mult(self.categories, self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES,
            Self::DEFAULT_CLUES_PER_CATEGORY,
            Self::DEFAULT_CANDIDATE_POOL,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            QuestionShown => true,
            AnswerShown => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_six_by_five() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (6, 5));
        assert_eq!(config.total_clues(), 30);
        assert_eq!(config.candidate_pool, 100);
    }

    #[test]
    fn new_clamps_degenerate_values() {
        let config = GameConfig::new(0, 0, 0);

        assert_eq!(config.size(), (1, 1));
        assert_eq!(config.candidate_pool, 1);

        let config = GameConfig::new(8, 5, 3);
        assert_eq!(config.candidate_pool, 8);
    }
}
