use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The full grid of one game session. Always holds exactly the configured number of categories, each with exactly
/// the configured number of clues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
    size: Coord2,
}

impl Board {
    pub fn new(categories: Vec<Category>, config: GameConfig) -> Result<Self> {
        let (cols, rows) = config.size();
        if categories.len() != usize::from(cols)
            || categories
                .iter()
                .any(|category| category.clues.len() != usize::from(rows))
        {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self {
            categories,
            size: (cols, rows),
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size;
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, coords: Coord2) -> Result<&Clue> {
        let (x, y) = self.validate_coords(coords)?;
        Ok(&self.categories[usize::from(x)].clues[usize::from(y)])
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let (x, y) = self.validate_coords(coords)?;
        Ok(self.categories[usize::from(x)].clues[usize::from(y)].reveal())
    }
}

impl Index<Coord2> for Board {
    type Output = Clue;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.categories[x as usize].clues[y as usize]
    }
}
