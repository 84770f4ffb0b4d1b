use alloc::vec::Vec;
use rand::Rng;

use crate::protocol::{CategoryId, clean_text};
use crate::*;
pub use random::*;

mod random;

#[allow(async_fn_in_trait)]
pub trait BoardGenerator {
    async fn generate<S>(self, source: &S) -> core::result::Result<Board, SetupError<S::Error>>
    where
        S: TriviaSource + ?Sized;
}

/// Fills a board with categories and clues sampled uniformly at random from what the source offers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    config: GameConfig,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { seed, config }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    async fn generate<S>(self, source: &S) -> core::result::Result<Board, SetupError<S::Error>>
    where
        S: TriviaSource + ?Sized,
    {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        setup_board(source, self.config, &mut rng).await
    }
}

/// Chooses the categories for a new board: fetches the candidate pool, keeps those with enough clues to fill a
/// column and samples the configured number of distinct ids among them.
pub async fn select_category_ids<S, R>(
    source: &S,
    config: GameConfig,
    rng: &mut R,
) -> core::result::Result<Vec<CategoryId>, SetupError<S::Error>>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let pool = source
        .fetch_categories(config.candidate_pool)
        .await
        .map_err(SetupError::Source)?;
    let pool_size = pool.len();

    let min_clues = u32::from(config.clues_per_category);
    let mut candidates: Vec<CategoryId> = pool
        .into_iter()
        .filter(|summary| summary.clues_count >= min_clues)
        .map(|summary| summary.id)
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    log::debug!(
        "category pool: {} fetched, {} with at least {} clues",
        pool_size,
        candidates.len(),
        min_clues
    );

    let needed = usize::from(config.categories);
    let found = candidates.len();
    let ids = choose_distinct(rng, candidates, needed)
        .ok_or(GameError::NotEnoughCategories { found, needed })?;

    log::debug!("chosen categories: {:?}", ids);
    Ok(ids)
}

/// Fetches one category and samples the configured number of distinct clues from it, each starting hidden.
pub async fn load_category<S, R>(
    source: &S,
    id: CategoryId,
    config: GameConfig,
    rng: &mut R,
) -> core::result::Result<Category, SetupError<S::Error>>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let detail = source
        .fetch_category(id)
        .await
        .map_err(SetupError::Source)?;

    let needed = usize::from(config.clues_per_category);
    let found = detail.clues.len();
    let picked = choose_distinct(rng, detail.clues, needed)
        .ok_or(GameError::NotEnoughClues { id, found, needed })?;

    let title = clean_text(&detail.title);
    if title.is_empty() {
        log::warn!("category {} has no title", id);
    }

    let clues = picked
        .into_iter()
        .map(|clue| Clue::new(clean_text(&clue.question), clean_text(&clue.answer)))
        .collect();
    Ok(Category::new(title, clues))
}

/// Builds a complete board. Categories are loaded one after another, in the order their ids were chosen; the first
/// failure aborts the whole setup and nothing partial is returned.
pub async fn setup_board<S, R>(
    source: &S,
    config: GameConfig,
    rng: &mut R,
) -> core::result::Result<Board, SetupError<S::Error>>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let ids = select_category_ids(source, config, rng).await?;

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(load_category(source, id, config, rng).await?);
    }

    Ok(Board::new(categories, config)?)
}
