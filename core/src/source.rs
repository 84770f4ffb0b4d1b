use alloc::vec::Vec;

use crate::protocol::{CategoryDetail, CategoryId, CategorySummary};

/// Where category and clue data comes from.
///
/// Implementations only fetch; filtering and sampling happen in the generator. Calls are made one at a time, each
/// awaited before the next one starts.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    type Error;

    /// Up to `count` categories with their clue counts.
    async fn fetch_categories(&self, count: u16) -> Result<Vec<CategorySummary>, Self::Error>;

    /// Title and full clue list of one category.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, Self::Error>;
}
