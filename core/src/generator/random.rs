use alloc::vec::Vec;
use rand::Rng;
use rand::seq::index;

/// Picks `amount` distinct items uniformly at random, without replacement. Returns `None` when there are fewer than
/// `amount` items to pick from.
///
/// The picked items come back in random order.
pub fn choose_distinct<T, R>(rng: &mut R, items: Vec<T>, amount: usize) -> Option<Vec<T>>
where
    R: Rng + ?Sized,
{
    if items.len() < amount {
        return None;
    }

    let picks = index::sample(rng, items.len(), amount);
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();

    // indices from `sample` are distinct, every slot is taken at most once
    picks.into_iter().map(|i| slots[i].take()).collect()
}
