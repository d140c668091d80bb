use crate::types::Reviewer;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws up to `count` reviewers uniformly without replacement, never returning `author`.
///
/// The candidates are shuffled as a copy (Fisher-Yates) so the pool entry keeps its
/// order, the author is removed, and the first `count` survivors are returned.
pub fn draw<R: Rng + ?Sized>(
    candidates: &[Reviewer],
    author: &str,
    count: usize,
    rng: &mut R,
) -> Vec<Reviewer> {
    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);
    shuffled.retain(|r| r.handle != author);
    shuffled.truncate(count);
    shuffled
}
