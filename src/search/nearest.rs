//! Nearest-candidate selection.

use crate::board::{distance, Position};

/// Picks the candidate closest to `from`, or `None` when there are none.
///
/// Ties on distance resolve to the lexicographically smallest `(x, y)`, so
/// the result never depends on the iteration order of `candidates`.
pub fn nearest<I>(from: Position, candidates: I, home_bias: bool) -> Option<Position>
where
    I: IntoIterator<Item = Position>,
{
    candidates
        .into_iter()
        .map(|c| (distance(from, c, home_bias), c))
        .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
        .map(|(_, c)| c)
}
