// ---------------------------------------------------------------------------
// Ranker — top-K selection over similarity scores
// ---------------------------------------------------------------------------
//
// Pure functions that turn one item's similarity row into an ordered list of
// recommendation candidates. No side effects.
// ---------------------------------------------------------------------------

use std::cmp::Ordering;

/// Default number of recommendations per query.
pub const DEFAULT_K: usize = 5;

/// A scored candidate: catalog ordinal and cosine similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
	pub ordinal: usize,
	pub score: f64,
}

/// Clamp a requested result count to what a catalog of `item_count` items
/// can return for one query (every item except the query itself).
pub fn clamp_k(k: usize, item_count: usize) -> usize {
	k.min(item_count.saturating_sub(1))
}

/// Rank `scores` (one per catalog item, in catalog order) for the item at
/// `query`.
///
/// The query ordinal is removed by position before sorting, so an exact
/// duplicate of the query can still appear but the query never does. The
/// sort is stable: equal scores keep catalog order.
pub fn rank<I>(scores: I, query: usize, k: usize) -> Vec<Candidate>
where
	I: IntoIterator<Item = f64>,
{
	let mut candidates: Vec<Candidate> = scores
		.into_iter()
		.enumerate()
		.filter(|&(ordinal, _)| ordinal != query)
		.map(|(ordinal, score)| Candidate {
			ordinal,
			score: if score.is_finite() { score } else { 0.0 },
		})
		.collect();

	let k = clamp_k(k, candidates.len() + 1);
	if k == 0 {
		return Vec::new();
	}

	candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
	candidates.truncate(k);
	candidates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
