// ---------------------------------------------------------------------------
// RecommendationIndex — immutable catalog + feature index
// ---------------------------------------------------------------------------
//
// Built once from a loaded catalog: items, one TF-IDF vector per item, the
// title lookup, and optionally the full similarity matrix. Nothing mutates
// after `build`, so a shared `&RecommendationIndex` can serve queries from
// any number of threads.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::error::ShelfError;
use crate::ranker::{self, Candidate};
use crate::similarity::{compute_magnitude, cosine_similarity_with_magnitude, SimilarityMatrix};
use crate::types::{IndexStats, Item, Recommendation};
use crate::vectorizer::{SparseVector, TfidfVectorizer};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct IndexConfig {
	/// Materialize the full item-by-item similarity matrix at build time
	/// instead of scoring each query on demand.
	pub precompute: bool,
}

// ---------------------------------------------------------------------------
// RecommendationIndex
// ---------------------------------------------------------------------------

pub struct RecommendationIndex {
	items: Vec<Item>,
	vectorizer: TfidfVectorizer,
	vectors: Vec<SparseVector>,
	magnitudes: Vec<f64>,
	/// title -> ordinal of its first occurrence in the catalog. Later items
	/// sharing a title are still ranked and recommended, but cannot be
	/// selected by title.
	titles: HashMap<String, usize>,
	matrix: Option<SimilarityMatrix>,
	degenerate: Vec<usize>,
}

impl RecommendationIndex {
	/// Vectorize `items` and build the title lookup.
	///
	/// Item ids are reassigned to their position in `items` so that ids,
	/// vector rows and matrix rows always agree.
	pub fn build(items: Vec<Item>, config: &IndexConfig) -> Result<Self, ShelfError> {
		if items.is_empty() {
			return Err(ShelfError::EmptyCatalog);
		}

		let items: Vec<Item> = items
			.into_iter()
			.enumerate()
			.map(|(id, item)| Item { id, ..item })
			.collect();

		let tags: Vec<String> = items.iter().map(Item::tag).collect();
		let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&tags);
		let magnitudes: Vec<f64> = vectors.iter().map(compute_magnitude).collect();

		let mut titles = HashMap::with_capacity(items.len());
		let mut duplicate_titles = 0usize;
		for item in &items {
			if titles.contains_key(&item.title) {
				duplicate_titles += 1;
			} else {
				titles.insert(item.title.clone(), item.id);
			}
		}
		if duplicate_titles > 0 {
			tracing::debug!(
				duplicate_titles,
				"Duplicate titles resolve to their first occurrence"
			);
		}

		let degenerate: Vec<usize> = vectors
			.iter()
			.enumerate()
			.filter(|(_, v)| v.is_zero())
			.map(|(i, _)| i)
			.collect();
		if !degenerate.is_empty() {
			tracing::warn!(
				count = degenerate.len(),
				"Items with no indexable terms will score 0 against every other item"
			);
		}

		let matrix = if config.precompute {
			Some(SimilarityMatrix::build(&vectors))
		} else {
			None
		};

		tracing::info!(
			items = items.len(),
			vocabulary = vectorizer.vocabulary_size(),
			precomputed = matrix.is_some(),
			"Recommendation index built"
		);

		Ok(Self {
			items,
			vectorizer,
			vectors,
			magnitudes,
			titles,
			matrix,
			degenerate,
		})
	}

	// ── Lookups ───────────────────────────────────────────────────────────

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn item(&self, ordinal: usize) -> Option<&Item> {
		self.items.get(ordinal)
	}

	/// Every title in catalog order, duplicates included.
	pub fn list_titles(&self) -> Vec<&str> {
		self.items.iter().map(|i| i.title.as_str()).collect()
	}

	/// Resolve a title to the ordinal of its first occurrence.
	pub fn resolve(&self, title: &str) -> Result<usize, ShelfError> {
		self.titles
			.get(title)
			.copied()
			.ok_or_else(|| ShelfError::UnknownItem(title.to_string()))
	}

	/// Ordinals of items whose feature vector is all zeros.
	pub fn degenerate_items(&self) -> &[usize] {
		&self.degenerate
	}

	pub fn is_precomputed(&self) -> bool {
		self.matrix.is_some()
	}

	pub fn stats(&self) -> IndexStats {
		IndexStats {
			items: self.items.len(),
			vocabulary_size: self.vectorizer.vocabulary_size(),
			degenerate_items: self.degenerate.len(),
			precomputed: self.is_precomputed(),
		}
	}

	// ── Similarity ────────────────────────────────────────────────────────

	/// Cosine similarity between two catalog items. Degenerate items score 0.
	pub fn similarity(&self, a: usize, b: usize) -> f64 {
		if let Some(m) = &self.matrix {
			return m.get(a, b);
		}
		cosine_similarity_with_magnitude(
			&self.vectors[a],
			&self.vectors[b],
			self.magnitudes[a],
			self.magnitudes[b],
		)
	}

	fn scores_for(&self, query: usize) -> Vec<f64> {
		match &self.matrix {
			Some(m) => m.row(query).to_vec(),
			None => (0..self.items.len())
				.map(|other| self.similarity(query, other))
				.collect(),
		}
	}

	// ── Queries ───────────────────────────────────────────────────────────

	/// Top-`k` most similar items to the item titled `title`, highest score
	/// first. `k` is clamped to `len() - 1`.
	///
	/// Returns `ShelfError::UnknownItem` if the title is not in the catalog.
	pub fn rank(&self, title: &str, k: usize) -> Result<Vec<Candidate>, ShelfError> {
		let query = self.resolve(title)?;
		Ok(ranker::rank(self.scores_for(query), query, k))
	}

	/// Presentation-facing query: like [`rank`](Self::rank) but resolves to
	/// titles and authors, and maps an unknown title to an empty result.
	pub fn recommend(&self, title: &str, k: usize) -> Vec<Recommendation> {
		match self.rank(title, k) {
			Ok(candidates) => candidates
				.into_iter()
				.map(|c| {
					let item = &self.items[c.ordinal];
					Recommendation {
						title: item.title.clone(),
						authors: item.authors.clone(),
						score: c.score,
					}
				})
				.collect(),
			Err(e) => {
				tracing::debug!("No recommendations: {}", e);
				Vec::new()
			}
		}
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::from_records;

	fn build(records: &[(&str, &str)], precompute: bool) -> RecommendationIndex {
		let items = from_records(records.iter().map(|&(t, a)| (Some(t), Some(a))));
		RecommendationIndex::build(items, &IndexConfig { precompute }).unwrap()
	}

	fn sample() -> Vec<(&'static str, &'static str)> {
		vec![
			("The Hobbit", "J.R.R. Tolkien"),
			("The Fellowship of the Ring", "J.R.R. Tolkien"),
			("The Two Towers", "J.R.R. Tolkien"),
			("Pride and Prejudice", "Jane Austen"),
			("Emma", "Jane Austen"),
			("Dune", "Frank Herbert"),
			("Dune Messiah", "Frank Herbert"),
			("Children of Dune", "Frank Herbert"),
		]
	}

	fn titles(recs: &[Recommendation]) -> Vec<&str> {
		recs.iter().map(|r| r.title.as_str()).collect()
	}

	#[test]
	fn empty_catalog_is_rejected() {
		let err = RecommendationIndex::build(Vec::new(), &IndexConfig::default()).err();
		assert!(matches!(err, Some(ShelfError::EmptyCatalog)));
	}

	#[test]
	fn related_title_outranks_unrelated() {
		let idx = build(
			&[
				("A Tale", "J. Smith"),
				("A Tale of Two", "J. Smith"),
				("Cooking 101", "A. Chef"),
			],
			false,
		);
		let recs = idx.recommend("A Tale", 2);
		assert_eq!(recs.len(), 2);
		assert_eq!(titles(&recs), vec!["A Tale of Two", "Cooking 101"]);
		assert!(recs[0].score > recs[1].score);
		assert_eq!(recs[0].authors, "J. Smith");
	}

	#[test]
	fn single_item_catalog_returns_empty() {
		let idx = build(&[("Dune", "Frank Herbert")], false);
		assert!(idx.recommend("Dune", 5).is_empty());
	}

	#[test]
	fn never_recommends_itself() {
		let idx = build(&sample(), false);
		for item in idx.items() {
			let recs = idx.rank(&item.title, 10).unwrap();
			assert!(recs.iter().all(|c| c.ordinal != item.id));
		}
	}

	#[test]
	fn result_size_is_clamped() {
		let idx = build(&sample(), false);
		let n = idx.len();
		for k in [1, 3, 5, n - 1, n, n + 10] {
			assert_eq!(idx.recommend("Emma", k).len(), k.min(n - 1));
		}
	}

	#[test]
	fn default_sized_results() {
		let idx = build(&sample(), false);
		assert_eq!(idx.recommend("Dune", ranker::DEFAULT_K).len(), 5);
	}

	#[test]
	fn scores_are_non_increasing() {
		let idx = build(&sample(), false);
		for item in idx.items() {
			let recs = idx.recommend(&item.title, 7);
			for w in recs.windows(2) {
				assert!(w[0].score >= w[1].score);
			}
		}
	}

	#[test]
	fn same_author_books_cluster() {
		let idx = build(&sample(), false);
		let recs = idx.recommend("Dune", 2);
		assert_eq!(titles(&recs), vec!["Dune Messiah", "Children of Dune"]);
		let recs = idx.recommend("Emma", 1);
		assert_eq!(titles(&recs), vec!["Pride and Prejudice"]);
	}

	#[test]
	fn unknown_and_empty_titles_return_empty() {
		let idx = build(&sample(), false);
		assert!(idx.recommend("", 5).is_empty());
		assert!(idx.recommend("Not In Catalog", 5).is_empty());
		assert!(matches!(
			idx.rank("Not In Catalog", 5),
			Err(ShelfError::UnknownItem(_))
		));
	}

	#[test]
	fn repeated_queries_are_identical() {
		let idx = build(&sample(), false);
		assert_eq!(idx.recommend("The Hobbit", 5), idx.recommend("The Hobbit", 5));
	}

	#[test]
	fn precomputed_matches_lazy() {
		let lazy = build(&sample(), false);
		let eager = build(&sample(), true);
		assert!(eager.is_precomputed());
		for item in lazy.items() {
			assert_eq!(
				lazy.recommend(&item.title, 7),
				eager.recommend(&item.title, 7)
			);
		}
	}

	#[test]
	fn duplicate_title_resolves_to_first_occurrence() {
		let idx = build(
			&[
				("Collected Poems", "W. B. Yeats"),
				("Collected Poems", "Sylvia Plath"),
				("The Tower", "W. B. Yeats"),
			],
			false,
		);
		assert_eq!(idx.resolve("Collected Poems").unwrap(), 0);
		let recs = idx.rank("Collected Poems", 2).unwrap();
		assert!(recs.iter().all(|c| c.ordinal != 0));
		assert_eq!(recs.len(), 2);
	}

	#[test]
	fn exact_duplicate_is_recommended_but_query_excluded() {
		let idx = build(
			&[
				("Emma", "Jane Austen"),
				("Emma", "Jane Austen"),
				("Dune", "Frank Herbert"),
			],
			false,
		);
		let recs = idx.rank("Emma", 1).unwrap();
		assert_eq!(recs[0].ordinal, 1);
		assert!((recs[0].score - 1.0).abs() < 1e-6);
	}

	#[test]
	fn identical_tags_score_equally_against_third_item() {
		let idx = build(
			&[
				("Emma", "Jane Austen"),
				("Persuasion", "Jane Austen"),
				("Emma", "Jane Austen"),
				("Dune", "Frank Herbert"),
			],
			false,
		);
		for third in [1, 3] {
			assert_eq!(idx.similarity(0, third), idx.similarity(2, third));
		}
	}

	#[test]
	fn ties_follow_catalog_order() {
		let idx = build(
			&[
				("Alpha", "Writer"),
				("Beta", "Writer"),
				("Gamma", "Writer"),
				("Delta", "Writer"),
			],
			false,
		);
		let recs = idx.recommend("Gamma", 3);
		assert_eq!(titles(&recs), vec!["Alpha", "Beta", "Delta"]);
	}

	#[test]
	fn degenerate_items_score_zero() {
		let idx = build(
			&[("The", "Of"), ("Dune", "Frank Herbert"), ("Dune Messiah", "Frank Herbert")],
			false,
		);
		assert_eq!(idx.degenerate_items(), &[0]);
		assert_eq!(idx.similarity(0, 0), 0.0);
		let recs = idx.recommend("The", 2);
		assert_eq!(recs.len(), 2);
		assert!(recs.iter().all(|r| r.score == 0.0));
		assert_eq!(titles(&recs), vec!["Dune", "Dune Messiah"]);
	}

	#[test]
	fn list_titles_in_catalog_order() {
		let idx = build(&[("B", "x"), ("A", "y"), ("B", "z")], false);
		assert_eq!(idx.list_titles(), vec!["B", "A", "B"]);
	}

	#[test]
	fn stats_report_index_shape() {
		let idx = build(&[("The", ""), ("Dune", "Frank Herbert")], true);
		let stats = idx.stats();
		assert_eq!(stats.items, 2);
		assert_eq!(stats.vocabulary_size, 3);
		assert_eq!(stats.degenerate_items, 1);
		assert!(stats.precomputed);
	}

	#[test]
	fn item_ids_follow_position() {
		let items = vec![Item::new(42, "Dune", "Frank Herbert"), Item::new(7, "Emma", "Jane Austen")];
		let idx = RecommendationIndex::build(items, &IndexConfig::default()).unwrap();
		assert_eq!(idx.item(0).unwrap().id, 0);
		assert_eq!(idx.item(1).unwrap().id, 1);
	}

	#[test]
	fn index_is_shareable_across_threads() {
		fn assert_sync<T: Send + Sync>() {}
		assert_sync::<RecommendationIndex>();
	}
}
