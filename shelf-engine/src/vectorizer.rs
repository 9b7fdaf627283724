// ---------------------------------------------------------------------------
// TF-IDF Vectorizer
// ---------------------------------------------------------------------------
//
// Fits a fixed vocabulary and smoothed IDF weights over the full set of item
// tags, then turns each tag into an L2-normalized sparse feature vector.
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d)   = tf(t, d) * idf(t), then scaled so ||w(., d)|| = 1
//
// Vocabulary terms are indexed in lexicographic order so that two fits over
// the same input produce identical vectors.
// ---------------------------------------------------------------------------

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::tokenizer::tokenize;

// ---------------------------------------------------------------------------
// SparseVector
// ---------------------------------------------------------------------------

/// Sparse feature vector. `indices` is strictly increasing and aligned with
/// `values`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
	indices: Vec<u32>,
	values: Vec<f32>,
}

impl SparseVector {
	/// Build from `(index, value)` pairs. Pairs are sorted by index, zero
	/// values dropped.
	pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
		pairs.sort_by_key(|&(i, _)| i);
		pairs.dedup_by_key(|&mut (i, _)| i);
		let (indices, values) = pairs.into_iter().filter(|&(_, v)| v != 0.0).unzip();
		Self { indices, values }
	}

	pub fn indices(&self) -> &[u32] {
		&self.indices
	}

	pub fn values(&self) -> &[f32] {
		&self.values
	}

	/// An all-zero vector: the tag had no tokens left after stop-word removal.
	pub fn is_zero(&self) -> bool {
		self.indices.is_empty()
	}

	/// Value at dimension `index`, or 0.
	#[cfg(test)]
	fn get(&self, index: u32) -> f32 {
		match self.indices.binary_search(&index) {
			Ok(pos) => self.values[pos],
			Err(_) => 0.0,
		}
	}

	fn l2_normalize(&mut self) {
		let norm = self
			.values
			.iter()
			.map(|&v| (v as f64) * (v as f64))
			.sum::<f64>()
			.sqrt();
		if norm == 0.0 {
			return;
		}
		for v in &mut self.values {
			*v = (*v as f64 / norm) as f32;
		}
	}
}

// ---------------------------------------------------------------------------
// TfidfVectorizer
// ---------------------------------------------------------------------------

/// Vocabulary and IDF weights fitted once over the whole catalog.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
	/// term -> dimension
	vocabulary: HashMap<String, u32>,
	/// IDF weight per dimension
	idf: Vec<f32>,
}

impl TfidfVectorizer {
	/// Learn the vocabulary and document frequencies from `documents`.
	///
	/// Every document counts toward `n`, including ones that tokenize to
	/// nothing.
	pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
		let n = documents.len() as f64;
		let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();

		for doc in documents {
			let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
			for term in unique {
				*doc_freq.entry(term).or_insert(0) += 1;
			}
		}

		let mut vocabulary = HashMap::with_capacity(doc_freq.len());
		let mut idf = Vec::with_capacity(doc_freq.len());
		for (dim, (term, df)) in doc_freq.into_iter().enumerate() {
			idf.push((((1.0 + n) / (1.0 + df as f64)).ln() + 1.0) as f32);
			vocabulary.insert(term, dim as u32);
		}

		Self { vocabulary, idf }
	}

	/// Fit on `documents` and return the fitted vectorizer with one vector
	/// per document, in input order.
	pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
		let vectorizer = Self::fit(documents);
		let vectors = documents
			.iter()
			.map(|d| vectorizer.transform(d.as_ref()))
			.collect();
		(vectorizer, vectors)
	}

	/// Vectorize a single document against the fitted vocabulary. Terms
	/// outside the vocabulary are ignored.
	pub fn transform(&self, document: &str) -> SparseVector {
		let mut tf: HashMap<u32, f32> = HashMap::new();
		for token in tokenize(document) {
			if let Some(&dim) = self.vocabulary.get(&token) {
				*tf.entry(dim).or_insert(0.0) += 1.0;
			}
		}

		let pairs = tf
			.into_iter()
			.map(|(dim, count)| (dim, count * self.idf[dim as usize]))
			.collect();
		let mut vector = SparseVector::from_pairs(pairs);
		vector.l2_normalize();
		vector
	}

	pub fn vocabulary_size(&self) -> usize {
		self.idf.len()
	}

	/// Dimension assigned to `term`, if it survived fitting.
	pub fn dimension(&self, term: &str) -> Option<u32> {
		self.vocabulary.get(term).copied()
	}

	pub fn idf(&self, term: &str) -> Option<f32> {
		self.dimension(term).map(|d| self.idf[d as usize])
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
