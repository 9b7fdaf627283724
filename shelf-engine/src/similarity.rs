use crate::vectorizer::SparseVector;

/// Dot product of two sparse vectors (merge over sorted indices).
pub fn sparse_dot(a: &SparseVector, b: &SparseVector) -> f64 {
	let (ai, av) = (a.indices(), a.values());
	let (bi, bv) = (b.indices(), b.values());
	let mut i = 0;
	let mut j = 0;
	let mut dot: f64 = 0.0;

	while i < ai.len() && j < bi.len() {
		match ai[i].cmp(&bi[j]) {
			std::cmp::Ordering::Less => i += 1,
			std::cmp::Ordering::Greater => j += 1,
			std::cmp::Ordering::Equal => {
				dot += (av[i] as f64) * (bv[j] as f64);
				i += 1;
				j += 1;
			}
		}
	}

	dot
}

/// Compute the magnitude (L2 norm) of a sparse vector.
pub fn compute_magnitude(v: &SparseVector) -> f64 {
	let mut sum: f64 = 0.0;
	for &x in v.values() {
		let xf = x as f64;
		sum += xf * xf;
	}
	sum.sqrt()
}

/// Cosine similarity using pre-computed magnitudes.
/// Returns 0.0 when either magnitude is zero, so degenerate items score 0
/// against everything, themselves included.
/// Result clamped to [0.0, 1.0]; TF-IDF weights are never negative.
pub fn cosine_similarity_with_magnitude(
	a: &SparseVector,
	b: &SparseVector,
	mag_a: f64,
	mag_b: f64,
) -> f64 {
	let denom = mag_a * mag_b;
	if denom == 0.0 {
		return 0.0;
	}

	let result = sparse_dot(a, b) / denom;
	if !result.is_finite() {
		return 0.0;
	}
	result.clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// SimilarityMatrix
// ---------------------------------------------------------------------------

/// Dense, symmetric item-by-item cosine similarity matrix, row-major.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
	size: usize,
	scores: Vec<f64>,
}

impl SimilarityMatrix {
	/// Materialize every pairwise score. Each unordered pair is computed once
	/// and mirrored, so the matrix is exactly symmetric.
	pub fn build(vectors: &[SparseVector]) -> Self {
		let size = vectors.len();
		let magnitudes: Vec<f64> = vectors.iter().map(compute_magnitude).collect();
		let mut scores = vec![0.0; size * size];

		for i in 0..size {
			for j in i..size {
				let s = cosine_similarity_with_magnitude(
					&vectors[i],
					&vectors[j],
					magnitudes[i],
					magnitudes[j],
				);
				scores[i * size + j] = s;
				scores[j * size + i] = s;
			}
		}

		Self { size, scores }
	}

	pub fn size(&self) -> usize {
		self.size
	}

	/// Scores of item `i` against every item, in catalog order.
	pub fn row(&self, i: usize) -> &[f64] {
		&self.scores[i * self.size..(i + 1) * self.size]
	}

	pub fn get(&self, i: usize, j: usize) -> f64 {
		self.scores[i * self.size + j]
	}
}
