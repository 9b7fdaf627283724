use serde::{Deserialize, Serialize};

/// One catalog entry. `id` is the row position in the loaded catalog and
/// doubles as the row of the item's feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub id: usize,
	pub title: String,
	pub authors: String,
}

impl Item {
	pub fn new(id: usize, title: impl Into<String>, authors: impl Into<String>) -> Self {
		Self {
			id,
			title: title.into(),
			authors: authors.into(),
		}
	}

	/// Vectorizer input: title and authors joined by a single space.
	pub fn tag(&self) -> String {
		format!("{} {}", self.title, self.authors)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
	pub title: String,
	pub authors: String,
	pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
	pub items: usize,
	#[serde(rename = "vocabularySize")]
	pub vocabulary_size: usize,
	#[serde(rename = "degenerateItems")]
	pub degenerate_items: usize,
	pub precomputed: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tag_joins_title_and_authors() {
		let item = Item::new(0, "Dune", "Frank Herbert");
		assert_eq!(item.tag(), "Dune Frank Herbert");
	}

	#[test]
	fn tag_with_empty_fields() {
		assert_eq!(Item::new(0, "", "").tag(), " ");
		assert_eq!(Item::new(0, "Dune", "").tag(), "Dune ");
	}

	#[test]
	fn stats_serialize_camel_case() {
		let stats = IndexStats {
			items: 3,
			vocabulary_size: 7,
			degenerate_items: 1,
			precomputed: false,
		};
		let v = serde_json::to_value(&stats).unwrap();
		assert_eq!(v["vocabularySize"], 7);
		assert_eq!(v["degenerateItems"], 1);
	}
}
