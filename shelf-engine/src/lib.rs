pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod protocol;
pub mod ranker;
pub mod server;
pub mod similarity;
pub mod stopwords;
pub mod tokenizer;
pub mod transport;
pub mod types;
pub mod vectorizer;

pub use error::ShelfError;
pub use index::{IndexConfig, RecommendationIndex};
pub use types::{Item, Recommendation};
