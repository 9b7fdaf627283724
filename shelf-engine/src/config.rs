use std::path::PathBuf;

use clap::Parser;

use crate::index::IndexConfig;
use crate::ranker::DEFAULT_K;

#[derive(Parser, Debug)]
#[command(
	name = "shelf-engine",
	about = "Content-based book recommendations over JSON-RPC 2.0 / NDJSON stdio"
)]
pub struct CliArgs {
	/// Catalog CSV file with `title` and `authors` columns
	#[arg(long, env = "SHELF_CATALOG")]
	pub catalog: PathBuf,

	/// Recommendations returned when a request does not specify `k`
	#[arg(long, default_value_t = DEFAULT_K, env = "SHELF_DEFAULT_K")]
	pub default_k: usize,

	/// Precompute the full similarity matrix at startup
	#[arg(long, env = "SHELF_PRECOMPUTE")]
	pub precompute: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info", env = "SHELF_LOG_LEVEL")]
	pub log_level: String,
}

impl CliArgs {
	pub fn index_config(&self) -> IndexConfig {
		IndexConfig {
			precompute: self.precompute,
		}
	}
}
