// ---------------------------------------------------------------------------
// ShelfServer — JSON-RPC dispatcher
// ---------------------------------------------------------------------------
//
// Routes incoming JSON-RPC 2.0 requests (NDJSON over stdin) to read-only
// queries on a RecommendationIndex built at startup. A main `run()` loop,
// a `dispatch()` match, and free-standing handler functions per method.
// ---------------------------------------------------------------------------

use std::io::{self, BufRead};

use serde::Deserialize;

use crate::error::ShelfError;
use crate::index::RecommendationIndex;
use crate::protocol::*;
use crate::transport::NdjsonTransport;

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// JSON-RPC server answering catalog and recommendation queries.
pub struct ShelfServer {
	transport: NdjsonTransport,
	index: RecommendationIndex,
	default_k: usize,
}

impl ShelfServer {
	pub fn new(transport: NdjsonTransport, index: RecommendationIndex, default_k: usize) -> Self {
		Self {
			transport,
			index,
			default_k,
		}
	}

	/// Main loop: read JSON-RPC messages from stdin until EOF.
	pub fn run(&self) -> Result<(), ShelfError> {
		let stdin = io::stdin();
		self.serve(stdin.lock())
	}

	/// Serve requests from any line source.
	pub fn serve<R: BufRead>(&self, reader: R) -> Result<(), ShelfError> {
		for line_result in reader.lines() {
			let line = line_result?;
			if line.trim().is_empty() {
				continue;
			}

			let request: JsonRpcRequest = match serde_json::from_str(&line) {
				Ok(r) => r,
				Err(e) => {
					tracing::error!("Failed to parse request: {}", e);
					continue;
				}
			};

			self.dispatch(request);
		}

		Ok(())
	}

	// ── Dispatch ──────────────────────────────────────────────────────────

	fn dispatch(&self, req: JsonRpcRequest) {
		let id = req.id;
		let result = match req.method.as_str() {
			// -- Catalog -------------------------------------------------
			"catalog/titles" => Ok(handle_titles(&self.index)),
			"catalog/size" => Ok(serde_json::json!({ "count": self.index.len() })),
			"catalog/recommend" => handle_recommend(&self.index, self.default_k, req.params),

			// -- Index ---------------------------------------------------
			"index/stats" => handle_stats(&self.index),

			// -- Unknown -------------------------------------------------
			_ => {
				self.transport.write_error(
					id,
					METHOD_NOT_FOUND,
					format!("Unknown method: {}", req.method),
					None,
				);
				return;
			}
		};

		match result {
			Ok(value) => self.transport.write_response(id, value),
			Err(e) => {
				let code = match e {
					ShelfError::InvalidParams(_) => INVALID_PARAMS,
					_ => SHELF_ERROR,
				};
				self.transport
					.write_error(id, code, e.to_string(), Some(e.to_json_rpc_error()))
			}
		}
	}
}

// ---------------------------------------------------------------------------
// Param types
// ---------------------------------------------------------------------------

fn parse_params<T: serde::de::DeserializeOwned>(params: serde_json::Value) -> Result<T, ShelfError> {
	serde_json::from_value(params).map_err(|e| ShelfError::InvalidParams(e.to_string()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendParams {
	title: String,
	k: Option<usize>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_titles(index: &RecommendationIndex) -> serde_json::Value {
	serde_json::json!({ "titles": index.list_titles() })
}

fn handle_recommend(
	index: &RecommendationIndex,
	default_k: usize,
	params: serde_json::Value,
) -> Result<serde_json::Value, ShelfError> {
	let p: RecommendParams = parse_params(params)?;
	let k = p.k.unwrap_or(default_k);
	let found = index.resolve(&p.title).is_ok();
	let recommendations = index.recommend(&p.title, k);
	Ok(serde_json::json!({
		"title": p.title,
		"found": found,
		"recommendations": recommendations,
	}))
}

fn handle_stats(index: &RecommendationIndex) -> Result<serde_json::Value, ShelfError> {
	serde_json::to_value(index.stats()).map_err(|e| ShelfError::Serialization(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
