use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelfError {
	#[error("Catalog load failed: {0}")]
	CatalogLoad(String),
	#[error("Empty catalog: no usable rows to index")]
	EmptyCatalog,
	#[error("Unknown item: {0:?}")]
	UnknownItem(String),
	#[error("Invalid params: {0}")]
	InvalidParams(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl ShelfError {
	pub fn code(&self) -> &str {
		match self {
			Self::CatalogLoad(_) => "SHELF_CATALOG_LOAD",
			Self::EmptyCatalog => "SHELF_EMPTY_CATALOG",
			Self::UnknownItem(_) => "SHELF_UNKNOWN_ITEM",
			Self::InvalidParams(_) => "SHELF_INVALID_PARAMS",
			Self::Io(_) => "SHELF_IO",
			Self::Serialization(_) => "SHELF_SERIALIZATION",
		}
	}

	pub fn to_json_rpc_error(&self) -> serde_json::Value {
		serde_json::json!({
			"shelfCode": self.code(),
			"message": self.to_string(),
		})
	}
}

impl From<csv::Error> for ShelfError {
	fn from(e: csv::Error) -> Self {
		Self::CatalogLoad(e.to_string())
	}
}
