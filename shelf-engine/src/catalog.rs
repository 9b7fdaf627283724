// ---------------------------------------------------------------------------
// Catalog loading
// ---------------------------------------------------------------------------
//
// Reads the book catalog from a headed CSV file. Only the `title` and
// `authors` columns are used; any other columns are ignored. Empty cells
// become empty strings; rows with more fields than the header are skipped.
// ---------------------------------------------------------------------------

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::ShelfError;
use crate::types::Item;

fn column_position(headers: &csv::StringRecord, column: &str) -> Result<usize, ShelfError> {
	headers
		.iter()
		.position(|h| h == column)
		.ok_or_else(|| ShelfError::CatalogLoad(format!("missing required column `{}`", column)))
}

/// Load the catalog from a CSV file on disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Item>, ShelfError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|e| match e.kind() {
		io::ErrorKind::NotFound => {
			ShelfError::CatalogLoad(format!("catalog file not found: {}", path.display()))
		}
		_ => ShelfError::CatalogLoad(format!("cannot open {}: {}", path.display(), e)),
	})?;

	let items = load_reader(file)?;
	tracing::info!(path = %path.display(), items = items.len(), "Catalog loaded");
	Ok(items)
}

/// Load the catalog from any CSV byte source.
///
/// Rows shorter than the header keep their missing cells as empty strings.
/// Rows longer than the header, or that fail to decode, are skipped.
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<Item>, ShelfError> {
	let mut rdr = csv::ReaderBuilder::new()
		.has_headers(true)
		.flexible(true)
		.from_reader(reader);

	let headers = rdr.headers()?.clone();
	let title_at = column_position(&headers, "title")?;
	let authors_at = column_position(&headers, "authors")?;

	let mut items = Vec::new();
	let mut skipped = 0usize;

	for result in rdr.records() {
		let record = match result {
			Ok(record) => record,
			Err(e) if e.is_io_error() => return Err(e.into()),
			Err(e) => {
				skipped += 1;
				tracing::warn!("Skipping malformed catalog row: {}", e);
				continue;
			}
		};

		if record.len() > headers.len() {
			skipped += 1;
			tracing::warn!(
				fields = record.len(),
				expected = headers.len(),
				"Skipping catalog row with too many fields"
			);
			continue;
		}

		let id = items.len();
		items.push(Item::new(
			id,
			record.get(title_at).unwrap_or(""),
			record.get(authors_at).unwrap_or(""),
		));
	}

	if skipped > 0 {
		tracing::warn!(skipped, kept = items.len(), "Malformed catalog rows skipped");
	}

	Ok(items)
}

/// Build a catalog from in-memory `(title, authors)` records. `None` fields
/// become empty strings.
pub fn from_records<I, T, A>(records: I) -> Vec<Item>
where
	I: IntoIterator<Item = (Option<T>, Option<A>)>,
	T: Into<String>,
	A: Into<String>,
{
	records
		.into_iter()
		.enumerate()
		.map(|(id, (title, authors))| {
			Item::new(
				id,
				title.map(Into::into).unwrap_or_default(),
				authors.map(Into::into).unwrap_or_default(),
			)
		})
		.collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
