//! Loading custom schemas from JSON files.

use std::fs;
use std::path::Path;

use adperf_model::Schema;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Load and check a JSON schema definition.
///
/// # Errors
///
/// Returns [`IngestError::FileRead`] when the file cannot be read and
/// [`IngestError::SchemaParse`] when it is not a usable schema.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let schema: Schema =
        serde_json::from_str(&contents).map_err(|source| IngestError::SchemaParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        schema = schema.name(),
        fields = schema.len(),
        "loaded schema"
    );
    Ok(schema)
}
