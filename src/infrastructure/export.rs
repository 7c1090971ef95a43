//! CSV export of the aggregated result table.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::domain::JobRecord;

/// Fixed column schema of the result table.
const COLUMNS: [&str; 6] = [
    "title",
    "description",
    "jobType",
    "employer",
    "location",
    "retrievedAt",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Write(#[from] csv::Error),
}

/// Write all records to `path` as CSV.
///
/// The header row carries the fixed column names
/// `title,description,jobType,employer,location,retrievedAt`; absent fields
/// become empty cells and timestamps are RFC 3339. Quoting and escaping of
/// embedded delimiters and newlines follow standard CSV rules.
pub fn write_csv(path: &Path, records: &[JobRecord]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Create {
        path: path.display().to_string(),
        source,
    })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
