// Loading a page load's network records from a JSON export

use crate::error::Result;
use crate::record::NetworkRecord;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Bare(Vec<NetworkRecord>),
    Wrapped { records: Vec<NetworkRecord> },
}

/// Parse records from JSON text. Accepts either a bare array of records or
/// an object with a `records` array.
pub fn parse_records(content: &str) -> Result<Vec<NetworkRecord>> {
    let document: RecordsDocument = serde_json::from_str(content)?;
    let records = match document {
        RecordsDocument::Bare(records) => records,
        RecordsDocument::Wrapped { records } => records,
    };
    debug!("Parsed {} network records", records.len());
    Ok(records)
}

/// Read and parse the records file at `path`.
pub async fn load_records(path: &Path) -> Result<Vec<NetworkRecord>> {
    info!("Loading network records from {}", path.display());
    let content = tokio::fs::read_to_string(path).await?;
    let records = parse_records(&content)?;
    info!(
        "Loaded {} network records ({} successful)",
        records.len(),
        records.iter().filter(|r| r.is_successful()).count()
    );
    Ok(records)
}
