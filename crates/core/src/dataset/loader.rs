//! Delimited-file loading for the title dataset.

use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info};

use super::types::{LoadError, RawTitleRow, TitleRecord};
use super::Dataset;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "title",
    "type",
    "rating",
    "release_year",
    "date_added",
    "duration",
    "country",
];

/// Load and normalize the dataset at `path`.
///
/// The whole file is read up front so the content fingerprint and the
/// parsed rows come from the same bytes.
pub fn load_dataset(path: &Path, delimiter: u8) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    info!("Loading dataset: {:?}", path);
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let fingerprint = format!("{:x}", Sha256::digest(&bytes));

    let records = parse_records(&bytes, delimiter)?;
    let dataset = Dataset::new(records).with_fingerprint(fingerprint);

    info!(
        "Loaded {} titles ({} movies, {} TV shows)",
        dataset.len(),
        dataset.movies().len(),
        dataset.tv_shows().len()
    );
    if dataset.unrecognized_count() > 0 {
        debug!(
            "{} titles have an unrecognized type and belong to no view",
            dataset.unrecognized_count()
        );
    }

    Ok(dataset)
}

/// Parse delimited text into normalized records.
///
/// Header names are trimmed before both the column check and field mapping.
pub fn parse_records(input: &[u8], delimiter: u8) -> Result<Vec<TitleRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = rdr.headers().map_err(malformed)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<RawTitleRow>() {
        let row = result.map_err(malformed)?;
        records.push(TitleRecord::from(row));
    }

    Ok(records)
}

fn malformed(e: csv::Error) -> LoadError {
    match e.position() {
        Some(pos) => LoadError::Malformed(format!("line {}: {}", pos.line(), e)),
        None => LoadError::Malformed(e.to_string()),
    }
}
