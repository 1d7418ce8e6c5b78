//! The title dataset: loading, normalization and the two content views.
//!
//! A [`Dataset`] is built once at startup and never mutated. Views are index
//! lists into the shared record table, computed when the dataset is built.

mod loader;
mod normalize;
mod types;

pub use loader::{load_dataset, parse_records, REQUIRED_COLUMNS};
pub use normalize::{extract_number, parse_date_added, parse_year};
pub use types::*;

/// Normalized records plus the Movies / TV Shows partition.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<TitleRecord>,
    movies: Vec<usize>,
    tv_shows: Vec<usize>,
    fingerprint: Option<String>,
}

impl Dataset {
    /// Build a dataset and partition it by content type.
    ///
    /// Records with an unrecognized type are kept in the table (they still
    /// count towards the content distribution) but belong to neither view.
    pub fn new(records: Vec<TitleRecord>) -> Self {
        let mut movies = Vec::new();
        let mut tv_shows = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            match record.content_type {
                ContentType::Movie => movies.push(idx),
                ContentType::TvShow => tv_shows.push(idx),
                ContentType::Unrecognized(_) => {}
            }
        }

        Self {
            records,
            movies,
            tv_shows,
            fingerprint: None,
        }
    }

    /// Attach the SHA-256 of the source file.
    pub fn with_fingerprint(mut self, fingerprint: String) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn movies(&self) -> ContentView<'_> {
        ContentView {
            records: &self.records,
            indices: &self.movies,
        }
    }

    pub fn tv_shows(&self) -> ContentView<'_> {
        ContentView {
            records: &self.records,
            indices: &self.tv_shows,
        }
    }

    /// Number of records that fell into neither view.
    pub fn unrecognized_count(&self) -> usize {
        self.records.len() - self.movies.len() - self.tv_shows.len()
    }
}

/// Read-only projection of the records with one content type, in dataset
/// order.
#[derive(Debug, Clone, Copy)]
pub struct ContentView<'a> {
    records: &'a [TitleRecord],
    indices: &'a [usize],
}

impl<'a> ContentView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a TitleRecord> + 'a {
        let records = self.records;
        let indices = self.indices;
        indices.iter().map(move |&idx| &records[idx])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// First `n` records as preview rows.
    pub fn head(&self, n: usize) -> Vec<TitleSummary> {
        self.iter().take(n).map(TitleSummary::from).collect()
    }
}
