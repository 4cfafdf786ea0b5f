use std::sync::Arc;

use crate::report::builder;
use crate::table::FrequencyTable;
use crate::types::{ReportError, ReportVersion};

/// A rendered word-frequency report. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    bytes: Arc<Vec<u8>>,
    version: ReportVersion,
    unique_words: usize,
    total_words: u64,
}

impl Report {
    /// The zero-byte report of an empty table.
    pub fn empty() -> Self {
        Report {
            bytes: Arc::new(Vec::new()),
            version: ReportVersion::from_report(&[]),
            unique_words: 0,
            total_words: 0,
        }
    }

    pub fn render(table: &FrequencyTable) -> Result<Self, ReportError> {
        let bytes = builder::build(table)?;
        let version = ReportVersion::from_report(&bytes);

        Ok(Report {
            bytes: Arc::new(bytes),
            version,
            unique_words: table.len(),
            total_words: table.total_occurrences(),
        })
    }

    /// Tokenize, tabulate and render `input` in one step.
    pub fn from_input(input: &[u8]) -> Result<Self, ReportError> {
        let table = FrequencyTable::from_buffer(input)?;
        Self::render(&table)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the report bytes.
    pub fn shared_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn version(&self) -> &ReportVersion {
        &self.version
    }

    pub fn unique_words(&self) -> usize {
        self.unique_words
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }
}
