use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use super::handle::{ReadHandle, ReadOutcome};
use super::metadata::ReportMetadata;
use crate::report::Report;
use crate::table::FrequencyTable;
use crate::types::identifiers::{Generation, ReportVersion};
use crate::types::{ReportError, TransferError};

/// What a document holds between writes.
#[derive(Debug, Clone)]
pub enum DocumentState {
    Empty,
    Ready {
        report: Report,
        generation: Generation,
        written_at: DateTime<Utc>,
    },
}

impl DocumentState {
    pub fn generation(&self) -> Generation {
        match self {
            DocumentState::Empty => Generation::EMPTY,
            DocumentState::Ready { generation, .. } => *generation,
        }
    }
}

/// The current report and its metadata, captured under one lock.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    pub report: Arc<Vec<u8>>,
    pub metadata: ReportMetadata,
}

/// The single overwritable document.
///
/// Every write replaces the report wholesale. Reads see either the old
/// report or the new one, never a mix.
#[derive(Debug)]
pub struct Document {
    state: RwLock<DocumentState>,
    // Served while the state is `Empty`.
    empty: Report,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            state: RwLock::new(DocumentState::Empty),
            empty: Report::empty(),
        }
    }

    fn current<'a>(&'a self, state: &'a DocumentState) -> &'a Report {
        match state {
            DocumentState::Empty => &self.empty,
            DocumentState::Ready { report, .. } => report,
        }
    }

    /// Replace the report with the word counts of `input`.
    ///
    /// Returns the number of bytes accepted, always `input.len()`. On
    /// failure the previous report stays in place.
    pub fn write(&self, input: &[u8]) -> Result<usize, ReportError> {
        let mut state = self.state.write();

        let table = FrequencyTable::from_buffer(input)?;
        let report = Report::render(&table)?;
        drop(table);

        let generation = state.generation().next();
        debug!(
            generation = generation.get(),
            input_bytes = input.len(),
            unique_words = report.unique_words(),
            report_bytes = report.len(),
            "document rewritten"
        );

        *state = DocumentState::Ready {
            report,
            generation,
            written_at: Utc::now(),
        };
        Ok(input.len())
    }

    /// One-shot read at `offset` into a destination of `capacity` bytes.
    ///
    /// Offset 0 yields the whole current report; any other offset is
    /// end-of-stream. A destination smaller than the report gets nothing.
    pub fn read_at(&self, offset: u64, capacity: usize) -> Result<ReadOutcome, TransferError> {
        if offset != 0 {
            return Ok(ReadOutcome::EndOfStream);
        }

        let bytes = {
            let state = self.state.read();
            self.current(&state).shared_bytes()
        };
        if bytes.len() > capacity {
            return Err(TransferError::DestinationTooSmall {
                required: bytes.len(),
                available: capacity,
            });
        }
        Ok(ReadOutcome::Delivered(bytes))
    }

    /// Read through `handle`, advancing it only when bytes were delivered.
    pub fn read(
        &self,
        handle: &mut ReadHandle,
        capacity: usize,
    ) -> Result<ReadOutcome, TransferError> {
        if handle.is_exhausted() {
            return Ok(ReadOutcome::EndOfStream);
        }

        let outcome = self.read_at(0, capacity)?;
        handle.mark_delivered(outcome.len());
        Ok(outcome)
    }

    pub fn generation(&self) -> Generation {
        self.state.read().generation()
    }

    pub fn version(&self) -> ReportVersion {
        let state = self.state.read();
        self.current(&state).version().clone()
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self.state.read(), DocumentState::Empty)
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let state = self.state.read();
        let report = self.current(&state);
        let written_at = match &*state {
            DocumentState::Empty => None,
            DocumentState::Ready { written_at, .. } => Some(*written_at),
        };

        DocumentSnapshot {
            report: report.shared_bytes(),
            metadata: ReportMetadata {
                generation: state.generation(),
                version: report.version().clone(),
                unique_words: report.unique_words(),
                total_words: report.total_words(),
                byte_len: report.len(),
                written_at,
            },
        }
    }
}
