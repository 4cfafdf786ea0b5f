use std::sync::Arc;

/// Read cursor for one open handle.
///
/// Reads are one-shot: the first read delivers the whole report and moves
/// the cursor to end-of-stream, whatever the report length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadHandle {
    delivered: Option<u64>,
}

impl ReadHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes already delivered through this handle.
    pub fn offset(&self) -> u64 {
        self.delivered.unwrap_or(0)
    }

    pub fn is_exhausted(&self) -> bool {
        self.delivered.is_some()
    }

    /// Move back to offset 0 so the next read delivers the current report.
    pub fn rewind(&mut self) {
        self.delivered = None;
    }

    pub(crate) fn mark_delivered(&mut self, len: usize) {
        self.delivered = Some(len as u64);
    }
}

/// Result of a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The whole current report. May be zero bytes.
    Delivered(Arc<Vec<u8>>),
    EndOfStream,
}

impl ReadOutcome {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ReadOutcome::Delivered(bytes) => bytes.as_slice(),
            ReadOutcome::EndOfStream => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadOutcome::EndOfStream)
    }
}
