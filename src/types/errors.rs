use std::collections::TryReserveError;

use thiserror::Error;

/// Raised while building a table or rendering a report.
///
/// A write that hits this error leaves the document untouched.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to allocate {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl ReportError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| ReportError::Allocation { what, source }
    }
}

/// The byte copy between the caller and the document could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Destination holds {available} bytes but the report needs {required}")]
    DestinationTooSmall { required: usize, available: usize },

    #[error("Caller declared {declared} bytes but supplied only {available}")]
    SourceTooShort { declared: usize, available: usize },
}
