pub mod document;
pub mod handle;
pub mod metadata;

pub use crate::types::identifiers::{Generation, ReportVersion};
pub use document::{Document, DocumentSnapshot, DocumentState};
pub use handle::{ReadHandle, ReadOutcome};
pub use metadata::ReportMetadata;
