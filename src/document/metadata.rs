use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{Generation, ReportVersion};

/// Summary of the report currently held by a document.
// Field order is part of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generation: Generation,
    pub version: ReportVersion,
    pub unique_words: usize,
    pub total_words: u64,
    pub byte_len: usize,
    pub written_at: Option<DateTime<Utc>>, // informational only
}
