use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportVersion(String);

impl ReportVersion {
    pub fn from_report(report: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(report);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ReportVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Number of successful writes the document has seen.
///
/// Generation 0 is the empty document created at registration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub const EMPTY: Generation = Generation(0);

    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}
