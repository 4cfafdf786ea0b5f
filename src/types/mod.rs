pub mod errors;
pub mod identifiers;

pub use errors::{ReportError, TransferError};
pub use identifiers::{Generation, ReportVersion};
