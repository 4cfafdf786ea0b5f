pub mod builder;
pub mod report;

pub use builder::{build, digit_count, report_len, required_bytes};
pub use report::Report;
