//! Deterministic word-frequency document engine.
//!
//! `wordfreq-core` holds a single overwritable document. Writing raw bytes
//! replaces it with a report of every alphanumeric word and its count, one
//! `word count` line per word in ascending byte order. Reads are one-shot:
//! the whole report is delivered at offset 0, then the handle is at
//! end-of-stream.

pub mod device;
pub mod document;
pub mod logging;
pub mod report;
pub mod table;
pub mod tokenize;
pub mod types;
