pub mod frequency;

pub use frequency::{FrequencyTable, WordEntry};
