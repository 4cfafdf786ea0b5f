pub mod tokenizer;

pub use tokenizer::{is_word_byte, tokenize, WordSpan, WordSpans};
