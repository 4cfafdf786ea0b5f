use std::iter::FusedIterator;

/// Word bytes are ASCII letters and digits. Everything else separates words.
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Location of a word inside the buffer it was tokenized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub len: usize,
}

impl WordSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The word bytes. `buffer` must be the buffer this span came from.
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.end()]
    }
}

/// Split `buffer` into maximal runs of word bytes.
///
/// The iterator is lazy and borrows the buffer; cloning it restarts
/// from the clone point without re-scanning what came before.
pub fn tokenize(buffer: &[u8]) -> WordSpans<'_> {
    WordSpans { buffer, pos: 0 }
}

#[derive(Debug, Clone)]
pub struct WordSpans<'a> {
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> WordSpans<'a> {
    /// Yield word slices instead of spans.
    pub fn words(self) -> impl Iterator<Item = &'a [u8]> + Clone + 'a {
        let buffer = self.buffer;
        self.map(move |span| span.slice(buffer))
    }
}

impl Iterator for WordSpans<'_> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<WordSpan> {
        let rest = &self.buffer[self.pos..];

        let Some(skip) = rest.iter().position(|&b| is_word_byte(b)) else {
            self.pos = self.buffer.len();
            return None;
        };
        let start = self.pos + skip;

        // A run touching the last byte is closed there.
        let len = self.buffer[start..]
            .iter()
            .position(|&b| !is_word_byte(b))
            .unwrap_or(self.buffer.len() - start);

        self.pos = start + len;
        Some(WordSpan { start, len })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len() - self.pos;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for WordSpans<'_> {}
