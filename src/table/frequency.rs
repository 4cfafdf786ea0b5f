use std::slice;

use crate::tokenize::tokenize;
use crate::types::ReportError;

/// A unique word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Box<[u8]>,
    count: u64,
}

impl WordEntry {
    pub fn word(&self) -> &[u8] {
        &self.word
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Word counts kept in ascending byte order of the word.
///
/// Lives for one write: built from the input, rendered, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<WordEntry>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `buffer` and count every word in it.
    pub fn from_buffer(buffer: &[u8]) -> Result<Self, ReportError> {
        let mut table = Self::new();
        for word in tokenize(buffer).words() {
            table.insert(word)?;
        }
        Ok(table)
    }

    /// Count one occurrence of `word`.
    ///
    /// Matching is exact and case-sensitive. A new word goes immediately
    /// before the first entry that is not less than it.
    pub fn insert(&mut self, word: &[u8]) -> Result<(), ReportError> {
        match self.entries.binary_search_by(|entry| entry.word().cmp(word)) {
            Ok(found) => {
                self.entries[found].count += 1;
            }
            Err(at) => {
                let mut owned = Vec::new();
                owned
                    .try_reserve_exact(word.len())
                    .map_err(ReportError::allocation("word entry"))?;
                owned.extend_from_slice(word);

                self.entries
                    .try_reserve(1)
                    .map_err(ReportError::allocation("frequency table"))?;
                self.entries.insert(
                    at,
                    WordEntry {
                        word: owned.into_boxed_slice(),
                        count: 1,
                    },
                );
            }
        }

        debug_assert!(self.entries.windows(2).all(|w| w[0].word < w[1].word));
        Ok(())
    }

    pub fn get(&self, word: &[u8]) -> Option<u64> {
        self.entries
            .binary_search_by(|entry| entry.word().cmp(word))
            .ok()
            .map(|i| self.entries[i].count)
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total_occurrences(&self) -> u64 {
        self.entries.iter().map(WordEntry::count).sum()
    }

    pub fn iter(&self) -> slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordEntry;
    type IntoIter = slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
