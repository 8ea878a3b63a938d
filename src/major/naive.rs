use regex::Regex;

use super::pattern::segmentation_regex;
use super::table::EncodingTable;
use super::MajorSystem;
use crate::data::COMMON_WORDS_EN;
use crate::error::MajorResult;

/// Spelling-based Major System encoder.
///
/// Splits a word into letter clusters from its table and ignores how the
/// word is pronounced, so silent and soft letters are still counted
/// ("office" gives 887, not 80).
#[derive(Debug, Clone)]
pub struct NaiveMajorSystem {
    table: EncodingTable,
    splitter: Regex,
    vocabulary: Vec<String>,
}

impl NaiveMajorSystem {
    pub fn new() -> Self {
        Self::with_table(EncodingTable::letters()).expect("built-in letter table compiles")
    }

    /// Encoder over a caller-supplied table, e.g. one with `th`/`sh` clusters.
    pub fn with_table(table: EncodingTable) -> MajorResult<Self> {
        let splitter = segmentation_regex(&table)?;
        Ok(Self {
            table,
            splitter,
            vocabulary: COMMON_WORDS_EN.iter().map(|w| w.to_string()).collect(),
        })
    }

    /// Replace the word list searched by `number_to_words`.
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// Letter clusters matched in `word`, left to right.
    pub fn pieces<'w>(&self, word: &'w str) -> Vec<&'w str> {
        self.splitter
            .find_iter(word)
            .map(|m| m.as_str())
            .filter(|piece| !piece.is_empty())
            .collect()
    }
}

impl Default for NaiveMajorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MajorSystem for NaiveMajorSystem {
    fn word_to_major(&self, word: &str) -> String {
        self.pieces(word)
            .into_iter()
            .filter_map(|piece| self.table.digit_for(piece))
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    fn number_to_words(&self, number: &str) -> Vec<String> {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            tracing::debug!("No digits in '{}', skipping vocabulary scan", number);
            return Vec::new();
        }

        let mut matches: Vec<String> = Vec::new();
        for word in &self.vocabulary {
            if self.word_to_major(word) == digits && !matches.contains(word) {
                matches.push(word.clone());
            }
        }
        tracing::debug!("{} naive matches for {}", matches.len(), digits);
        matches
    }
}
