use regex::{Regex, RegexBuilder};

use super::pattern::skeleton_pattern;
use super::table::EncodingTable;
use super::MajorSystem;
use crate::error::MajorResult;
use crate::pronounce::PronunciationSource;

/// Major System encoder driven by pronunciations instead of spelling.
///
/// A word's digits come from the consonant phonemes of its first (most
/// common) pronunciation, so "office" (`AO1 F AH0 S`) encodes as 80 and the
/// silent `k` in "knife" is ignored. Reverse lookup scans the whole source.
#[derive(Debug, Clone)]
pub struct PhonemesMajorSystem<S> {
    table: EncodingTable,
    source: S,
}

impl<S: PronunciationSource> PhonemesMajorSystem<S> {
    pub fn new(source: S) -> Self {
        Self {
            table: EncodingTable::phonemes(),
            source,
        }
    }

    pub fn with_table(table: EncodingTable, source: S) -> Self {
        Self { table, source }
    }

    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mapped symbols of a pronunciation, in order, concatenated.
    ///
    /// Symbols missing from the table (vowels, `HH`, `DH`, `NG`, ...) are dropped.
    pub fn skeleton(&self, phones: &str) -> String {
        phones
            .split_whitespace()
            .filter(|p| self.table.digit_for(p).is_some())
            .collect()
    }

    fn digits_of(&self, phones: &str) -> String {
        phones
            .split_whitespace()
            .filter_map(|p| self.table.digit_for(p))
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// Compiled anchored pattern for `number`, `None` if no word can match.
    ///
    /// Matching ignores case, like [`EncodingTable::digit_for`].
    pub fn matcher(&self, number: &str) -> MajorResult<Option<Regex>> {
        match skeleton_pattern(&self.table, number) {
            Some(pattern) => {
                tracing::debug!("Skeleton pattern for '{}': {}", number, pattern);
                Ok(Some(
                    RegexBuilder::new(&pattern)
                        .case_insensitive(true)
                        .build()?,
                ))
            }
            None => Ok(None),
        }
    }
}

impl<S: PronunciationSource> MajorSystem for PhonemesMajorSystem<S> {
    fn word_to_major(&self, word: &str) -> String {
        match self.source.phones_for_word(word).first() {
            Some(phones) => self.digits_of(phones),
            None => {
                tracing::debug!("No pronunciation for '{}'", word);
                String::new()
            }
        }
    }

    fn number_to_words(&self, number: &str) -> Vec<String> {
        let matcher = match self.matcher(number) {
            Ok(Some(re)) => re,
            Ok(None) => {
                tracing::debug!("Nothing can encode '{}', skipping dictionary scan", number);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Could not build pattern for '{}': {}", number, e);
                return Vec::new();
            }
        };

        let mut matches: Vec<String> = Vec::new();
        for (word, phones) in self.source.pronunciations() {
            if !matcher.is_match(&self.skeleton(phones)) {
                continue;
            }
            // Variants of one word sit next to each other in the dictionary.
            if matches.last().map(String::as_str) != Some(word) {
                matches.push(word.to_string());
            }
        }

        tracing::debug!("{} words match '{}'", matches.len(), number);
        matches
    }
}
