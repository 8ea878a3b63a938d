//! CMU Pronouncing Dictionary reader.
//!
//! Format, one pronunciation per line:
//!
//! ```text
//! ;;; comment line
//! office AO1 F AH0 S
//! often AO1 F AH0 N
//! often(2) AO1 F T AH0 N
//! achill AE1 K IH0 L # place, irish
//! ```
//!
//! Alternate pronunciations use a `(N)` suffix on the word; the suffix is
//! dropped so all variants are returned for the bare word, in file order.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::PronunciationSource;
use crate::error::{MajorError, MajorResult};

static SAMPLE: Lazy<Arc<CmuDict>> = Lazy::new(|| {
    Arc::new(
        CmuDict::parse(include_str!("../../data/cmudict-sample.dict"))
            .expect("bundled sample dictionary parses"),
    )
});

/// Small bundled dictionary, parsed on first use.
pub fn sample() -> &'static CmuDict {
    &SAMPLE
}

/// The bundled dictionary as a shared handle; never copies it.
pub fn shared_sample() -> Arc<CmuDict> {
    Arc::clone(&SAMPLE)
}

#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: Vec<(String, String)>,
    index: HashMap<String, Vec<usize>>,
}

impl CmuDict {
    pub fn parse(text: &str) -> MajorResult<Self> {
        let mut dict = Self::default();

        for (n, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let line = match line.find('#') {
                Some(pos) => line[..pos].trim_end(),
                None => line,
            };

            let mut parts = line.split_whitespace();
            let term = match parts.next() {
                Some(term) => term,
                None => continue,
            };
            let phones: Vec<&str> = parts.collect();
            if phones.is_empty() {
                return Err(MajorError::DictionaryParse {
                    line: n + 1,
                    reason: format!("no phonemes for '{}'", term),
                });
            }

            dict.insert(strip_variant(term), &phones.join(" "));
        }

        tracing::debug!(
            "Parsed pronouncing dictionary: {} words, {} pronunciations",
            dict.index.len(),
            dict.entries.len()
        );
        Ok(dict)
    }

    pub fn from_file(path: &Path) -> MajorResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let dict = Self::parse(&text)?;
        tracing::info!(
            "Loaded {} pronunciations from {}",
            dict.entries.len(),
            path.display()
        );
        Ok(dict)
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut dict = Self::default();
        for (word, phones) in entries {
            dict.insert(word, phones);
        }
        dict
    }

    fn insert(&mut self, word: &str, phones: &str) {
        let word = word.to_lowercase();
        self.index
            .entry(word.clone())
            .or_default()
            .push(self.entries.len());
        self.entries.push((word, phones.to_string()));
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    /// Number of pronunciations, counting variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.trim().to_lowercase())
    }

    /// Distinct words in file order.
    pub fn words(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .map(|(word, _)| word.as_str())
            .filter(|word| seen.insert(*word))
            .collect()
    }
}

impl PronunciationSource for CmuDict {
    fn phones_for_word(&self, word: &str) -> Vec<&str> {
        self.index
            .get(&word.trim().to_lowercase())
            .map(|ids| ids.iter().map(|&i| self.entries[i].1.as_str()).collect())
            .unwrap_or_default()
    }

    fn pronunciations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(word, phones)| (word.as_str(), phones.as_str())),
        )
    }
}

/// `often(2)` -> `often`
fn strip_variant(term: &str) -> &str {
    if term.ends_with(')') {
        if let Some(open) = term.rfind('(') {
            if open > 0 {
                return &term[..open];
            }
        }
    }
    term
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = ";;; test dictionary
office AO1 F AH0 S
often AO1 F AH0 N
often(2) AO1 F T AH0 N

achill AE1 K IH0 L # place, irish
";

    #[test]
    fn test_parse_variants_and_comments() {
        let dict = CmuDict::parse(TEXT).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.word_count(), 3);
        assert_eq!(dict.phones_for_word("often"), vec!["AO1 F AH0 N", "AO1 F T AH0 N"]);
        assert_eq!(dict.phones_for_word("achill"), vec!["AE1 K IH0 L"]);
        assert_eq!(dict.words(), vec!["office", "often", "achill"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = CmuDict::parse(TEXT).unwrap();
        assert_eq!(dict.phones_for_word("Office"), vec!["AO1 F AH0 S"]);
        assert!(dict.contains(" OFTEN "));
    }

    #[test]
    fn test_unknown_word() {
        let dict = CmuDict::parse(TEXT).unwrap();
        assert!(dict.phones_for_word("zyzzyva").is_empty());
        assert!(dict.phones_for_word("").is_empty());
    }

    #[test]
    fn test_iteration_follows_file_order() {
        let dict = CmuDict::parse(TEXT).unwrap();
        let words: Vec<&str> = dict.pronunciations().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["office", "often", "often", "achill"]);
    }

    #[test]
    fn test_missing_phonemes_is_an_error() {
        let err = CmuDict::parse("office AO1 F AH0 S\nbroken\n").unwrap_err();
        match err {
            MajorError::DictionaryParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_strip_variant() {
        assert_eq!(strip_variant("often(2)"), "often");
        assert_eq!(strip_variant("often"), "often");
        assert_eq!(strip_variant("(paren)"), "(paren)");
    }

    #[test]
    fn test_sample_dictionary_loads() {
        let dict = sample();
        assert!(dict.word_count() > 100);
        assert!(dict.contains("office"));
    }
}
