//! Pronunciation lookup used by the phonetic encoder.
//!
//! A source answers two questions: how is a word pronounced, and which
//! (word, pronunciation) pairs exist at all. Pronunciations are strings of
//! whitespace-separated ARPAbet symbols such as `"AO1 F AH0 S"`. Vowels carry
//! a stress digit (0 unstressed, 1 primary, 2 secondary).

pub mod cmudict;

use std::sync::Arc;

pub use cmudict::{sample, shared_sample, CmuDict};

/// Read-only pronouncing dictionary.
pub trait PronunciationSource {
    /// All pronunciations for `word`, most common first. Empty if unknown.
    fn phones_for_word(&self, word: &str) -> Vec<&str>;

    /// Every (word, pronunciation) pair in the dictionary's own order.
    fn pronunciations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;
}

impl<S: PronunciationSource + ?Sized> PronunciationSource for &S {
    fn phones_for_word(&self, word: &str) -> Vec<&str> {
        (**self).phones_for_word(word)
    }

    fn pronunciations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        (**self).pronunciations()
    }
}

impl<S: PronunciationSource + ?Sized> PronunciationSource for Arc<S> {
    fn phones_for_word(&self, word: &str) -> Vec<&str> {
        (**self).phones_for_word(word)
    }

    fn pronunciations(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        (**self).pronunciations()
    }
}
