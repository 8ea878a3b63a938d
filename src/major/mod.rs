//! Major System encoders.
//!
//! The Major System maps consonant sounds to digits so numbers can be
//! remembered as words:
//!
//! | Digit | Sounds            |
//! |-------|-------------------|
//! | 0     | s, z              |
//! | 1     | t, d              |
//! | 2     | n                 |
//! | 3     | m                 |
//! | 4     | r                 |
//! | 5     | l                 |
//! | 6     | j, sh, soft ch/g  |
//! | 7     | k, hard c/g, q    |
//! | 8     | f, v              |
//! | 9     | p, b              |
//!
//! Two strategies implement [`MajorSystem`]:
//! - [`NaiveMajorSystem`]: segments the spelling with a longest-first letter regex
//! - [`PhonemesMajorSystem`]: reads consonant phonemes from a pronouncing dictionary

pub mod naive;
pub mod pattern;
pub mod phonetic;
pub mod report;
pub mod table;

pub use naive::NaiveMajorSystem;
pub use pattern::{segmentation_pattern, segmentation_regex, skeleton_pattern};
pub use phonetic::PhonemesMajorSystem;
pub use report::{explain, number_report, summary_numbers, NumberWords};
pub use table::EncodingTable;

/// Conversion between words and Major System digit strings.
///
/// Neither direction fails: words that cannot be encoded give an empty
/// string and numbers without digits give no candidates.
pub trait MajorSystem {
    /// Digit string for `word`, empty if nothing in it maps to a digit.
    fn word_to_major(&self, word: &str) -> String;

    /// Words whose encoding is exactly the digits in `number`.
    ///
    /// Non-digit characters are ignored.
    fn number_to_words(&self, number: &str) -> Vec<String>;
}

impl<M: MajorSystem + ?Sized> MajorSystem for Box<M> {
    fn word_to_major(&self, word: &str) -> String {
        (**self).word_to_major(word)
    }

    fn number_to_words(&self, number: &str) -> Vec<String> {
        (**self).number_to_words(number)
    }
}

/// Which encoder a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncoderKind {
    Naive,
    #[default]
    Phonetic,
}

impl EncoderKind {
    pub fn from_naive_flag(naive: bool) -> Self {
        if naive {
            EncoderKind::Naive
        } else {
            EncoderKind::Phonetic
        }
    }

    /// Build the selected encoder; the phonetic one reads from `source`.
    pub fn build<'a, S>(self, source: S) -> Box<dyn MajorSystem + 'a>
    where
        S: crate::pronounce::PronunciationSource + 'a,
    {
        match self {
            EncoderKind::Naive => Box::new(NaiveMajorSystem::new()),
            EncoderKind::Phonetic => Box::new(PhonemesMajorSystem::new(source)),
        }
    }
}

impl std::fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncoderKind::Naive => write!(f, "naive"),
            EncoderKind::Phonetic => write!(f, "phonetic"),
        }
    }
}
