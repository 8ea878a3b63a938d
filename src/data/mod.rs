//! Bundled word lists.

pub mod bible;
mod words;

pub use words::COMMON_WORDS_EN;
