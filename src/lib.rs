//! Memory techniques: the Major System for numbers, Person-Action-Object
//! drills and recall quizzes.
//!
//! ```
//! use artofmemory::{MajorSystem, NaiveMajorSystem, PhonemesMajorSystem};
//! use artofmemory::pronounce::sample;
//!
//! assert_eq!(NaiveMajorSystem::new().word_to_major("office"), "887");
//! assert_eq!(PhonemesMajorSystem::new(sample()).word_to_major("office"), "80");
//! ```

pub mod cards;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod major;
pub mod pronounce;
pub mod quiz;
pub mod terminal;

pub use error::{MajorError, MajorResult};
pub use major::{EncodingTable, MajorSystem, NaiveMajorSystem, PhonemesMajorSystem};
pub use pronounce::{CmuDict, PronunciationSource};
