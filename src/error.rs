use thiserror::Error;

#[derive(Error, Debug)]
pub enum MajorError {
    #[error("Token '{token}' is mapped to both {first} and {second}")]
    AmbiguousToken {
        token: String,
        first: u8,
        second: u8,
    },

    #[error("Digit {0} is outside 0-9")]
    InvalidDigit(u8),

    #[error("Dictionary line {line}: {reason}")]
    DictionaryParse { line: usize, reason: String },

    #[error("Invalid PAO entry for '{number}': {reason}")]
    InvalidPao { number: String, reason: String },

    #[error("Card value {0} is outside 1-13")]
    InvalidCard(u8),

    #[error("Need at least two items to quiz, got {0}")]
    NotEnoughItems(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type MajorResult<T> = Result<T, MajorError>;
