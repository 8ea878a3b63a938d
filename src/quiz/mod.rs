//! Interactive drills.
//!
//! Every quiz reads answers through a [`Prompter`] and writes feedback to any
//! `io::Write`, so the loops run the same against a terminal or a script.

pub mod major;
pub mod missing;
pub mod pao;

use std::collections::VecDeque;
use std::fmt;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::MajorResult;

pub use major::{major_quiz, QuizMode};
pub use missing::{quiz_missing, MissingOutcome};
pub use pao::{flatten_pao, pao_quiz};

/// Source of user answers.
pub trait Prompter {
    /// Show `prompt` and read one line. `Ok(None)` means the user quit.
    fn ask(&mut self, prompt: &str) -> MajorResult<Option<String>>;
}

/// Terminal prompter with line editing and in-session history.
pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    pub fn new() -> MajorResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for ReadlinePrompter {
    fn ask(&mut self, prompt: &str) -> MajorResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays canned answers, then reports the user as gone.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, including the one that hit the end of the script.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> MajorResult<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Running tally of answered questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// `None` until at least one answer was recorded.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.total) * 100.0)
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage() {
            Some(pct) => write!(
                f,
                "{:.0}% Correct ({}/{})",
                pct, self.correct, self.total
            ),
            None => write!(f, "No answers"),
        }
    }
}
