use std::io::Write;

use colored::Colorize;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{Prompter, Score};
use crate::data::COMMON_WORDS_EN;
use crate::error::MajorResult;
use crate::major::{EncodingTable, MajorSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    /// Common English words, answered with the selected encoder's digits.
    Words,
    /// Single letter clusters from the naive table, answered with one digit.
    Letters,
}

impl QuizMode {
    pub fn from_letters_flag(letters: bool) -> Self {
        if letters {
            QuizMode::Letters
        } else {
            QuizMode::Words
        }
    }
}

/// Question/answer pairs a quiz draws from.
fn question_pool(system: &dyn MajorSystem, mode: QuizMode) -> Vec<(String, String)> {
    match mode {
        QuizMode::Words => COMMON_WORDS_EN
            .iter()
            .map(|w| (w.to_string(), system.word_to_major(w)))
            .filter(|(_, digits)| !digits.is_empty())
            .collect(),
        QuizMode::Letters => {
            let table = EncodingTable::letters();
            table
                .tokens()
                .into_iter()
                .filter_map(|t| table.digit_for(t).map(|d| (t.to_string(), d.to_string())))
                .collect()
        }
    }
}

/// Ask for Major System values until the user quits.
///
/// Empty answers skip to the next question without scoring.
pub fn major_quiz<P, W, R>(
    system: &dyn MajorSystem,
    mode: QuizMode,
    prompter: &mut P,
    out: &mut W,
    rng: &mut R,
) -> MajorResult<Score>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let pool = question_pool(system, mode);
    tracing::debug!("Major quiz ({:?}) with {} questions", mode, pool.len());

    let mut score = Score::default();
    while let Some((question, answer)) = pool.choose(rng) {
        let guess = match prompter.ask(&format!("{} => ", question))? {
            Some(guess) => guess,
            None => break,
        };
        let guess = guess.trim();
        if guess.is_empty() {
            continue;
        }

        if guess == answer {
            writeln!(out, "{}", "Correct!".green())?;
            score.record(true);
        } else {
            writeln!(out, "{} {}", "Nope, it is".red(), answer)?;
            score.record(false);
        }
    }

    if score.total > 0 {
        writeln!(out, "\n{}", score)?;
    }
    Ok(score)
}
