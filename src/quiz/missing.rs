//! "What is missing?" drill: show every item but one, ask for the one left out.

use std::io::Write;
use std::process::Command;

use colored::Colorize;
use rand::seq::SliceRandom;
use rand::Rng;

use super::Prompter;
use crate::error::{MajorError, MajorResult};
use crate::terminal::LineRepeater;

pub const DEFAULT_VOICE: &str = "Tessa";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingOutcome {
    Correct,
    Wrong { missing: String },
    Abandoned,
}

pub fn explain() -> &'static str {
    "\
What is missing?

Every item of a list you know by heart is shown one at a time, in random
order, except for one. Press enter to move to the next item. At the end,
name the item that was never shown.
"
}

/// Speak `phrase` aloud. Only macOS ships a `say` command; elsewhere this is a no-op.
pub fn say(phrase: &str, voice: &str) {
    if !cfg!(target_os = "macos") {
        return;
    }
    if let Err(e) = Command::new("say").args(["-v", voice, phrase]).status() {
        tracing::warn!("Could not run say: {}", e);
    }
}

/// Run one round over `items`. `voice` enables speech.
pub fn quiz_missing<P, W, R>(
    items: &[String],
    voice: Option<&str>,
    prompter: &mut P,
    out: &mut W,
    rng: &mut R,
) -> MajorResult<MissingOutcome>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    if items.len() < 2 {
        return Err(MajorError::NotEnoughItems(items.len()));
    }

    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    let total = shuffled.len();
    let missing = shuffled.pop().unwrap_or_default();

    let mut term = LineRepeater::new();
    for (n, item) in shuffled.iter().enumerate() {
        if let Some(voice) = voice {
            say(item, voice);
        }
        if !term.write(prompter, out, &format!("{:2}/{}: {}", n, total, item))? {
            writeln!(out, "\nOkay, we can quiz another time.")?;
            return Ok(MissingOutcome::Abandoned);
        }
    }

    if let Some(voice) = voice {
        say("Okay, what is missing?", voice);
    }
    let answer = match prompter.ask("What is missing? ")? {
        Some(answer) => answer,
        None => {
            writeln!(out, "\nOkay, we can quiz another time.")?;
            return Ok(MissingOutcome::Abandoned);
        }
    };

    if answer.trim().to_lowercase() == missing.to_lowercase() {
        writeln!(out, "{}", "Well done!".green())?;
        Ok(MissingOutcome::Correct)
    } else {
        writeln!(out, "{} '{}'.", "Sorry, it was".red(), missing)?;
        Ok(MissingOutcome::Wrong { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ScriptedPrompter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn colours() -> Vec<String> {
        ["red", "green", "blue", "yellow"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// The item the quiz will hold back for a given seed.
    fn held_back(items: &[String], seed: u64) -> String {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        shuffled.pop().unwrap()
    }

    #[test]
    fn test_correct_answer_any_case() {
        let items = colours();
        let missing = held_back(&items, 11);

        let mut answers = vec![String::new(); 3];
        answers.push(missing.to_uppercase());
        let mut prompter = ScriptedPrompter::new(answers);
        let mut out: Vec<u8> = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = quiz_missing(&items, None, &mut prompter, &mut out, &mut rng).unwrap();
        assert_eq!(outcome, MissingOutcome::Correct);

        // Three items shown, then the question.
        assert_eq!(prompter.prompts().len(), 4);
        assert!(prompter.prompts()[..3].iter().all(|p| !p.contains(&missing)));
        assert_eq!(prompter.prompts()[3], "What is missing? ");
    }

    #[test]
    fn test_wrong_answer_reveals_item() {
        let items = colours();
        let missing = held_back(&items, 5);

        let mut prompter = ScriptedPrompter::new(["", "", "", "purple"]);
        let mut out: Vec<u8> = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);

        let outcome = quiz_missing(&items, None, &mut prompter, &mut out, &mut rng).unwrap();
        assert_eq!(outcome, MissingOutcome::Wrong { missing: missing.clone() });
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("'{}'", missing)));
    }

    #[test]
    fn test_quitting_mid_list() {
        let items = colours();
        let mut prompter = ScriptedPrompter::new([""]);
        let mut out: Vec<u8> = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);

        let outcome = quiz_missing(&items, None, &mut prompter, &mut out, &mut rng).unwrap();
        assert_eq!(outcome, MissingOutcome::Abandoned);
        assert!(String::from_utf8(out).unwrap().contains("another time"));
    }

    #[test]
    fn test_needs_two_items() {
        let mut prompter = ScriptedPrompter::default();
        let mut out: Vec<u8> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let err = quiz_missing(&["solo".to_string()], None, &mut prompter, &mut out, &mut rng)
            .unwrap_err();
        assert!(matches!(err, MajorError::NotEnoughItems(1)));
    }
}
