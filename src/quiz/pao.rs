//! Person-Action-Object drills.

use std::collections::BTreeMap;
use std::io::Write;

use colored::Colorize;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{Prompter, Score};
use crate::error::{MajorError, MajorResult};

pub fn explain() -> &'static str {
    "\
Person Action Object (PAO)

PAO attributes a specific Person with an Action that involves an Object.
Each composite image is assigned a number, building an inventory (say 00-99)
that can then encode other information.

Examples:
15: Albert Einstein (person) writing (action) on a blackboard (object).
16: Molly Ringwald (person) blowing candles (action) on a cake (object).
23: Michael Jordan (person) shooting (action) a basketball (object).

With such an inventory the first six digits of a long number collapse into
one image by taking the person of the first pair, the action of the second
and the object of the third:

162315 => Molly Ringwald shooting a blackboard
"
}

/// Split each `"person, action, object"` entry into three quiz items.
///
/// Items are prefixed `p:`, `a:` or `o:` and paired with their number.
pub fn flatten_pao(entries: &BTreeMap<String, String>) -> MajorResult<Vec<(String, String)>> {
    let mut items = Vec::with_capacity(entries.len() * 3);

    for (number, pao) in entries {
        let parts: Vec<&str> = pao.split(',').map(str::trim).collect();
        let [person, action, object] = parts.as_slice() else {
            return Err(MajorError::InvalidPao {
                number: number.clone(),
                reason: format!("expected 'person, action, object', got {} parts", parts.len()),
            });
        };
        items.push((number.clone(), format!("p:{}", person)));
        items.push((number.clone(), format!("a:{}", action)));
        items.push((number.clone(), format!("o:{}", object)));
    }

    Ok(items)
}

/// Ask for the number of every PAO item once, in random order.
pub fn pao_quiz<P, W, R>(
    entries: &BTreeMap<String, String>,
    prompter: &mut P,
    out: &mut W,
    rng: &mut R,
) -> MajorResult<Score>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let mut items = flatten_pao(entries)?;
    items.shuffle(rng);

    let mut score = Score::default();
    for (number, item) in &items {
        let guess = match prompter.ask(&format!("{}\n=> ", item))? {
            Some(guess) => guess,
            None => break,
        };
        let guess = guess.trim();
        if guess.is_empty() {
            continue;
        }

        if guess == number {
            writeln!(out, "{}", "CORRECT!".green())?;
            score.record(true);
        } else {
            writeln!(out, "{} {}", "INCORRECT:".red(), number)?;
            score.record(false);
        }
    }

    if score.total > 0 {
        writeln!(out, "\n{}", score)?;
    }
    Ok(score)
}
