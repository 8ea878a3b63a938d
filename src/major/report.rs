use std::fmt;

use super::MajorSystem;

/// Reference text for the Major System.
pub fn explain() -> &'static str {
    "\
Major System

The Major System turns numbers into words by giving each digit a consonant
sound. Vowels and the sounds w, h and y carry no value, so they can be used
freely to build a memorable word.

  0  s, z, soft c       z is the first letter of zero
  1  t, d               t and d have one downstroke
  2  n                  n has two downstrokes
  3  m                  m has three downstrokes
  4  r                  r is the last letter of four
  5  l                  L is the Roman numeral for 50
  6  j, sh, soft ch/g   a script j has a lower loop, g looks like a flipped 6
  7  k, hard c/g, q     K is made of two sevens
  8  f, v               a script f looks like an 8
  9  p, b               p is a mirrored 9

It is the sound that counts, not the spelling: \"office\" is 80 (f, s) and
\"knife\" is 28 (n, f).

Examples:
  83 => fame, foam
  941 => bird
"
}

/// Candidate words for one requested number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberWords {
    pub number: String,
    pub words: Vec<String>,
}

impl fmt::Display for NumberWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.words.is_empty() {
            write!(f, "{}: (no matches)", self.number)
        } else {
            write!(f, "{}: {}", self.number, self.words.join(", "))
        }
    }
}

/// Look up every number in order; displays as `"<number>: word, word"`.
pub fn number_report<M, I, S>(system: &M, numbers: I) -> Vec<NumberWords>
where
    M: MajorSystem + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    numbers
        .into_iter()
        .map(|number| {
            let number = number.as_ref();
            NumberWords {
                number: number.to_string(),
                words: system.number_to_words(number),
            }
        })
        .collect()
}

/// `0`..`9` followed by `00`..`99`.
pub fn summary_numbers() -> Vec<String> {
    (0..10)
        .map(|n| n.to_string())
        .chain((0..100).map(|n| format!("{:02}", n)))
        .collect()
}
