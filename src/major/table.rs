//! Digit to sound-cluster mapping shared by both encoders.

use std::collections::{BTreeMap, HashMap};

use crate::error::{MajorError, MajorResult};

/// Immutable mapping from a digit (0-9) to the sound clusters that encode it.
///
/// Tokens are letters for the naive encoder and ARPAbet phoneme symbols for
/// the phonetic one. Every token resolves to exactly one digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTable {
    groups: BTreeMap<u8, Vec<String>>,
    reverse: HashMap<String, u8>,
}

impl EncodingTable {
    /// Build a table, rejecting digits above 9 and tokens listed under two digits.
    ///
    /// Reverse lookup keys are lower-cased, so tokens differing only in case
    /// count as the same token.
    pub fn new(groups: BTreeMap<u8, Vec<String>>) -> MajorResult<Self> {
        let mut reverse: HashMap<String, u8> = HashMap::new();

        for (&digit, tokens) in &groups {
            if digit > 9 {
                return Err(MajorError::InvalidDigit(digit));
            }
            for token in tokens {
                let key = token.to_lowercase();
                match reverse.get(&key) {
                    Some(&first) if first != digit => {
                        return Err(MajorError::AmbiguousToken {
                            token: token.clone(),
                            first,
                            second: digit,
                        });
                    }
                    _ => {
                        reverse.insert(key, digit);
                    }
                }
            }
        }

        tracing::debug!(
            "Encoding table built with {} digits and {} tokens",
            groups.len(),
            reverse.len()
        );

        Ok(Self { groups, reverse })
    }

    /// Convenience constructor for literal tables.
    pub fn from_pairs<'a, I>(pairs: I) -> MajorResult<Self>
    where
        I: IntoIterator<Item = (u8, &'a [&'a str])>,
    {
        let groups = pairs
            .into_iter()
            .map(|(digit, tokens)| (digit, tokens.iter().map(|t| t.to_string()).collect()))
            .collect();
        Self::new(groups)
    }

    /// Letter table used by the naive spelling-based encoder.
    pub fn letters() -> Self {
        Self::builtin(&[
            (0, &["s", "z"]),
            (1, &["t", "d"]),
            (2, &["n"]),
            (3, &["m"]),
            (4, &["r"]),
            (5, &["l"]),
            (6, &["j", "g"]),
            (7, &["c", "k", "q"]),
            (8, &["v", "f"]),
            (9, &["p", "b"]),
        ])
    }

    /// ARPAbet table used by the phonetic encoder.
    ///
    /// The r-coloured vowel is listed with its stress marker (`ER0`, `ER1`)
    /// because dictionary symbols are matched verbatim.
    pub fn phonemes() -> Self {
        Self::builtin(&[
            (0, &["S", "Z"]),
            (1, &["T", "D"]),
            (2, &["N"]),
            (3, &["M"]),
            (4, &["R", "ER0", "ER1"]),
            (5, &["L"]),
            (6, &["JH", "CH", "SH"]),
            (7, &["K", "G"]),
            (8, &["F", "V"]),
            (9, &["B", "P"]),
        ])
    }

    fn builtin(pairs: &[(u8, &[&str])]) -> Self {
        let mut groups = BTreeMap::new();
        let mut reverse = HashMap::new();
        for &(digit, tokens) in pairs {
            groups.insert(digit, tokens.iter().map(|t| t.to_string()).collect());
            for token in tokens {
                reverse.insert(token.to_lowercase(), digit);
            }
        }
        Self { groups, reverse }
    }

    /// All tokens flattened in digit order, preserving order within each digit.
    pub fn tokens(&self) -> Vec<&str> {
        self.groups
            .values()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect()
    }

    /// Resolve a token to its digit, ignoring case.
    pub fn digit_for(&self, token: &str) -> Option<u8> {
        self.reverse.get(&token.to_lowercase()).copied()
    }

    /// Tokens mapped to `digit`, empty if the digit is unmapped.
    pub fn tokens_for(&self, digit: u8) -> &[String] {
        self.groups.get(&digit).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_token_has_one_digit(table: &EncodingTable) {
        for token in table.tokens() {
            let owners: Vec<u8> = table
                .digits()
                .filter(|&d| table.tokens_for(d).iter().any(|t| t.eq_ignore_ascii_case(token)))
                .collect();
            assert_eq!(owners.len(), 1, "token {} owned by {:?}", token, owners);
            assert_eq!(table.digit_for(token), Some(owners[0]));
        }
    }

    #[test]
    fn test_builtin_tables_are_unambiguous() {
        every_token_has_one_digit(&EncodingTable::letters());
        every_token_has_one_digit(&EncodingTable::phonemes());
    }

    #[test]
    fn test_builtin_tables_revalidate() {
        let letters = EncodingTable::letters();
        let rebuilt = EncodingTable::new(letters.groups.clone()).unwrap();
        assert_eq!(rebuilt, letters);

        let phonemes = EncodingTable::phonemes();
        let rebuilt = EncodingTable::new(phonemes.groups.clone()).unwrap();
        assert_eq!(rebuilt, phonemes);
    }

    #[test]
    fn test_ambiguous_token_rejected() {
        let err = EncodingTable::from_pairs([(0, &["s", "z"][..]), (6, &["sh", "s"][..])])
            .unwrap_err();
        match err {
            MajorError::AmbiguousToken {
                token,
                first,
                second,
            } => {
                assert_eq!(token, "s");
                assert_eq!(first, 0);
                assert_eq!(second, 6);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_case_variants_are_ambiguous() {
        let result = EncodingTable::from_pairs([(1, &["t"][..]), (2, &["T"][..])]);
        assert!(matches!(result, Err(MajorError::AmbiguousToken { .. })));
    }

    #[test]
    fn test_duplicate_under_same_digit_is_fine() {
        let table = EncodingTable::from_pairs([(1, &["t", "t"][..])]).unwrap();
        assert_eq!(table.digit_for("t"), Some(1));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_digit_out_of_range() {
        let result = EncodingTable::from_pairs([(10, &["x"][..])]);
        assert!(matches!(result, Err(MajorError::InvalidDigit(10))));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = EncodingTable::letters();
        assert_eq!(table.digit_for("S"), Some(0));
        assert_eq!(table.digit_for("q"), Some(7));
        assert_eq!(table.digit_for("h"), None);

        let phonemes = EncodingTable::phonemes();
        assert_eq!(phonemes.digit_for("ER1"), Some(4));
        assert_eq!(phonemes.digit_for("er0"), Some(4));
        assert_eq!(phonemes.digit_for("ER2"), None);
        assert_eq!(phonemes.digit_for("AH0"), None);
    }

    #[test]
    fn test_tokens_flatten_in_table_order() {
        let table = EncodingTable::letters();
        assert_eq!(
            table.tokens(),
            vec!["s", "z", "t", "d", "n", "m", "r", "l", "j", "g", "c", "k", "q", "v", "f", "p", "b"]
        );
        assert_eq!(table.tokens_for(4), &["r".to_string()]);
        assert!(table.tokens_for(3).len() == 1);
    }

    #[test]
    fn test_empty_table() {
        let table = EncodingTable::new(BTreeMap::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.tokens().is_empty());
        assert!(table.tokens_for(0).is_empty());
    }
}
