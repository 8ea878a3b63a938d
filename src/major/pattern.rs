//! Regex construction over encoding tables.

use regex::{Regex, RegexBuilder};

use super::table::EncodingTable;
use crate::error::MajorResult;

/// Alternation of every token in the table, longest token first.
///
/// The sort is stable, so tokens of equal length keep table order.
/// e.g. `(sh|ch|s|z|t|...)`. An empty table yields `()`.
pub fn segmentation_pattern(table: &EncodingTable) -> String {
    let mut tokens = table.tokens();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()));

    let escaped: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
    format!("({})", escaped.join("|"))
}

/// Compile the segmentation pattern, matching letters in any case.
pub fn segmentation_regex(table: &EncodingTable) -> MajorResult<Regex> {
    let pattern = segmentation_pattern(table);
    tracing::debug!("Segmentation pattern: {}", pattern);
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Anchored pattern matching a consonant skeleton for the given digits.
///
/// Each digit becomes a group of its tokens; groups are concatenated with
/// no separator. Returns `None` when `number` contains no digits, or when a
/// requested digit has no tokens in the table, since nothing can encode it.
pub fn skeleton_pattern(table: &EncodingTable, number: &str) -> Option<String> {
    let mut groups = Vec::new();
    for d in number.chars().filter_map(|c| c.to_digit(10)) {
        let tokens = table.tokens_for(d as u8);
        if tokens.is_empty() {
            tracing::debug!("Digit {} has no tokens, '{}' cannot match", d, number);
            return None;
        }
        let alternatives: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
        groups.push(format!("({})", alternatives.join("|")));
    }

    if groups.is_empty() {
        return None;
    }

    Some(format!("^{}$", groups.concat()))
}
