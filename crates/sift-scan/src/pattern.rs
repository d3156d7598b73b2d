//! Search pattern construction.

use regex::{Regex, RegexBuilder};

use crate::ScanError;

/// Builds the case-insensitive whole-word alternation for a term list.
///
/// Each term is regex-escaped so its characters match literally, then the
/// terms are alternated and wrapped in word boundaries:
/// `\b(?:alpha|beta)\b`. Callers must not pass an empty term list; an
/// empty query short-circuits to "no matches" before pattern construction.
pub fn build_pattern(terms: &[String]) -> Result<Regex, ScanError> {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");

    let source = format!(r"\b(?:{alternation})\b");
    let pattern = RegexBuilder::new(&source).case_insensitive(true).build()?;
    Ok(pattern)
}
