//! Search query tokenization.

/// A parsed search query.
///
/// Holds the trimmed raw input plus the term list obtained by splitting on
/// whitespace runs. The scanner builds its pattern from [`terms`]; the
/// ranker and the document filter use [`ranking_tokens`], a separate
/// single-space tokenization of the raw input. Both tokenizations are
/// contractual and must not be unified.
///
/// [`terms`]: Self::terms
/// [`ranking_tokens`]: Self::ranking_tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The trimmed original input.
    raw: String,
    /// Terms split on whitespace runs.
    terms: Vec<String>,
}

impl SearchQuery {
    /// Parses free-text input into a query.
    ///
    /// Blank input yields an empty term list; scanning an empty query
    /// produces no matches.
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let terms = raw.split_whitespace().map(str::to_string).collect();
        Self { raw, terms }
    }

    /// The trimmed original input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Terms used to build the scanner's alternation pattern.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns true when the query contains no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Lowercased tokens from splitting the raw input on single spaces.
    ///
    /// Consecutive spaces produce empty tokens, which are kept: an empty
    /// token is a substring of every snippet and counts accordingly.
    /// Duplicate tokens are also kept, so a repeated term inflates a
    /// snippet's match count.
    pub fn ranking_tokens(&self) -> Vec<String> {
        self.raw
            .split(' ')
            .map(|token| token.trim().to_lowercase())
            .collect()
    }

    /// Returns true when every ranking token occurs in `content`,
    /// case-insensitively.
    pub fn matches_content(&self, content: &str) -> bool {
        let lowered = content.to_lowercase();
        self.ranking_tokens()
            .iter()
            .all(|token| lowered.contains(token.as_str()))
    }
}
