//! Result ranking.
//!
//! Flattens per-document match lists into one list ordered by how many
//! query tokens each snippet contains. The sort is stable and descending,
//! so ties keep their encounter order, and the output is truncated to the
//! configured limit.

use std::path::PathBuf;

use serde::Serialize;

use crate::{MatchRecord, SearchQuery};

/// Default cap on ranked results.
pub const DEFAULT_LIMIT: usize = 5000;

/// All matches found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMatches {
    /// Path of the scanned document.
    pub document: PathBuf,
    /// Matches in scan order.
    pub matches: Vec<MatchRecord>,
}

/// A match with its document identity and term count, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    /// Path of the document the match came from.
    pub document: PathBuf,
    /// Character offset of the match in the document.
    pub offset: usize,
    /// The match snippet.
    pub snippet: String,
    /// Number of query tokens found in the snippet.
    pub match_count: usize,
}

/// Ranks matches across documents by per-snippet token count.
///
/// Token counting uses [`SearchQuery::ranking_tokens`] (the single-space
/// tokenization, duplicates and empty tokens included) and checks each
/// token as a case-insensitive substring of the snippet. Ranking the same
/// inputs twice yields an identical ordered result.
pub fn rank(
    results_by_document: &[DocumentMatches],
    query: &SearchQuery,
    limit: usize,
) -> Vec<RankedMatch> {
    let tokens = query.ranking_tokens();

    let mut ranked: Vec<RankedMatch> = results_by_document
        .iter()
        .flat_map(|document_matches| {
            document_matches.matches.iter().map(|record| {
                let lowered = record.snippet.to_lowercase();
                let match_count = tokens
                    .iter()
                    .filter(|token| lowered.contains(token.as_str()))
                    .count();

                RankedMatch {
                    document: document_matches.document.clone(),
                    offset: record.offset,
                    snippet: record.snippet.clone(),
                    match_count,
                }
            })
        })
        .collect();

    // Stable sort: ties keep their encounter order across documents.
    ranked.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    ranked.truncate(limit);
    ranked
}
