//! The chunked scanner.

use serde::Serialize;

use crate::{
    ScanError, SearchQuery, build_pattern,
    window::{CharIndex, Windows},
};

/// A single match found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Character offset of the match start in the full content.
    pub offset: usize,
    /// Snippet of `chunk_size` characters starting at the match, clamped
    /// to the content end.
    pub snippet: String,
}

/// Scans `content` for the query terms using overlapping windows.
///
/// Windows are `chunk_size` characters long and consecutive starts are
/// `chunk_size - overlap_size` apart. Within each window, all
/// non-overlapping whole-word matches are recorded with their absolute
/// offset and a fixed-length snippet. The same logical occurrence can be
/// detected by two overlapping windows; both records are kept. The
/// overlap exists to catch boundary-straddling matches and the ranker
/// tolerates the duplicates.
///
/// An empty query yields no matches without building a pattern. Content
/// shorter than `chunk_size` yields no windows and therefore no matches.
pub fn scan(
    content: &str,
    query: &SearchQuery,
    chunk_size: usize,
    overlap_size: usize,
) -> Result<Vec<MatchRecord>, ScanError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    if overlap_size >= chunk_size {
        return Err(ScanError::InvalidStride {
            chunk_size,
            overlap_size,
        });
    }

    let pattern = build_pattern(query.terms())?;
    let index = CharIndex::new(content);
    let stride = chunk_size - overlap_size;

    let mut records = Vec::new();
    for window in Windows::new(content, &index, chunk_size, stride) {
        for found in pattern.find_iter(window.text) {
            let offset = index.char_of(window.byte_start + found.start());
            let snippet = index.slice_chars(content, offset, chunk_size);
            records.push(MatchRecord {
                offset,
                snippet: snippet.to_string(),
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(input: &str) -> SearchQuery {
        SearchQuery::parse(input)
    }

    #[test]
    fn empty_query_yields_no_matches() {
        let records = scan("plenty of content here", &query("   "), 20, 5).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn overlap_equal_to_chunk_is_rejected() {
        let result = scan("content", &query("cat"), 20, 20);
        assert!(matches!(
            result,
            Err(ScanError::InvalidStride {
                chunk_size: 20,
                overlap_size: 20,
            })
        ));
    }

    #[test]
    fn content_shorter_than_chunk_yields_no_matches() {
        let records = scan("cat", &query("cat"), 20, 5).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn finds_match_with_absolute_offset_and_snippet() {
        let content = "xxxx cat yyyyyyyyyyyyyyyyyyyyyyy";
        let records = scan(content, &query("cat"), 20, 5).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 5);
        assert_eq!(records[0].snippet.chars().count(), 20);
        assert!(records[0].snippet.starts_with("cat "));
    }

    #[test]
    fn snippet_is_clamped_at_content_end() {
        let content = "aaaaaaaaaaaaaaaa cat"; // 20 chars, match at 17
        let records = scan(content, &query("cat"), 20, 5).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 17);
        assert_eq!(records[0].snippet, "cat");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let content = "xxxx CAT yyyyyyyyyyyyyyyyyyyyyyy";
        let records = scan(content, &query("cat"), 20, 5).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn boundary_straddling_match_is_detected_twice() {
        // 16 dots, "cat dog ", 16 dots: 40 characters total.
        // Windows (chunk 20, overlap 5): [0, 20) and [15, 35).
        let content = "................cat dog ................";
        let records = scan(content, &query("cat dog"), 20, 5).unwrap();

        let found: Vec<(usize, &str)> = records
            .iter()
            .map(|r| {
                (
                    r.offset,
                    if r.snippet.starts_with("cat") {
                        "cat"
                    } else {
                        "dog"
                    },
                )
            })
            .collect();

        // "cat" at 16 falls into both windows; "dog" at 20 only into the
        // second. The duplicate record is retained.
        assert_eq!(found, vec![(16, "cat"), (16, "cat"), (20, "dog")]);
    }

    #[test]
    fn whole_word_matching_skips_substrings() {
        let content = "the catalogue entry yyyyyyyyyyyyyyyy";
        let records = scan(content, &query("cat"), 20, 5).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn multibyte_content_offsets_are_character_based() {
        // 10 alphas, a space, "cat", then padding: char offsets, not bytes.
        let content = "αααααααααα cat βββββββββββββββ";
        let records = scan(content, &query("cat"), 20, 5).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 11);
        assert_eq!(records[0].snippet.chars().count(), 19); // clamped tail
    }
}
