//! Chunked regex scanning and result ranking.
//!
//! Document content is walked in fixed-size character windows that overlap
//! by a configured amount, so matches straddling a window boundary are
//! still found (at the cost of occasional duplicate detections, which are
//! kept). Each match yields a fixed-length snippet starting at the match;
//! the ranker then orders snippets by how many query terms they contain.
//!
//! Two tokenizations are in play and they are intentionally different:
//! the scanner splits the query on whitespace runs to build its pattern,
//! while the ranker splits the raw query on single spaces when counting
//! terms per snippet. See [`SearchQuery`] for both.

mod error;
mod pattern;
mod query;
mod rank;
mod scan;
mod window;

pub use error::ScanError;
pub use pattern::build_pattern;
pub use query::SearchQuery;
pub use rank::{DEFAULT_LIMIT, DocumentMatches, RankedMatch, rank};
pub use scan::{MatchRecord, scan};
