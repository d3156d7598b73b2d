//! Category-filtered entity extraction.

use std::collections::BTreeSet;

use crate::{EntityCategory, EntityTagger, TaggerError};

/// Extracts the set of distinct entity texts for one category.
///
/// The content is tagged once in full; spans whose label belongs to the
/// requested category are kept and collapsed into a set. Deduplication is
/// per document per call; nothing is shared across documents.
pub fn extract(
    tagger: &dyn EntityTagger,
    content: &str,
    category: EntityCategory,
) -> Result<BTreeSet<String>, TaggerError> {
    let spans = tagger.tag(content)?;
    Ok(spans
        .into_iter()
        .filter(|span| category.accepts(span.label))
        .map(|span| span.text)
        .collect())
}

/// Extracts only the entities not already present in `seen`.
///
/// `seen` is the caller-owned accumulation state for one document within
/// one session; the fresh entities returned are also added to it. Nothing
/// is persisted; dropping the set resets the accumulation.
pub fn extract_incremental(
    tagger: &dyn EntityTagger,
    content: &str,
    category: EntityCategory,
    seen: &mut BTreeSet<String>,
) -> Result<BTreeSet<String>, TaggerError> {
    let all = extract(tagger, content, category)?;
    let fresh: BTreeSet<String> = all.difference(seen).cloned().collect();
    seen.extend(fresh.iter().cloned());
    Ok(fresh)
}
