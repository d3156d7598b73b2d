//! Gazetteer-backed tagger.
//!
//! A lexicon file is a flat TOML table mapping entity text to a tagger
//! label:
//!
//! ```toml
//! "Paris" = "GPE"
//! "Ada Lovelace" = "PERSON"
//! "Acme Corp" = "ORG"
//! ```
//!
//! Tagging finds every word-bounded, case-sensitive occurrence of each
//! lexicon phrase and reports one span per occurrence.

use std::{collections::BTreeMap, fs, path::Path};

use crate::{EntitySpan, EntityTagger, TagLabel, TaggerError};

/// Entity tagger backed by a phrase-to-label lexicon.
pub struct LexiconTagger {
    /// Lexicon phrases with their labels, in deterministic order.
    entries: Vec<(String, TagLabel)>,
}

impl LexiconTagger {
    /// Loads a lexicon from a TOML file.
    ///
    /// A missing or unparseable file is `TaggerError::Unavailable`: the
    /// extraction feature cannot run without its model.
    pub fn from_file(path: &Path) -> Result<Self, TaggerError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| TaggerError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_toml(&raw)
    }

    /// Parses a lexicon from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, TaggerError> {
        let table: BTreeMap<String, String> =
            toml::from_str(raw).map_err(|e| TaggerError::Unavailable(e.to_string()))?;

        let mut entries = Vec::with_capacity(table.len());
        for (phrase, label) in table {
            let label = label.parse::<TagLabel>().map_err(|_| {
                TaggerError::Unavailable(format!("unknown label '{label}' for entry '{phrase}'"))
            })?;
            entries.push((phrase, label));
        }

        Ok(Self { entries })
    }

    /// Number of phrases in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the lexicon holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntityTagger for LexiconTagger {
    fn tag(&self, content: &str) -> Result<Vec<EntitySpan>, TaggerError> {
        let mut spans = Vec::new();

        for (phrase, label) in &self.entries {
            if phrase.is_empty() {
                continue;
            }
            for (start, found) in content.match_indices(phrase.as_str()) {
                if is_word_bounded(content, start, start + found.len()) {
                    spans.push(EntitySpan::new(phrase.clone(), *label));
                }
            }
        }

        Ok(spans)
    }
}

/// Checks that `[start, end)` does not sit inside a longer word.
fn is_word_bounded(content: &str, start: usize, end: usize) -> bool {
    let before_ok = content[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric());
    let after_ok = content[end..]
        .chars()
        .next()
        .is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}
