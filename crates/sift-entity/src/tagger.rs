//! The entity tagger seam.

use thiserror::Error;

use crate::TagLabel;

/// A labeled entity occurrence reported by a tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// The entity text as it appears in the content.
    pub text: String,
    /// The tagger's label for the span.
    pub label: TagLabel,
}

impl EntitySpan {
    /// Creates a span.
    pub fn new(text: impl Into<String>, label: TagLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Errors reported by a tagger.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// The tagging model or resource could not be loaded. Fatal to the
    /// extraction feature; surfaced to the user, never retried.
    #[error("entity model unavailable: {0}")]
    Unavailable(String),

    /// Tagging a specific piece of content failed.
    #[error("entity tagging failed: {0}")]
    Failed(String),
}

/// Turns document content into labeled entity spans.
///
/// The whole document is tagged in a single pass, with no chunking, which
/// bounds practical input size to what the implementation can process in
/// memory at once. Implementations report one span per occurrence;
/// deduplication happens downstream in set collection.
pub trait EntityTagger: Send + Sync {
    /// Tags `content` and returns every detected span.
    fn tag(&self, content: &str) -> Result<Vec<EntitySpan>, TaggerError>;
}
