//! Named-entity extraction and aggregation.
//!
//! An [`EntityTagger`] turns document content into labeled spans; this
//! crate filters those spans by a requested [`EntityCategory`] and
//! collects the surviving texts into per-document sets. Two categories
//! are composites over the tagger's label vocabulary: SUBJECT accepts
//! PERSON and ORG, PLACE accepts GPE and LOC. The mapping is a data
//! table, so adding an alias is a one-line change.
//!
//! The tagger is a black box behind the trait seam; the bundled
//! [`LexiconTagger`] implements it with a TOML gazetteer for fully
//! offline operation.

mod category;
mod extract;
mod lexicon;
mod tagger;

pub use category::{EntityCategory, TagLabel, UnknownCategoryError};
pub use extract::{extract, extract_incremental};
pub use lexicon::LexiconTagger;
pub use tagger::{EntitySpan, EntityTagger, TaggerError};
