//! Background analysis jobs.
//!
//! Analysis work runs off the caller's thread, one worker slot per job
//! kind, and results come back over a channel:
//!
//! - [`SearchWorker`] scans and delivers one completed batch for the
//!   whole run. Starting a second search while one is running is
//!   rejected; there is no cancellation, callers wait for completion.
//! - [`ExtractWorker`] delivers one report per document as it finishes
//!   and supports hard cancellation; starting a new extraction cancels
//!   and joins the previous one first.
//!
//! The asymmetry between the two is deliberate and part of the contract.
//! Within a job, documents are processed strictly sequentially; a
//! document that fails to load is logged and skipped, never fatal to the
//! batch. End-of-stream is the channel disconnecting when the worker
//! finishes.

mod error;
mod extract;
mod search;

pub use error::{JobError, JobKind};
pub use extract::{EntityReport, ExtractWorker};
pub use search::{SearchBatch, SearchWorker};
