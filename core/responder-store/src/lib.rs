//! Repository layer for the responder question store.
//!
//! All questions live in one JSON document on disk: an array of question
//! objects, each carrying its answers inline. [`QuestionStore`] is the only
//! component that reads or writes that file.
//!
//! # Architecture
//!
//! - Every operation re-reads the document; nothing is cached in memory
//! - Mutations rewrite the whole document through a temporary file that is
//!   renamed over the original, so readers never observe a partial write
//! - Mutations on one store are serialized by a write lock held across the
//!   read-modify-write sequence
//! - Expected outcomes (missing question, missing answer, rejected input) are
//!   distinct [`StoreError`] variants, separate from storage failures

mod config;
mod error;
mod store;

pub use config::StoreConfig;
pub use error::{ErrorKind, StoreError, StoreResult};
pub use store::QuestionStore;
