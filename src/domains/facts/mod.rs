//! Facts domain module.
//!
//! This module implements the fact-verification core: the reference
//! dataset model and loader, the LCS similarity scorer, and the matcher
//! that turns two competing claims into a verdict.
//!
//! ## Architecture
//!
//! - `models.rs` - dataset records, queries, and match results
//! - `store.rs` - dataset loading (read fresh per call)
//! - `similarity.rs` - normalized LCS similarity ratio
//! - `matcher.rs` - exact pass + approximate best-match pass
//! - `error.rs` - dataset load errors
//!
//! Verification is exposed to clients through the `verify_facts` tool in
//! `domains/tools/definitions/`.

mod error;
pub mod matcher;
pub mod models;
pub mod similarity;
pub mod store;

pub use error::{FactsError, FactsResult};
pub use matcher::{DEFAULT_SIMILARITY_THRESHOLD, verify};
pub use models::{Designation, FactPair, FactRecord, MatchResult, Query};
pub use similarity::similarity;
pub use store::{FactStore, FileFactStore};
