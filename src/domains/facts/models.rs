//! Data model for the fact-verification domain.
//!
//! The reference dataset is a sequence of [`FactRecord`] entries: two
//! mutually exclusive claims plus a designation of which one is true.
//! Records are immutable once loaded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names one of the two claim positions in a record or query.
///
/// Serialized as `"fact1"` / `"fact2"`, both in the dataset file and in
/// tool responses. A designation returned by the matcher always refers to
/// the caller's query positions, never to dataset positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Designation {
    Fact1,
    Fact2,
}

impl Designation {
    /// The opposite position (fact1 <-> fact2).
    pub fn flipped(self) -> Self {
        match self {
            Self::Fact1 => Self::Fact2,
            Self::Fact2 => Self::Fact1,
        }
    }

    /// Wire label as used in the dataset file and tool responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fact1 => "fact1",
            Self::Fact2 => "fact2",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two claims of a record, positionally tagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactPair {
    /// First claim.
    pub fact1: String,

    /// Second claim.
    pub fact2: String,
}

/// One ground-truth entry of the reference dataset.
///
/// Deserialization enforces the record shape: both claims and a valid
/// `correct_fact` literal must be present, otherwise the dataset is
/// rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    /// The pair of competing claims.
    pub facts: FactPair,

    /// Which of the two claims is recorded as true.
    pub correct_fact: Designation,
}

/// The two claims submitted by a caller.
///
/// Unordered in meaning but positionally tagged; the matcher corrects for
/// orientation when a record aligns with the query in swapped order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub fact1: String,
    pub fact2: String,
}

impl Query {
    pub fn new(fact1: impl Into<String>, fact2: impl Into<String>) -> Self {
        Self {
            fact1: fact1.into(),
            fact2: fact2.into(),
        }
    }
}

/// Outcome of a verification call.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// A record matched both claims verbatim (straight or swapped).
    Exact(Designation),

    /// The best-scoring record cleared the similarity threshold.
    Approximate {
        designation: Designation,
        score: f64,
    },

    /// Neither an exact nor a sufficiently similar record exists.
    /// This is a valid terminal outcome, not an error.
    NoMatch,
}

impl MatchResult {
    /// Response text for callers when no record matched.
    pub const NO_MATCH_MESSAGE: &'static str = "No match found";

    /// The designation, if any record matched.
    pub fn designation(&self) -> Option<Designation> {
        match self {
            Self::Exact(designation) | Self::Approximate { designation, .. } => Some(*designation),
            Self::NoMatch => None,
        }
    }

    /// Map the result to the external response shape: `"fact1"`,
    /// `"fact2"`, or `"No match found"`.
    pub fn response_text(&self) -> &'static str {
        match self.designation() {
            Some(designation) => designation.as_str(),
            None => Self::NO_MATCH_MESSAGE,
        }
    }
}
