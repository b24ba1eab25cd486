//! Fact matcher: exact lookup with an approximate best-match fallback.
//!
//! The matcher scans the reference dataset twice at most. The exact pass
//! compares both claims verbatim, in either orientation, and returns on
//! the first hit. Only when nothing matches exactly does the approximate
//! pass score every record via the LCS similarity ratio and keep the
//! single best-scoring record above the acceptance threshold.
//!
//! Whenever a record aligns with the query in swapped order, the recorded
//! designation is flipped so that the result always names the caller's
//! query positions.

use tracing::debug;

use super::models::{Designation, FactRecord, MatchResult, Query};
use super::similarity::similarity;

/// Acceptance threshold for the approximate pass. Exclusive: a score of
/// exactly this value does not qualify. Heuristic, overridable via
/// `FactsConfig`.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Verify a query against the dataset.
///
/// Never fails on well-formed string inputs; dataset-load failures are
/// handled by the caller before this point.
pub fn verify(query: &Query, dataset: &[FactRecord], threshold: f64) -> MatchResult {
    if let Some(result) = exact_match(query, dataset) {
        debug!("Exact match: {}", result.response_text());
        return result;
    }

    best_approximate(query, dataset, threshold)
}

/// Scan the dataset in order and return on the first record whose claims
/// equal the query's claims, straight or swapped. First match wins; the
/// dataset sequence decides between duplicate pairs.
fn exact_match(query: &Query, dataset: &[FactRecord]) -> Option<MatchResult> {
    for record in dataset {
        if record.facts.fact1 == query.fact1 && record.facts.fact2 == query.fact2 {
            return Some(MatchResult::Exact(record.correct_fact));
        }
        if record.facts.fact1 == query.fact2 && record.facts.fact2 == query.fact1 {
            return Some(MatchResult::Exact(record.correct_fact.flipped()));
        }
    }
    None
}

/// Score every record in both alignments and keep the single best.
///
/// Per record the score is the better alignment's similarity sum divided
/// by two, so it stays in `[0, 1]`. Straight alignment wins a per-record
/// tie; across records the first-seen best wins (strict `>` comparison).
fn best_approximate(query: &Query, dataset: &[FactRecord], threshold: f64) -> MatchResult {
    let mut best: Option<(f64, Designation)> = None;

    for record in dataset {
        let straight = similarity(&query.fact1, &record.facts.fact1)
            + similarity(&query.fact2, &record.facts.fact2);
        let swapped = similarity(&query.fact1, &record.facts.fact2)
            + similarity(&query.fact2, &record.facts.fact1);

        let (score, designation) = if swapped > straight {
            (swapped / 2.0, record.correct_fact.flipped())
        } else {
            (straight / 2.0, record.correct_fact)
        };

        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, designation));
        }
    }

    match best {
        Some((score, designation)) if score > threshold => {
            debug!("Approximate match: {} (score {:.3})", designation, score);
            MatchResult::Approximate { designation, score }
        }
        _ => MatchResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::facts::models::FactPair;

    fn record(fact1: &str, fact2: &str, correct: Designation) -> FactRecord {
        FactRecord {
            facts: FactPair {
                fact1: fact1.to_string(),
                fact2: fact2.to_string(),
            },
            correct_fact: correct,
        }
    }

    fn sun_dataset() -> Vec<FactRecord> {
        vec![record(
            "Sun is a star",
            "Sun is a planet",
            Designation::Fact1,
        )]
    }

    #[test]
    fn test_exact_match_straight() {
        let query = Query::new("Sun is a star", "Sun is a planet");
        let result = verify(&query, &sun_dataset(), DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(result, MatchResult::Exact(Designation::Fact1));
        assert_eq!(result.response_text(), "fact1");
    }

    #[test]
    fn test_exact_match_swapped_flips_designation() {
        let query = Query::new("Sun is a planet", "Sun is a star");
        let result = verify(&query, &sun_dataset(), DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(result, MatchResult::Exact(Designation::Fact2));
        assert_eq!(result.response_text(), "fact2");
    }

    #[test]
    fn test_exact_match_is_order_insensitive_and_complementary() {
        let dataset = sun_dataset();
        let straight = verify(
            &Query::new("Sun is a star", "Sun is a planet"),
            &dataset,
            DEFAULT_SIMILARITY_THRESHOLD,
        );
        let swapped = verify(
            &Query::new("Sun is a planet", "Sun is a star"),
            &dataset,
            DEFAULT_SIMILARITY_THRESHOLD,
        );
        assert_eq!(straight.designation().unwrap().flipped(), swapped.designation().unwrap());
    }

    #[test]
    fn test_approximate_match_near_identical_wording() {
        // Minor punctuation/casing differences defeat the exact pass but
        // score well above the threshold in straight alignment.
        let query = Query::new("The sun is a star.", "The sun is a planet.");
        let result = verify(&query, &sun_dataset(), DEFAULT_SIMILARITY_THRESHOLD);
        match result {
            MatchResult::Approximate { designation, score } => {
                assert_eq!(designation, Designation::Fact1);
                assert!(score > DEFAULT_SIMILARITY_THRESHOLD);
            }
            other => panic!("expected approximate match, got {:?}", other),
        }
    }

    #[test]
    fn test_approximate_match_swapped_flips_designation() {
        let query = Query::new("The sun is a planet.", "The sun is a star.");
        let result = verify(&query, &sun_dataset(), DEFAULT_SIMILARITY_THRESHOLD);
        match result {
            MatchResult::Approximate { designation, .. } => {
                assert_eq!(designation, Designation::Fact2);
            }
            other => panic!("expected approximate match, got {:?}", other),
        }
    }

    #[test]
    fn test_unrelated_strings_find_nothing() {
        let query = Query::new("zzzz qqqq", "wwww kkkk");
        let result = verify(&query, &sun_dataset(), DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(result, MatchResult::NoMatch);
        assert_eq!(result.response_text(), "No match found");
    }

    #[test]
    fn test_empty_dataset_finds_nothing() {
        let query = Query::new("Sun is a star", "Sun is a planet");
        assert_eq!(
            verify(&query, &[], DEFAULT_SIMILARITY_THRESHOLD),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Identical second claims, completely disjoint first claims:
        // per-record score is exactly (0 + 1) / 2 = 0.5.
        let dataset = vec![record("aaaa", "same claim", Designation::Fact1)];
        let query = Query::new("bbbb", "same claim");
        assert_eq!(verify(&query, &dataset, 0.5), MatchResult::NoMatch);
        // Lowering the threshold below the score accepts the record.
        match verify(&query, &dataset, 0.49) {
            MatchResult::Approximate { score, .. } => assert_eq!(score, 0.5),
            other => panic!("expected approximate match, got {:?}", other),
        }
    }

    #[test]
    fn test_first_exact_match_wins_on_duplicates() {
        let dataset = vec![
            record("X", "Y", Designation::Fact1),
            record("X", "Y", Designation::Fact2),
        ];
        let query = Query::new("X", "Y");
        assert_eq!(
            verify(&query, &dataset, DEFAULT_SIMILARITY_THRESHOLD),
            MatchResult::Exact(Designation::Fact1)
        );
    }

    #[test]
    fn test_best_record_wins_approximate_pass() {
        let dataset = vec![
            record("The moon orbits Mars", "The moon orbits Venus", Designation::Fact1),
            record("The Moon orbits the Earth", "The Moon orbits the Sun", Designation::Fact1),
        ];
        let query = Query::new("The Moon orbits the Earth!", "The Moon orbits the Sun!");
        match verify(&query, &dataset, DEFAULT_SIMILARITY_THRESHOLD) {
            MatchResult::Approximate { designation, score } => {
                assert_eq!(designation, Designation::Fact1);
                assert!(score > 0.9);
            }
            other => panic!("expected approximate match, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let dataset = sun_dataset();
        let query = Query::new("The sun is a star.", "The sun is a planet.");
        let first = verify(&query, &dataset, DEFAULT_SIMILARITY_THRESHOLD);
        let second = verify(&query, &dataset, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(first, second);
    }
}
