//! Match-stage evaluation.
//!
//! Evaluates a built predicate against raw documents: the per-column
//! conjunction must hold, and when a global-search disjunction is present
//! at least one of its clauses must hold too.

use serde_json::Value;

use crate::pipeline::{ClauseValue, MatchPredicate};

/// Checks a document against the full predicate
pub fn matches_predicate(document: &Value, predicate: &MatchPredicate) -> bool {
    let conjunction_holds = predicate
        .all_of
        .iter()
        .all(|(field, value)| matches_clause(document, field, value));
    if !conjunction_holds {
        return false;
    }
    if predicate.any_of.is_empty() {
        return true;
    }
    predicate
        .any_of
        .iter()
        .any(|clause| matches_clause(document, &clause.field, &clause.value))
}

/// Checks a single field clause. Missing fields never match.
fn matches_clause(document: &Value, field: &str, value: &ClauseValue) -> bool {
    let Some(actual) = document.get(field) else {
        return false;
    };
    match value {
        ClauseValue::Number(expected) => match actual {
            // Numeric equality, not substring: term "7" matches 7 and 7.0
            // but never "7" or 70.
            Value::Number(n) => {
                n.as_i64() == Some(*expected) || n.as_f64() == Some(*expected as f64)
            }
            _ => false,
        },
        ClauseValue::Text(expected) => actual.as_str() == Some(expected.as_str()),
        ClauseValue::Like(pattern) => actual
            .as_str()
            .map(|s| matches_like_pattern(s, pattern))
            .unwrap_or(false),
    }
}

/// LIKE-style matching: `%` matches any run, `_` a single character
pub fn matches_like_pattern(value: &str, pattern: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();
    like_match(&value, &pattern)
}

fn like_match(value: &[char], pattern: &[char]) -> bool {
    match pattern.split_first() {
        None => value.is_empty(),
        Some(('%', rest)) => {
            if rest.is_empty() {
                return true;
            }
            (0..=value.len()).any(|i| like_match(&value[i..], rest))
        }
        Some(('_', rest)) => !value.is_empty() && like_match(&value[1..], rest),
        Some((c, rest)) => value.first() == Some(c) && like_match(&value[1..], rest),
    }
}
