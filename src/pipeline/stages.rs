//! Aggregation stage types.
//!
//! A pipeline is built fresh per request and never persisted. Stage order
//! is fixed at execution time: match, group, sort, skip, limit, project.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One comparison against a stored field
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Numeric equality (search terms that parse as numbers)
    Number(i64),
    /// Exact string equality
    Text(String),
    /// LIKE-style pattern (`%` any run, `_` single char)
    Like(String),
}

impl ClauseValue {
    /// Builds the substring pattern the grid's regex flag produces
    pub fn contains(term: &str) -> Self {
        ClauseValue::Like(format!("%{}%", term))
    }
}

/// A field paired with its comparison, used in the global-search disjunction
#[derive(Debug, Clone, PartialEq)]
pub struct FieldClause {
    pub field: String,
    pub value: ClauseValue,
}

impl FieldClause {
    pub fn new(field: impl Into<String>, value: ClauseValue) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

/// Match predicate: a disjunction from the global search merged with
/// conjunctive per-column clauses. Column entries overwrite global entries
/// sharing the same key (map-merge semantics).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchPredicate {
    /// Global search: document matches if any clause matches
    pub any_of: Vec<FieldClause>,
    /// Column search: document matches only if every clause matches
    pub all_of: BTreeMap<String, ClauseValue>,
}

impl MatchPredicate {
    /// True when no clauses were built
    pub fn is_empty(&self) -> bool {
        self.any_of.is_empty() && self.all_of.is_empty()
    }
}

/// Sort stage: one field and a raw direction value.
///
/// Direction carries the wire values (-1 / +1) untouched; see the builder
/// for how request directions map onto them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: i8,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: i8) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// +1 sorts ascending, -1 descending
    pub fn is_ascending(&self) -> bool {
        self.direction >= 0
    }
}

/// Group stage: distinct values of `key` become group keys; each listed
/// output field takes its value from the first document seen in the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Storage field whose distinct values key the groups
    pub key: String,
    /// Output field name paired with the source field it is taken from
    #[serde(default)]
    pub first_fields: Vec<(String, String)>,
}

/// How one output field of a projection is produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    /// Field is dropped from the output
    Exclude,
    /// Field is copied through under its own name
    Include,
    /// Field is copied from another source field
    Rename(String),
}

/// Project stage: ordered output field list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub fields: Vec<(String, ProjectField)>,
}

/// The assembled pipeline, stages in fixed execution order.
///
/// Skip and limit are always present, even when zero; because they follow
/// the group stage, paging operates over grouped results when grouping is
/// active.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub match_stage: Option<MatchPredicate>,
    pub group: Option<GroupSpec>,
    pub sort: Option<SortSpec>,
    pub skip: u64,
    pub limit: u64,
    pub project: Option<ProjectSpec>,
}

impl Pipeline {
    /// True when either stage that narrows the document set is present
    pub fn has_filter_stage(&self) -> bool {
        self.match_stage.is_some() || self.group.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_wraps_in_wildcards() {
        assert_eq!(
            ClauseValue::contains("abc"),
            ClauseValue::Like("%abc%".to_string())
        );
    }

    #[test]
    fn empty_predicate() {
        let predicate = MatchPredicate::default();
        assert!(predicate.is_empty());

        let mut predicate = MatchPredicate::default();
        predicate
            .all_of
            .insert("a".to_string(), ClauseValue::Number(1));
        assert!(!predicate.is_empty());
    }

    #[test]
    fn sort_direction_sign() {
        assert!(SortSpec::new("a", 1).is_ascending());
        assert!(!SortSpec::new("a", -1).is_ascending());
    }

    #[test]
    fn group_spec_deserializes() {
        let group: GroupSpec = serde_json::from_value(serde_json::json!({
            "key": "a",
            "first_fields": [["id", "_id"], ["c", "b"]]
        }))
        .unwrap();
        assert_eq!(group.key, "a");
        assert_eq!(group.first_fields.len(), 2);
    }

    #[test]
    fn project_field_deserializes() {
        let project: ProjectSpec = serde_json::from_value(serde_json::json!({
            "fields": [
                ["_id", "exclude"],
                ["id", "include"],
                ["a", {"rename": "_id"}]
            ]
        }))
        .unwrap();
        assert_eq!(project.fields[0].1, ProjectField::Exclude);
        assert_eq!(project.fields[2].1, ProjectField::Rename("_id".to_string()));
    }

    #[test]
    fn filter_stage_detection() {
        let mut pipeline = Pipeline::default();
        assert!(!pipeline.has_filter_stage());

        pipeline.group = Some(GroupSpec {
            key: "a".to_string(),
            first_fields: vec![],
        });
        assert!(pipeline.has_filter_stage());
    }
}
