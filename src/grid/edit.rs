//! Inline-edit command extraction.
//!
//! The edit call arrives on the same endpoint as data calls, flagged by an
//! `edit` parameter, with the target document id, the display column name,
//! and the submitted value.

use std::collections::HashMap;

use super::errors::{GridError, GridResult};

/// Parameter whose presence selects the inline-edit path
pub const EDIT_FLAG: &str = "edit";

/// One single-field update, keyed by document identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    /// Table context flag choosing the collection/view
    pub table: String,
    /// Primary-key value of the target document
    pub id: String,
    /// Display field name of the edited column
    pub column: String,
    /// Submitted replacement value (the grid serializes form text)
    pub new_value: String,
}

impl EditCommand {
    /// True when the parameter map selects the edit path
    pub fn is_edit_call(params: &HashMap<String, String>) -> bool {
        params.contains_key(EDIT_FLAG)
    }

    /// Extracts the command; every field is required
    pub fn from_params(params: &HashMap<String, String>) -> GridResult<Self> {
        Ok(Self {
            table: require(params, "table")?,
            id: require(params, "id")?,
            column: require(params, "column")?,
            new_value: require(params, "newValue")?,
        })
    }
}

fn require(params: &HashMap<String, String>, key: &'static str) -> GridResult<String> {
    params
        .get(key)
        .cloned()
        .ok_or(GridError::MissingParam(key))
}
