//! Value formatters applied when shaping result rows.
//!
//! Formatters are a closed set of tagged kinds rather than per-column
//! closures, so each one is unit-testable independent of row iteration.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ColumnError, ColumnResult};

/// How a raw stored value becomes a display value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formatter {
    /// Copy the raw value verbatim
    #[default]
    Identity,
    /// Render the document identifier as the grid row id string
    RowId,
    /// Render epoch seconds as `YYYY-MM-DD HH:MM:SS` (UTC)
    EpochDate,
}

impl Formatter {
    /// Applies the formatter to a raw field value.
    ///
    /// The full raw document is passed alongside the value; formatters that
    /// only need the value ignore it. Failures are not recovered — they
    /// abort output construction for the whole request.
    pub fn apply(&self, raw: &Value, _document: &Value) -> ColumnResult<Value> {
        match self {
            Formatter::Identity => Ok(raw.clone()),
            Formatter::RowId => match raw {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Number(n) => Ok(Value::String(n.to_string())),
                other => Err(ColumnError::MalformedIdentifier(other.to_string())),
            },
            Formatter::EpochDate => {
                let secs = raw
                    .as_i64()
                    .ok_or_else(|| ColumnError::MalformedTimestamp(raw.to_string()))?;
                let rendered = Utc
                    .timestamp_opt(secs, 0)
                    .single()
                    .ok_or_else(|| ColumnError::MalformedTimestamp(raw.to_string()))?
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string();
                Ok(Value::String(rendered))
            }
        }
    }
}
