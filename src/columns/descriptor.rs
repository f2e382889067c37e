//! Column descriptor table.
//!
//! A descriptor maps one storage field (`db`) to the display field (`dt`)
//! the grid shows. Descriptors are defined once per table configuration;
//! their order determines output row field ordering.

use serde::{Deserialize, Serialize};

use super::errors::{ColumnError, ColumnResult};
use super::formatter::Formatter;

/// One storage-field-to-display-field mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Storage field name in the collection
    pub db: String,

    /// Display field name in grid rows
    pub dt: String,

    /// Formatter applied when shaping rows (default: verbatim copy)
    #[serde(default)]
    pub formatter: Formatter,

    /// Whether inline edits may target this column (default: read-only)
    #[serde(default)]
    pub editable: bool,
}

impl ColumnDescriptor {
    /// Creates an identity-formatted, read-only descriptor
    pub fn new(db: impl Into<String>, dt: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            dt: dt.into(),
            formatter: Formatter::Identity,
            editable: false,
        }
    }

    /// Sets the formatter
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Marks the column editable via the inline-edit path
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }
}

/// Ordered descriptor table for one grid view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnTable {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnTable {
    /// Creates a table from an ordered descriptor list
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// Iterates descriptors in display order
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter()
    }

    /// Looks up a descriptor by display field name
    pub fn by_display(&self, dt: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.dt == dt)
    }

    /// Display-name lookup that must succeed; a miss is a caller error
    pub fn require_display(&self, dt: &str) -> ColumnResult<&ColumnDescriptor> {
        self.by_display(dt)
            .ok_or_else(|| ColumnError::UnknownDisplayColumn(dt.to_string()))
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no descriptors are configured
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<Vec<ColumnDescriptor>> for ColumnTable {
    fn from(columns: Vec<ColumnDescriptor>) -> Self {
        Self::new(columns)
    }
}
