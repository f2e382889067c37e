//! Column descriptor subsystem
//!
//! Static per-table mapping from storage field names to display field
//! names, plus the formatter applied when shaping rows. Descriptor order
//! determines output row field ordering.

mod descriptor;
mod errors;
mod formatter;

pub use descriptor::{ColumnDescriptor, ColumnTable};
pub use errors::{ColumnError, ColumnResult};
pub use formatter::Formatter;
