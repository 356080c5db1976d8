//! Table schemas: ordered, named collections of typed fields.

mod format;
mod types;

pub use format::format_schema;
pub use types::{FieldDescriptor, Schema};
