use std::fmt::{Result, Write};

use super::Schema;

/// Format a schema as its name followed by one indented `field: TYPE` line per field.
pub fn format_schema(schema: &Schema, out: &mut impl Write) -> Result {
    writeln!(out, "{}", schema.name())?;
    for field in schema.iter() {
        writeln!(out, "    {}: {}", field.name, field.ty)?;
    }
    Ok(())
}
