//! Error types for the codec layer.

use crate::data_type::DataType;

/// A byte range could not be converted to a value of the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Integer field wider than the widest representable integer.
    #[error(
        "data conversion failure: {kind} field of {size} bytes must be narrower than {limit} bytes"
    )]
    IntegerTooWide {
        kind: DataType,
        size: usize,
        limit: usize,
    },

    /// Floating point field wider than the widest floating point type.
    #[error(
        "data conversion failure: {kind} field of {size} bytes exceeds the widest floating point type ({max} bytes)"
    )]
    FloatTooWide {
        kind: DataType,
        size: usize,
        max: usize,
    },

    /// Not enough bytes to decode a value of the given kind.
    #[error("data conversion failure: {kind} needs at least {needed} bytes, got {actual}")]
    NotEnoughBytes {
        kind: DataType,
        needed: usize,
        actual: usize,
    },
}

/// A schema or field was constructed with an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("field #{index} of schema '{schema_name}' has an empty name")]
    EmptyFieldName { schema_name: String, index: usize },

    #[error("name '{name}' contains a NUL byte")]
    NulInName { name: String },
}

/// Serialized schema metadata could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaDecodeError {
    /// A name is not followed by a NUL terminator before the end of input.
    #[error("malformed schema: unterminated name at offset {offset}")]
    UnterminatedName { offset: usize },

    /// A name is not valid UTF-8.
    #[error("malformed schema: name at offset {offset} is not valid UTF-8")]
    InvalidName { offset: usize },

    /// A type-id does not map to any [`DataType`] variant.
    #[error("malformed schema: unknown type id {type_id} for field '{field}'")]
    UnknownTypeId { field: String, type_id: u64 },

    /// The input ends in the middle of a field record.
    #[error(
        "malformed schema: field '{field}' is truncated at offset {offset} (need {needed} bytes, {remaining} left)"
    )]
    TruncatedField {
        field: String,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The decoded names do not form a valid schema.
    #[error("malformed schema: {0}")]
    Invalid(#[from] SchemaError),
}

/// A row buffer could not be rendered or updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The row buffer ends before the field does.
    #[error("row buffer too short for field '{field}': need {needed} bytes at offset {offset}, have {available}")]
    ShortBuffer {
        field: String,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A field value could not be converted.
    #[error("failed to convert field '{field}': {source}")]
    Conversion {
        field: String,
        #[source]
        source: ConversionError,
    },

    /// The field sizes of the schema do not fit in memory.
    #[error("row size of schema '{schema}' overflows the address space")]
    SizeOverflow { schema: String },

    /// Bytes written to a field do not match its size.
    #[error("field '{field}' expects {expected} bytes, got {actual}")]
    SizeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}

/// A type descriptor string such as `INTEGER(32)` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTypeError {
    #[error("unknown data type '{0}'")]
    UnknownKind(String),

    #[error("malformed type descriptor '{0}'")]
    Malformed(String),

    #[error("invalid type modifier '{0}'")]
    InvalidModifier(String),
}
