//! A single row buffer interpreted through a borrowed [`Schema`].

use std::fmt::{self, Display, Formatter};

use tracing::trace;

use crate::{
    codec::RawDataCodec,
    error::RowError,
    schema::{FieldDescriptor, Schema},
    value::Value,
};

/// Row storage bound to the schema that describes it.
///
/// The schema is borrowed, so it must outlive every entry built on it.
#[derive(Debug, Clone)]
pub struct RowEntry<'s> {
    schema: &'s Schema,
    codec: RawDataCodec,
    storage: Vec<u8>,
}

impl<'s> RowEntry<'s> {
    /// A zero-filled row of `schema.data_size()` bytes.
    pub fn new(schema: &'s Schema, codec: RawDataCodec) -> Result<Self, RowError> {
        let size = schema.data_size().ok_or_else(|| RowError::SizeOverflow {
            schema: schema.name().to_string(),
        })?;
        Ok(Self {
            schema,
            codec,
            storage: vec![0; size],
        })
    }

    pub fn from_bytes(schema: &'s Schema, codec: RawDataCodec, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            schema,
            codec,
            storage: bytes.into(),
        }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn codec(&self) -> RawDataCodec {
        self.codec
    }

    pub fn storage(&self) -> &[u8] {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Vec<u8> {
        &mut self.storage
    }

    pub fn into_storage(self) -> Vec<u8> {
        self.storage
    }

    /// Byte range of the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the schema.
    pub fn field_bytes(&self, index: usize) -> Result<&[u8], RowError> {
        let field = self.schema.field(index);
        let offset = self.offset_of(index);
        self.slice(field, offset)
    }

    /// Overwrite the field at `index`; `bytes` must match the field size.
    pub fn set_field(&mut self, index: usize, bytes: &[u8]) -> Result<(), RowError> {
        let field = self.schema.field(index);
        let size = field.ty.size();
        if bytes.len() != size {
            return Err(RowError::SizeMismatch {
                field: field.name.clone(),
                expected: size,
                actual: bytes.len(),
            });
        }

        let offset = self.offset_of(index);
        let available = self.storage.len().saturating_sub(offset);
        let target = offset
            .checked_add(size)
            .and_then(|end| self.storage.get_mut(offset..end))
            .ok_or_else(|| RowError::ShortBuffer {
                field: field.name.clone(),
                offset,
                needed: size,
                available,
            })?;
        target.copy_from_slice(bytes);
        Ok(())
    }

    /// Decode every field in schema order.
    pub fn values(&self) -> Result<Vec<(&'s str, Value)>, RowError> {
        let mut out = Vec::with_capacity(self.schema.field_count());
        let mut offset = 0;
        for field in self.schema {
            let bytes = self.slice(field, offset)?;
            let value = self
                .codec
                .decode_value(bytes, field.ty)
                .map_err(|source| RowError::Conversion {
                    field: field.name.clone(),
                    source,
                })?;
            out.push((field.name.as_str(), value));
            offset += bytes.len();
        }
        Ok(out)
    }

    /// Render the row as one `name : value` line per field.
    pub fn render(&self) -> Result<String, RowError> {
        let mut out = String::new();
        let mut offset = 0;
        for field in self.schema {
            let bytes = self.slice(field, offset)?;
            let text = self
                .codec
                .stringize(bytes, field.ty)
                .map_err(|source| RowError::Conversion {
                    field: field.name.clone(),
                    source,
                })?;
            trace!(field = %field.name, offset, size = bytes.len(), "rendered field");
            out.push_str(&field.name);
            out.push_str(" : ");
            out.push_str(&text);
            out.push('\n');
            offset += bytes.len();
        }
        Ok(out)
    }

    // Saturates: an offset of `usize::MAX` lies past any real buffer.
    fn offset_of(&self, index: usize) -> usize {
        self.schema.fields()[..index]
            .iter()
            .fold(0usize, |acc, field| acc.saturating_add(field.ty.size()))
    }

    fn slice(&self, field: &FieldDescriptor, offset: usize) -> Result<&[u8], RowError> {
        let size = field.ty.size();
        offset
            .checked_add(size)
            .and_then(|end| self.storage.get(offset..end))
            .ok_or_else(|| RowError::ShortBuffer {
                field: field.name.clone(),
                offset,
                needed: size,
                available: self.storage.len().saturating_sub(offset),
            })
    }
}

/// Writes the rendered row, or `<invalid row: ...>` when it cannot be rendered.
impl Display for RowEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<invalid row: {err}>"),
        }
    }
}
