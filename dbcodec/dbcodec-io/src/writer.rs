//! Typed writes on top of a [`ByteWriter`].

use dbcodec_core::{RawDataCodec, RowEntry, Schema, SchemaSerializer};
use tracing::debug;

use crate::{error::IoError, stream::ByteWriter};

/// Writes integers, strings, schemas and rows to a byte stream.
#[derive(Debug)]
pub struct ValueWriter<W> {
    inner: W,
    codec: RawDataCodec,
}

impl<W: ByteWriter> ValueWriter<W> {
    pub fn new(inner: W, codec: RawDataCodec) -> Self {
        Self { inner, codec }
    }

    pub fn codec(&self) -> RawDataCodec {
        self.codec
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write the low `size` bytes of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in `size` bytes or `size` exceeds the
    /// native size width.
    pub fn write_value(&mut self, value: u64, size: usize, position: Option<u64>) -> Result<(), IoError> {
        let bytes = self.codec.encode_uint(value, size);
        self.inner.write(&bytes, position)?;
        Ok(())
    }

    pub fn write_raw(&mut self, bytes: &[u8], position: Option<u64>) -> Result<(), IoError> {
        self.inner.write(bytes, position)?;
        Ok(())
    }

    /// Write `s` followed by a NUL terminator.
    pub fn write_string(&mut self, s: &str, position: Option<u64>) -> Result<(), IoError> {
        self.inner.write(s.as_bytes(), position)?;
        self.inner.write(&[0], None)?;
        Ok(())
    }

    /// Write a header-prefixed schema record and return its length.
    pub fn write_schema(&mut self, schema: &Schema, position: Option<u64>) -> Result<usize, IoError> {
        let bytes = SchemaSerializer::new(self.codec).serialize(schema);
        self.inner.write(&bytes, position)?;
        debug!(stream = self.inner.name(), schema = schema.name(), length = bytes.len(), "wrote schema");
        Ok(bytes.len())
    }

    pub fn write_row(&mut self, entry: &RowEntry<'_>, position: Option<u64>) -> Result<(), IoError> {
        self.inner.write(entry.storage(), position)?;
        Ok(())
    }
}
