//! Typed reads on top of a [`ByteReader`].

use dbcodec_core::{
    HEADER_WIDTH, RawDataCodec, RowEntry, RowError, SIZE_WIDTH, Schema, SchemaSerializer,
};
use tracing::debug;

use crate::{error::IoError, stream::ByteReader};

// Raw reads grow the buffer this many bytes at a time, so a corrupt length
// fails at end of stream instead of allocating up front.
const READ_CHUNK: usize = 64 * 1024;

/// Reads integers, strings, schemas and rows from a byte stream.
#[derive(Debug)]
pub struct ValueReader<R> {
    inner: R,
    codec: RawDataCodec,
}

impl<R: ByteReader> ValueReader<R> {
    pub fn new(inner: R, codec: RawDataCodec) -> Self {
        Self { inner, codec }
    }

    pub fn codec(&self) -> RawDataCodec {
        self.codec
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read a `size`-byte unsigned integer.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds the native size width.
    pub fn read_value(&mut self, size: usize, position: Option<u64>) -> Result<u64, IoError> {
        assert!(
            size <= SIZE_WIDTH,
            "cannot read a {size}-byte value, the native size type is {SIZE_WIDTH} bytes"
        );
        let mut buf = [0u8; SIZE_WIDTH];
        self.inner.read(&mut buf[..size], position)?;
        Ok(self.codec.decode_uint(&buf[..size]))
    }

    pub fn read_raw(&mut self, size: usize, position: Option<u64>) -> Result<Vec<u8>, IoError> {
        let mut buf = Vec::with_capacity(size.min(READ_CHUNK));
        let mut position = position;
        if size == 0 {
            self.inner.read(&mut buf, position)?;
        }
        while buf.len() < size {
            let start = buf.len();
            buf.resize(start + (size - start).min(READ_CHUNK), 0);
            self.inner.read(&mut buf[start..], position.take())?;
        }
        Ok(buf)
    }

    /// Read bytes up to (and consuming) the next NUL.
    pub fn read_string(&mut self, position: Option<u64>) -> Result<String, IoError> {
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        self.inner.read(&mut byte, position)?;
        while byte[0] != 0 {
            bytes.push(byte[0]);
            self.inner.read(&mut byte, None)?;
        }
        String::from_utf8(bytes).map_err(|source| IoError::InvalidString {
            name: self.inner.name().to_string(),
            source,
        })
    }

    /// Read a header-prefixed schema record.
    pub fn read_schema(&mut self, position: Option<u64>) -> Result<Schema, IoError> {
        let length = self.read_value(HEADER_WIDTH, position)?;
        let body_len = length
            .checked_sub(HEADER_WIDTH as u64)
            .and_then(|len| usize::try_from(len).ok())
            .ok_or_else(|| IoError::InvalidHeader {
                name: self.inner.name().to_string(),
                length,
            })?;
        let body = self.read_raw(body_len, None)?;

        let schema = SchemaSerializer::new(self.codec)
            .deserialize(&body)
            .map_err(|source| IoError::Schema {
                name: self.inner.name().to_string(),
                source,
            })?;
        debug!(stream = self.inner.name(), schema = schema.name(), length, "read schema");
        Ok(schema)
    }

    /// Read one row of `schema.data_size()` bytes.
    pub fn read_row<'s>(
        &mut self,
        schema: &'s Schema,
        position: Option<u64>,
    ) -> Result<RowEntry<'s>, IoError> {
        let size = schema.data_size().ok_or_else(|| IoError::Row {
            name: self.inner.name().to_string(),
            source: RowError::SizeOverflow {
                schema: schema.name().to_string(),
            },
        })?;
        let bytes = self.read_raw(size, position)?;
        Ok(RowEntry::from_bytes(schema, self.codec, bytes))
    }
}
