//! Schema metadata (de)serialization.
//!
//! Layout, with every number encoded by the serializer's [`RawDataCodec`]:
//!
//! ```text
//! [total length: SIZE_WIDTH]     header inclusive
//! [schema name][0x00]
//! per field:
//!   [field name][0x00]
//!   [type id: TYPE_ID_WIDTH]
//!   [modifier: SIZE_WIDTH]
//! ```

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::{
    codec::RawDataCodec,
    data_type::{DataType, PACKED_SIZE, SIZE_WIDTH, TYPE_ID_WIDTH, TypeDescriptor},
    error::SchemaDecodeError,
    schema::{FieldDescriptor, Schema},
};

/// Width of the length header written in front of every serialized schema.
pub const HEADER_WIDTH: usize = SIZE_WIDTH;

#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaSerializer {
    codec: RawDataCodec,
}

impl SchemaSerializer {
    pub fn new(codec: RawDataCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> RawDataCodec {
        self.codec
    }

    /// Encode `schema` into a header-prefixed buffer of
    /// `HEADER_WIDTH + schema.metadata_size()` bytes.
    pub fn serialize(&self, schema: &Schema) -> Bytes {
        let total = HEADER_WIDTH + schema.metadata_size();
        let mut buf = BytesMut::with_capacity(total);
        buf.put_bytes(0, HEADER_WIDTH);

        buf.put_slice(schema.name().as_bytes());
        buf.put_u8(0);

        for field in schema {
            buf.put_slice(field.name.as_bytes());
            buf.put_u8(0);
            buf.put_slice(
                &self
                    .codec
                    .encode_uint(u64::from(field.ty.kind.id()), TYPE_ID_WIDTH),
            );
            buf.put_slice(&self.codec.encode_uint(field.ty.modifier, SIZE_WIDTH));
        }
        debug_assert_eq!(buf.len(), total);

        let header = self.codec.encode_uint(buf.len() as u64, HEADER_WIDTH);
        buf[..HEADER_WIDTH].copy_from_slice(&header);

        debug!(
            schema = schema.name(),
            fields = schema.field_count(),
            bytes = buf.len(),
            endianness = %self.codec.endianness(),
            "serialized schema"
        );
        buf.freeze()
    }

    /// Total record length stored in the header of a serialized schema.
    pub fn read_header(&self, bytes: &[u8]) -> Option<u64> {
        bytes
            .get(..HEADER_WIDTH)
            .map(|header| self.codec.decode_uint(header))
    }

    /// The body of a serialized schema, i.e. what [`deserialize`](Self::deserialize) expects.
    pub fn strip_header(bytes: &[u8]) -> Option<&[u8]> {
        bytes.get(HEADER_WIDTH..)
    }

    /// Decode a schema body. The length header must already be stripped.
    pub fn deserialize(&self, body: &[u8]) -> Result<Schema, SchemaDecodeError> {
        let total = body.len();
        let mut buf = body;

        let name = read_name(&mut buf, total)?;
        let mut fields = Vec::new();

        while buf.has_remaining() {
            let field_name = read_name(&mut buf, total)?;
            if buf.remaining() < PACKED_SIZE {
                return Err(SchemaDecodeError::TruncatedField {
                    field: field_name,
                    offset: total - buf.remaining(),
                    needed: PACKED_SIZE,
                    remaining: buf.remaining(),
                });
            }

            let type_id = self
                .codec
                .decode_integer::<TYPE_ID_WIDTH>(&buf.chunk()[..TYPE_ID_WIDTH]);
            buf.advance(TYPE_ID_WIDTH);
            let kind = u16::try_from(type_id)
                .ok()
                .and_then(DataType::from_id)
                .ok_or_else(|| SchemaDecodeError::UnknownTypeId {
                    field: field_name.clone(),
                    type_id,
                })?;

            let modifier = self.codec.decode_uint(&buf.chunk()[..SIZE_WIDTH]);
            buf.advance(SIZE_WIDTH);

            fields.push(FieldDescriptor::new(
                field_name,
                TypeDescriptor::new(kind, modifier),
            ));
        }

        debug!(schema = %name, fields = fields.len(), bytes = total, "deserialized schema");
        Ok(Schema::new(name, fields)?)
    }
}

fn read_name(buf: &mut &[u8], total: usize) -> Result<String, SchemaDecodeError> {
    let offset = total - buf.remaining();
    let end = buf
        .chunk()
        .iter()
        .position(|byte| *byte == 0)
        .ok_or(SchemaDecodeError::UnterminatedName { offset })?;
    let name = std::str::from_utf8(&buf.chunk()[..end])
        .map_err(|_| SchemaDecodeError::InvalidName { offset })?
        .to_string();
    buf.advance(end + 1);
    Ok(name)
}
