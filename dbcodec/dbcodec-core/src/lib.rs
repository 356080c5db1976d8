//! Schema-driven binary record codec.
//!
//! This crate provides the scalar type model ([`DataType`] / [`TypeDescriptor`]),
//! [`Schema`]s, the endianness-aware [`RawDataCodec`], the [`SchemaSerializer`]
//! and the [`RowEntry`] row view.

mod codec;
mod data_type;
mod entry;
mod error;
mod schema;
mod serializer;
mod value;

pub use codec::{Endianness, RawDataCodec, reverse_bytes};
pub use data_type::{DataType, PACKED_SIZE, SIZE_WIDTH, SizeType, TYPE_ID_WIDTH, TypeDescriptor};
pub use entry::RowEntry;
pub use error::{ConversionError, ParseTypeError, RowError, SchemaDecodeError, SchemaError};
pub use schema::{FieldDescriptor, Schema, format_schema};
pub use serializer::{HEADER_WIDTH, SchemaSerializer};
pub use value::Value;
