//! Byte stream collaborators for `dbcodec`.
//!
//! Key components:
//! - [`ByteReader`] / [`ByteWriter`] — positional byte streams, implemented for
//!   [`FileHandle`] and in-memory cursors
//! - [`HandleStore`] — owned cache of open file handles
//! - [`ValueReader`] / [`ValueWriter`] — integers, strings, header-prefixed
//!   schema records and rows on top of a stream

mod error;
mod handle_store;
mod reader;
mod stream;
mod writer;

pub use error::{IoError, StreamError};
pub use handle_store::HandleStore;
pub use reader::ValueReader;
pub use stream::{ByteReader, ByteWriter, FileHandle, StreamGoal};
pub use writer::ValueWriter;
