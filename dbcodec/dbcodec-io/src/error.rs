//! Error types for byte streams and schema framing.

use std::{io, string::FromUtf8Error};

use dbcodec_core::{RowError, SchemaDecodeError};

/// Failure of a named byte stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The stream could not be opened.
    #[error("failed to open '{name}': {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Seeking to an absolute position failed.
    #[error("failed to seek to offset {position} in '{name}': {source}")]
    Seek {
        name: String,
        position: u64,
        #[source]
        source: io::Error,
    },

    /// A read ran past the end of the stream.
    #[error("attempted to read beyond the end of '{name}'")]
    UnexpectedEof { name: String },

    /// Hard I/O error reported by the operating system.
    #[error("I/O error on '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The operation failed without an underlying OS error.
    #[error("stream operation failed on '{name}': {detail}")]
    Failed { name: String, detail: String },
}

impl StreamError {
    pub(crate) fn from_io(name: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::UnexpectedEof => Self::UnexpectedEof {
                name: name.to_string(),
            },
            io::ErrorKind::WriteZero => Self::Failed {
                name: name.to_string(),
                detail: source.to_string(),
            },
            _ => Self::Io {
                name: name.to_string(),
                source,
            },
        }
    }

    /// Name of the stream the failure happened on.
    pub fn name(&self) -> &str {
        match self {
            Self::Open { name, .. }
            | Self::Seek { name, .. }
            | Self::UnexpectedEof { name }
            | Self::Io { name, .. }
            | Self::Failed { name, .. } => name,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

/// Errors produced by [`ValueReader`](crate::ValueReader) and
/// [`ValueWriter`](crate::ValueWriter).
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// A schema header announces fewer bytes than the header itself, or more
    /// than fit in memory.
    #[error("invalid schema header in '{name}': record length {length} is out of range")]
    InvalidHeader { name: String, length: u64 },

    /// Schema metadata read from the stream is malformed.
    #[error("failed to decode schema from '{name}': {source}")]
    Schema {
        name: String,
        #[source]
        source: SchemaDecodeError,
    },

    /// A row laid out by the schema cannot be read.
    #[error("failed to read row from '{name}': {source}")]
    Row {
        name: String,
        #[source]
        source: RowError,
    },

    /// A NUL-terminated string is not valid UTF-8.
    #[error("string read from '{name}' is not valid UTF-8: {source}")]
    InvalidString {
        name: String,
        #[source]
        source: FromUtf8Error,
    },
}
