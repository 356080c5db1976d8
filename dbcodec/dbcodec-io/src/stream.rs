//! Positional byte streams consumed by the value reader and writer.

use std::{
    fs::{File, OpenOptions},
    io::{Cursor, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::error::StreamError;

const MEMORY_STREAM_NAME: &str = "<memory>";

/// Direction a stream is opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamGoal {
    Read,
    Write,
}

/// Source of raw bytes, optionally read from an absolute position.
pub trait ByteReader {
    /// Name used in error reports (usually the file name).
    fn name(&self) -> &str;

    /// Fill `buf` completely, seeking to `position` first when given.
    fn read(&mut self, buf: &mut [u8], position: Option<u64>) -> Result<(), StreamError>;
}

/// Sink for raw bytes, optionally written at an absolute position.
pub trait ByteWriter {
    /// Name used in error reports (usually the file name).
    fn name(&self) -> &str;

    /// Write all of `buf`, seeking to `position` first when given.
    fn write(&mut self, buf: &[u8], position: Option<u64>) -> Result<(), StreamError>;
}

impl<T: ByteReader + ?Sized> ByteReader for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&mut self, buf: &mut [u8], position: Option<u64>) -> Result<(), StreamError> {
        (**self).read(buf, position)
    }
}

impl<T: ByteWriter + ?Sized> ByteWriter for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write(&mut self, buf: &[u8], position: Option<u64>) -> Result<(), StreamError> {
        (**self).write(buf, position)
    }
}

fn seek_to(stream: &mut impl Seek, name: &str, position: Option<u64>) -> Result<(), StreamError> {
    if let Some(position) = position {
        stream
            .seek(SeekFrom::Start(position))
            .map_err(|source| StreamError::Seek {
                name: name.to_string(),
                position,
                source,
            })?;
    }
    Ok(())
}

fn read_at(
    stream: &mut (impl Read + Seek),
    name: &str,
    buf: &mut [u8],
    position: Option<u64>,
) -> Result<(), StreamError> {
    seek_to(stream, name, position)?;
    stream
        .read_exact(buf)
        .map_err(|source| StreamError::from_io(name, source))
}

fn write_at(
    stream: &mut (impl Write + Seek),
    name: &str,
    buf: &[u8],
    position: Option<u64>,
) -> Result<(), StreamError> {
    seek_to(stream, name, position)?;
    stream
        .write_all(buf)
        .map_err(|source| StreamError::from_io(name, source))
}

/// An open file together with the name it was opened under.
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
    name: String,
    goal: StreamGoal,
    file: File,
}

impl FileHandle {
    /// Open `path` for `goal`. Write handles create the file if missing and
    /// never truncate it.
    pub fn open(path: impl AsRef<Path>, goal: StreamGoal) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let opened = match goal {
            StreamGoal::Read => File::open(path),
            StreamGoal::Write => OpenOptions::new().write(true).create(true).truncate(false).open(path),
        };
        let file = opened.map_err(|source| StreamError::Open {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            name,
            goal,
            file,
        })
    }

    /// Create (or truncate) `path` for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::create(path).map_err(|source| StreamError::Open {
            name: name.clone(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            name,
            goal: StreamGoal::Write,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn goal(&self) -> StreamGoal {
        self.goal
    }

    pub fn position(&mut self) -> Result<u64, StreamError> {
        self.file
            .stream_position()
            .map_err(|source| StreamError::from_io(&self.name, source))
    }

    pub fn seek(&mut self, position: u64) -> Result<(), StreamError> {
        seek_to(&mut self.file, &self.name, Some(position))
    }

    pub fn rewind(&mut self) -> Result<(), StreamError> {
        self.seek(0)
    }

    /// Whether the cursor sits at (or past) the end of the file.
    pub fn at_end(&mut self) -> Result<bool, StreamError> {
        let len = self
            .file
            .metadata()
            .map_err(|source| StreamError::from_io(&self.name, source))?
            .len();
        Ok(self.position()? >= len)
    }
}

impl ByteReader for FileHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self, buf: &mut [u8], position: Option<u64>) -> Result<(), StreamError> {
        if self.goal != StreamGoal::Read {
            return Err(StreamError::Failed {
                name: self.name.clone(),
                detail: "handle was opened for writing".to_string(),
            });
        }
        read_at(&mut self.file, &self.name, buf, position)
    }
}

impl ByteWriter for FileHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, buf: &[u8], position: Option<u64>) -> Result<(), StreamError> {
        if self.goal != StreamGoal::Write {
            return Err(StreamError::Failed {
                name: self.name.clone(),
                detail: "handle was opened for reading".to_string(),
            });
        }
        write_at(&mut self.file, &self.name, buf, position)
    }
}

impl ByteReader for Cursor<Vec<u8>> {
    fn name(&self) -> &str {
        MEMORY_STREAM_NAME
    }

    fn read(&mut self, buf: &mut [u8], position: Option<u64>) -> Result<(), StreamError> {
        read_at(self, MEMORY_STREAM_NAME, buf, position)
    }
}

impl ByteWriter for Cursor<Vec<u8>> {
    fn name(&self) -> &str {
        MEMORY_STREAM_NAME
    }

    fn write(&mut self, buf: &[u8], position: Option<u64>) -> Result<(), StreamError> {
        write_at(self, MEMORY_STREAM_NAME, buf, position)
    }
}
