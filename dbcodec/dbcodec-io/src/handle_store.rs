//! Explicit cache of open file handles.

use std::{
    collections::{HashMap, hash_map::Entry},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::StreamError,
    stream::{FileHandle, StreamGoal},
};

/// Open file handles keyed by path and direction.
///
/// Acquiring the same `(path, goal)` twice returns the already-open handle.
/// The store is a plain owned value; sharing it across threads requires
/// external locking.
#[derive(Debug, Default)]
pub struct HandleStore {
    handles: HashMap<(PathBuf, StreamGoal), FileHandle>,
}

impl HandleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `path`, opening it on first use.
    pub fn acquire(
        &mut self,
        path: impl AsRef<Path>,
        goal: StreamGoal,
    ) -> Result<&mut FileHandle, StreamError> {
        match self.handles.entry((path.as_ref().to_path_buf(), goal)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let handle = FileHandle::open(&entry.key().0, goal)?;
                debug!(path = %handle.path().display(), ?goal, "opened file handle");
                Ok(entry.insert(handle))
            }
        }
    }

    /// Close the handle for `path`. Returns whether one was open.
    pub fn release(&mut self, path: impl AsRef<Path>, goal: StreamGoal) -> bool {
        let released = self
            .handles
            .remove(&(path.as_ref().to_path_buf(), goal))
            .is_some();
        if released {
            debug!(path = %path.as_ref().display(), ?goal, "released file handle");
        }
        released
    }

    pub fn is_open(&self, path: impl AsRef<Path>, goal: StreamGoal) -> bool {
        self.handles
            .contains_key(&(path.as_ref().to_path_buf(), goal))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Close every handle.
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
