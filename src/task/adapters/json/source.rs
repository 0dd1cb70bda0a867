//! Task source backed by a JSON snapshot file.
//!
//! The snapshot has the shape `{ "users": [...], "todos": [...] }`, each
//! element matching the provider's wire records. The file is re-read on every
//! fetch, so edits between loads are picked up.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::task::ports::{TaskSource, TaskSourceError, TaskSourceResult, TodoRecord, UserRecord};

/// Serialised form of a full provider snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// User records.
    #[serde(default)]
    pub users: Vec<UserRecord>,
    /// Todo records for all users.
    #[serde(default)]
    pub todos: Vec<TodoRecord>,
}

impl TaskSnapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Decode`] when the text is not a valid
    /// snapshot document.
    pub fn from_json(contents: &str) -> TaskSourceResult<Self> {
        serde_json::from_str(contents).map_err(|err| TaskSourceError::Decode(err.to_string()))
    }
}

/// Reads users and todos from a JSON snapshot on disk.
pub struct JsonSnapshotSource {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonSnapshotSource {
    /// Opens the directory containing the snapshot at `path`.
    ///
    /// The file itself is only read when records are fetched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when `path` has no file name or
    /// its parent directory cannot be opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> TaskSourceResult<Self> {
        let snapshot_path = path.as_ref();
        let file_name = snapshot_path.file_name().ok_or_else(|| {
            TaskSourceError::transport(std::io::Error::other(format!(
                "snapshot path '{snapshot_path}' must include a file name"
            )))
        })?;
        let parent = match snapshot_path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(TaskSourceError::transport)?;
        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
            path: snapshot_path.to_path_buf(),
        })
    }

    /// Returns the snapshot path this source reads.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Reads and parses the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the file cannot be read and
    /// [`TaskSourceError::Decode`] when it is not a valid snapshot.
    pub fn read_snapshot(&self) -> TaskSourceResult<TaskSnapshot> {
        let contents = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(TaskSourceError::transport)?;
        TaskSnapshot::from_json(&contents)
    }
}

impl fmt::Debug for JsonSnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSnapshotSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskSource for JsonSnapshotSource {
    async fn fetch_users(&self) -> TaskSourceResult<Vec<UserRecord>> {
        Ok(self.read_snapshot()?.users)
    }

    async fn fetch_todos(&self) -> TaskSourceResult<Vec<TodoRecord>> {
        Ok(self.read_snapshot()?.todos)
    }
}
