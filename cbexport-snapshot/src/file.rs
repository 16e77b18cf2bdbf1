use std::path::{Path, PathBuf};

use crate::{Error, Format, Result, Snapshot};

/// A snapshot file with both raw content and the parsed snapshot.
pub struct SnapshotFile {
    path: PathBuf,
    content: String,
    snapshot: Snapshot,
}

impl SnapshotFile {
    /// Open and parse a snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let snapshot = Snapshot::from_str_with_filename(&content, &filename, format)?;

        Ok(Self {
            path,
            content,
            snapshot,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Mutable access, used to apply command-line overrides of the policy.
    pub fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.snapshot
    }
}
