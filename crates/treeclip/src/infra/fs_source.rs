use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entry::{self, EntryKind};

/// Directory access capability used by the scanner and the concatenator.
///
/// Both operations take listing paths rooted at the scan root's name
/// (e.g., `proj/src/main.rs`); how those resolve to real storage is the
/// implementation's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Enumerates the immediate children of the directory at `path`.
    async fn entries(&self, path: &str) -> io::Result<Vec<(String, EntryKind)>>;

    /// Reads the full text content of the file at `path`.
    async fn read_file(&self, path: &str) -> io::Result<String>;
}

/// [`DirectorySource`] backed by the local filesystem under one picked
/// folder.
///
/// Children are returned in a deterministic order: files first, then
/// directories, each group alphabetical by name. Entries that are neither
/// regular files nor directories (e.g., symlinks) are classified as files.
pub struct LocalDirectorySource {
    root: PathBuf,
    root_path: String,
}

impl LocalDirectorySource {
    /// Creates a source rooted at `root`. The folder's name becomes the
    /// root listing path.
    pub fn new(root: PathBuf) -> Self {
        let root_path = entry::scan_root(&root).path;

        Self { root, root_path }
    }

    /// Resolves a listing path to a real path under the picked folder.
    fn resolve(&self, listing_path: &str) -> io::Result<PathBuf> {
        if listing_path == self.root_path {
            return Ok(self.root.clone());
        }

        let prefix = format!("{}/", self.root_path);
        let relative = listing_path.strip_prefix(&prefix).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("listing path `{listing_path}` is outside the scanned folder"),
            )
        })?;

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DirectorySource for LocalDirectorySource {
    async fn entries(&self, path: &str) -> io::Result<Vec<(String, EntryKind)>> {
        let dir = self.resolve(path)?;
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        let mut children = Vec::new();

        while let Some(dir_entry) = read_dir.next_entry().await? {
            let kind = if dir_entry.file_type().await?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            children.push((dir_entry.file_name().to_string_lossy().to_string(), kind));
        }

        children.sort_by(|first, second| {
            first
                .1
                .is_dir()
                .cmp(&second.1.is_dir())
                .then_with(|| first.0.cmp(&second.0))
        });

        Ok(children)
    }

    async fn read_file(&self, path: &str) -> io::Result<String> {
        let file = self.resolve(path)?;

        tokio::fs::read_to_string(file).await
    }
}
