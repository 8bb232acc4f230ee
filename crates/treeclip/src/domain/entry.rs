use std::path::Path;

/// Whether a discovered entry is a file or a directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Returns true for [`EntryKind::Directory`].
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// A named file or directory discovered during scanning.
///
/// `path` is the `/`-joined listing path rooted at the scan root's name
/// (e.g., `proj/src/main.rs` for a scan rooted at a folder named `proj`).
/// It uniquely identifies the entry within one scan session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    /// The entry's own name (the last listing path segment).
    pub name: String,
    /// Listing path from the scan root.
    pub path: String,
}

impl Entry {
    /// Builds a child entry under `parent_path`.
    pub fn child(parent_path: &str, name: String, kind: EntryKind) -> Self {
        let path = join_path(parent_path, &name);

        Self { kind, name, path }
    }
}

/// Joins a listing path segment onto its parent path.
pub fn join_path(parent_path: &str, name: &str) -> String {
    format!("{parent_path}/{name}")
}

/// Builds the root [`Entry`] for a scan session over `dir`.
///
/// The root's listing path is the folder's own name; paths of filesystem
/// roots with no final component fall back to the full display form.
pub fn scan_root(dir: &Path) -> Entry {
    let name = dir
        .file_name()
        .map_or_else(|| dir.display().to_string(), |name| name.to_string_lossy().to_string());

    Entry {
        kind: EntryKind::Directory,
        path: name.clone(),
        name,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_child_joins_parent_path() {
        // Arrange & Act
        let entry = Entry::child("proj/src", "main.rs".to_string(), EntryKind::File);

        // Assert
        assert_eq!(entry.path, "proj/src/main.rs");
        assert_eq!(entry.name, "main.rs");
        assert_eq!(entry.kind, EntryKind::File);
    }

    #[test]
    fn test_scan_root_uses_folder_name() {
        // Arrange
        let dir = PathBuf::from("/home/user/proj");

        // Act
        let root = scan_root(&dir);

        // Assert
        assert_eq!(root.path, "proj");
        assert_eq!(root.name, "proj");
        assert!(root.kind.is_dir());
    }

    #[test]
    fn test_scan_root_falls_back_for_filesystem_root() {
        // Arrange
        let dir = PathBuf::from("/");

        // Act
        let root = scan_root(&dir);

        // Assert
        assert_eq!(root.path, "/");
    }
}
