//! Tree Scanner: recursive directory enumeration into a [`DirectoryListing`].

use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::domain::entry::Entry;
use crate::domain::listing::DirectoryListing;
use crate::infra::fs_source::DirectorySource;

/// Recursively enumerates `dir_path` through `source`, recording one
/// children mapping per directory level into `listing`.
///
/// A subdirectory that cannot be enumerated is logged and skipped; its
/// siblings and ancestors are unaffected. Reads are strictly sequential.
///
/// # Errors
/// Returns an error only when `dir_path` itself cannot be enumerated.
pub async fn scan(
    source: &dyn DirectorySource,
    listing: &mut DirectoryListing,
    dir_path: &str,
) -> io::Result<()> {
    scan_dir(source, listing, dir_path).await
}

fn scan_dir<'a>(
    source: &'a dyn DirectorySource,
    listing: &'a mut DirectoryListing,
    dir_path: &'a str,
) -> Pin<Box<dyn Future<Output = io::Result<()>> + Send + 'a>> {
    Box::pin(async move {
        let children = source.entries(dir_path).await?;
        let level: Vec<Entry> = children
            .into_iter()
            .map(|(name, kind)| Entry::child(dir_path, name, kind))
            .collect();
        listing.insert_children(dir_path, level.clone());

        for child in level {
            if !child.kind.is_dir() {
                continue;
            }

            if let Err(error) = scan_dir(source, listing, &child.path).await {
                tracing::warn!(path = %child.path, %error, "skipping unreadable subdirectory");
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::entry::{self, EntryKind};
    use crate::infra::fs_source::{LocalDirectorySource, MockDirectorySource};

    #[tokio::test]
    async fn test_scan_records_every_reachable_path() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("x.txt"), "A").expect("failed to write file");
        fs::create_dir(temp_dir.path().join("sub")).expect("failed to create dir");
        fs::write(temp_dir.path().join("sub/y.txt"), "B").expect("failed to write file");
        let source = LocalDirectorySource::new(temp_dir.path().to_path_buf());
        let root = entry::scan_root(temp_dir.path());
        let mut listing = DirectoryListing::new();

        // Act
        scan(&source, &mut listing, &root.path)
            .await
            .expect("scan failed");

        // Assert — flattening yields exactly the reachable set, no
        // duplicates, no omissions
        let rows = listing.flatten(&root);
        let paths: Vec<String> = rows.iter().map(|row| row.entry.path.clone()).collect();
        let expected = vec![
            root.path.clone(),
            format!("{}/x.txt", root.path),
            format!("{}/sub", root.path),
            format!("{}/sub/y.txt", root.path),
        ];
        assert_eq!(paths, expected);
        let unique: HashSet<&String> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[tokio::test]
    async fn test_scan_records_empty_directories() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("empty")).expect("failed to create dir");
        let source = LocalDirectorySource::new(temp_dir.path().to_path_buf());
        let root = entry::scan_root(temp_dir.path());
        let mut listing = DirectoryListing::new();

        // Act
        scan(&source, &mut listing, &root.path)
            .await
            .expect("scan failed");

        // Assert
        let empty_path = format!("{}/empty", root.path);
        assert_eq!(listing.children_of(&root.path).len(), 1);
        assert!(listing.children_of(&empty_path).is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_subdirectory_does_not_abort_siblings() {
        // Arrange
        let mut source = MockDirectorySource::new();
        source
            .expect_entries()
            .withf(|path: &str| path == "root")
            .returning(|_| {
                Ok(vec![
                    ("bad".to_string(), EntryKind::Directory),
                    ("ok".to_string(), EntryKind::Directory),
                ])
            });
        source
            .expect_entries()
            .withf(|path: &str| path == "root/bad")
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        source
            .expect_entries()
            .withf(|path: &str| path == "root/ok")
            .returning(|_| Ok(vec![("f.txt".to_string(), EntryKind::File)]));
        let mut listing = DirectoryListing::new();

        // Act
        scan(&source, &mut listing, "root")
            .await
            .expect("scan failed");

        // Assert — the unreadable directory is still an entry, its sibling
        // was scanned
        assert_eq!(listing.children_of("root").len(), 2);
        assert!(listing.children_of("root/bad").is_empty());
        assert_eq!(listing.children_of("root/ok").len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_root_is_fatal_to_the_scan() {
        // Arrange
        let mut source = MockDirectorySource::new();
        source
            .expect_entries()
            .withf(|path: &str| path == "root")
            .returning(|_| Err(io::Error::new(io::ErrorKind::NotFound, "gone")));
        let mut listing = DirectoryListing::new();

        // Act
        let result = scan(&source, &mut listing, "root").await;

        // Assert
        assert!(result.is_err());
        assert!(listing.children_of("root").is_empty());
    }

    #[tokio::test]
    async fn test_scan_preserves_source_enumeration_order() {
        // Arrange
        let mut source = MockDirectorySource::new();
        source
            .expect_entries()
            .withf(|path: &str| path == "root")
            .returning(|_| {
                Ok(vec![
                    ("zeta.txt".to_string(), EntryKind::File),
                    ("alpha.txt".to_string(), EntryKind::File),
                ])
            });
        let mut listing = DirectoryListing::new();

        // Act
        scan(&source, &mut listing, "root")
            .await
            .expect("scan failed");

        // Assert — no sort beyond what the source yields
        let names: Vec<&str> = listing
            .children_of("root")
            .iter()
            .map(|child| child.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta.txt", "alpha.txt"]);
    }
}
