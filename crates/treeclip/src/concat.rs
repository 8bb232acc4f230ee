//! Content Concatenator: turns the current selection into one framed text
//! document.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::domain::entry::{self, EntryKind};
use crate::domain::selection::SelectionSet;
use crate::infra::fs_source::DirectorySource;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConcatError {
    #[error("no files or folders are selected")]
    EmptySelection,
}

/// The concatenated output: framed file blocks plus the number of distinct
/// files they cover.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    pub file_count: usize,
    pub text: String,
}

/// Builds the output document from `selection` in selection order.
///
/// Selected files are read in full; selected directories are re-derived
/// live from `source` (not from the cached listing) and every descendant
/// file is appended in traversal order. A file that is reachable more than
/// once is emitted once. File read failures become in-document error
/// markers; directory enumeration failures are logged and skipped. Reads
/// are strictly sequential, so a slow file delays later blocks but cannot
/// reorder them.
///
/// # Errors
/// Returns [`ConcatError::EmptySelection`] when nothing is selected.
pub async fn process(
    source: &dyn DirectorySource,
    selection: &SelectionSet,
) -> Result<Document, ConcatError> {
    if selection.is_empty() {
        return Err(ConcatError::EmptySelection);
    }

    let mut text = String::new();
    let mut emitted = HashSet::new();

    for selected in selection.iter() {
        match selected.kind {
            EntryKind::File => {
                append_file_block(source, &mut text, &mut emitted, &selected.path).await;
            }
            EntryKind::Directory => {
                append_directory(source, &mut text, &mut emitted, &selected.path).await;
            }
        }
    }

    Ok(Document {
        file_count: emitted.len(),
        text: text.trim().to_string(),
    })
}

/// Appends one `=== path ===` block, substituting an error marker when the
/// read fails. Paths already emitted are skipped.
async fn append_file_block(
    source: &dyn DirectorySource,
    text: &mut String,
    emitted: &mut HashSet<String>,
    path: &str,
) {
    if !emitted.insert(path.to_string()) {
        return;
    }

    let content = match source.read_file(path).await {
        Ok(content) => content,
        Err(error) => {
            tracing::warn!(path, %error, "substituting error marker for unreadable file");

            format!("[Error reading file: {error}]")
        }
    };

    text.push_str(&format!("\n\n=== {path} ===\n{content}"));
}

fn append_directory<'a>(
    source: &'a dyn DirectorySource,
    text: &'a mut String,
    emitted: &'a mut HashSet<String>,
    dir_path: &'a str,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        let children = match source.entries(dir_path).await {
            Ok(children) => children,
            Err(error) => {
                tracing::warn!(path = dir_path, %error, "skipping unreadable directory");

                return;
            }
        };

        for (name, kind) in children {
            let child_path = entry::join_path(dir_path, &name);
            match kind {
                EntryKind::File => {
                    append_file_block(source, text, emitted, &child_path).await;
                }
                EntryKind::Directory => {
                    append_directory(source, text, emitted, &child_path).await;
                }
            }
        }
    })
}
