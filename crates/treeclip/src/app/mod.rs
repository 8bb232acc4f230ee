//! App-layer state container: the scan session, the selection, the output
//! document, and the notices shown in the footer.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::concat::{self, ConcatError, Document};
use crate::domain::entry::{self, Entry};
use crate::domain::listing::{DirectoryListing, TreeRow};
use crate::domain::selection::SelectionSet;
use crate::infra::clipboard::ClipboardAccess;
use crate::infra::fs_source::DirectorySource;
use crate::scan;
use crate::ui::state::app_mode::AppMode;

/// Relative directory name for treeclip state (the log file) under the
/// user's home.
pub const TREECLIP_DIR: &str = ".treeclip";

/// How long a footer notice stays visible before the redraw tick clears it.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Returns the treeclip home directory (`~/.treeclip`).
pub fn treeclip_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(TREECLIP_DIR);
    }

    PathBuf::from(TREECLIP_DIR)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A non-blocking footer message. Nothing in the app is fatal; every
/// failure is scoped to the item that caused it and reported here.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    created: Instant,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            created: Instant::now(),
        }
    }

    fn is_stale(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }
}

/// Stores one scan session's state and coordinates the scanner, the
/// selection model, the concatenator, and the clipboard.
pub struct App {
    pub listing: DirectoryListing,
    pub mode: AppMode,
    pub notice: Option<Notice>,
    pub output: Option<Document>,
    pub root: Entry,
    /// Flattened display rows, rebuilt after every scan.
    pub rows: Vec<TreeRow>,
    pub selection: SelectionSet,
    clipboard: Box<dyn ClipboardAccess>,
    source: Arc<dyn DirectorySource>,
}

impl App {
    /// Scans `root_dir` to completion and builds the app state.
    ///
    /// The scan finishes before the UI loop starts, so every toggle sees a
    /// complete Directory Listing.
    ///
    /// # Errors
    /// Returns an error when the root folder itself cannot be enumerated.
    pub async fn new(
        root_dir: &std::path::Path,
        source: Arc<dyn DirectorySource>,
        clipboard: Box<dyn ClipboardAccess>,
    ) -> io::Result<Self> {
        let root = entry::scan_root(root_dir);
        let mut listing = DirectoryListing::new();
        scan::scan(source.as_ref(), &mut listing, &root.path).await?;
        let rows = listing.flatten(&root);

        Ok(Self {
            listing,
            mode: AppMode::browse(),
            notice: None,
            output: None,
            root,
            rows,
            selection: SelectionSet::new(),
            clipboard,
            source,
        })
    }

    /// Starts a new scan session: listing, selection, output, and notice
    /// are all cleared, then the folder is scanned again.
    pub async fn rescan(&mut self) {
        self.listing.clear();
        self.selection.clear();
        self.output = None;
        self.notice = None;
        self.mode = AppMode::browse();

        if let Err(error) = scan::scan(self.source.as_ref(), &mut self.listing, &self.root.path).await
        {
            tracing::warn!(%error, "rescan failed");
            self.notice = Some(Notice::error(format!("Rescan failed: {error}")));
        }

        self.rows = self.listing.flatten(&self.root);
    }

    /// Toggles the selection state of the tree row at `index`.
    pub fn toggle_row(&mut self, index: usize) {
        let Some(row) = self.rows.get(index) else {
            return;
        };

        let entry = row.entry.clone();
        self.selection.toggle(&entry, &self.listing);
    }

    /// Runs the concatenator over the current selection and places the
    /// document in the output pane.
    pub async fn generate_output(&mut self) {
        match concat::process(self.source.as_ref(), &self.selection).await {
            Ok(document) => {
                self.notice = Some(Notice::info(format!(
                    "Built output from {} file{}.",
                    document.file_count,
                    if document.file_count == 1 { "" } else { "s" }
                )));
                self.output = Some(document);
            }
            Err(ConcatError::EmptySelection) => {
                self.notice = Some(Notice::error("Select at least one file or folder first."));
            }
        }
    }

    /// Copies the current output document to the clipboard, exactly once
    /// per invocation.
    pub fn copy_output(&mut self) {
        let Some(document) = &self.output else {
            self.notice = Some(Notice::info("Build the output with Enter before copying."));

            return;
        };

        match self.clipboard.write_text(&document.text) {
            Ok(()) => {
                self.notice = Some(Notice::info("Output copied to clipboard."));
            }
            Err(error) => {
                tracing::warn!(%error, "clipboard write failed");
                self.notice = Some(Notice::error(format!(
                    "{error}; copy manually from the output pane."
                )));
            }
        }
    }

    /// Clears the selection only; the listing and output are untouched.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.notice = Some(Notice::info("Selection cleared."));
    }

    /// Clears the selection and the output document together.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.output = None;
        self.notice = Some(Notice::info("Selection and output cleared."));
    }

    /// Drops the footer notice once it has been visible long enough.
    /// Called from the redraw tick.
    pub fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_stale) {
            self.notice = None;
        }
    }
}
