use std::collections::HashMap;

use crate::domain::entry::Entry;

/// One visible row of the flattened tree: an entry plus its depth below the
/// scan root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeRow {
    pub depth: usize,
    pub entry: Entry,
}

/// Cumulative mapping from directory listing path to its immediate children.
///
/// Built incrementally as the scanner descends: one insert per directory
/// level, merged into the map. Cleared only when a new scan session begins.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    children: HashMap<String, Vec<Entry>>,
}

impl DirectoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the immediate children of one directory level.
    ///
    /// Re-inserting the same level replaces that level's children; other
    /// levels are untouched.
    pub fn insert_children(&mut self, dir_path: &str, children: Vec<Entry>) {
        self.children.insert(dir_path.to_string(), children);
    }

    /// Returns the known immediate children of `dir_path`, in enumeration
    /// order.
    pub fn children_of(&self, dir_path: &str) -> &[Entry] {
        self.children.get(dir_path).map_or(&[], Vec::as_slice)
    }

    /// Returns every known descendant of `dir_path` in depth-first
    /// enumeration order.
    pub fn descendants_of(&self, dir_path: &str) -> Vec<Entry> {
        let mut descendants = Vec::new();
        self.collect_descendants(dir_path, &mut descendants);

        descendants
    }

    fn collect_descendants(&self, dir_path: &str, descendants: &mut Vec<Entry>) {
        for child in self.children_of(dir_path) {
            descendants.push(child.clone());

            if child.kind.is_dir() {
                self.collect_descendants(&child.path, descendants);
            }
        }
    }

    /// Flattens the tree under `root` into display rows, root first at
    /// depth 0, children depth-first in enumeration order.
    pub fn flatten(&self, root: &Entry) -> Vec<TreeRow> {
        let mut rows = vec![TreeRow {
            depth: 0,
            entry: root.clone(),
        }];
        self.flatten_level(&root.path, 1, &mut rows);

        rows
    }

    fn flatten_level(&self, dir_path: &str, depth: usize, rows: &mut Vec<TreeRow>) {
        for child in self.children_of(dir_path) {
            rows.push(TreeRow {
                depth,
                entry: child.clone(),
            });

            if child.kind.is_dir() {
                self.flatten_level(&child.path, depth + 1, rows);
            }
        }
    }

    /// Drops every recorded level. Used when a new scan session begins.
    pub fn clear(&mut self) {
        self.children.clear();
    }
}
