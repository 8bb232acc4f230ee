use crate::domain::entry::Entry;
use crate::domain::listing::DirectoryListing;

/// The ordered set of entries marked for inclusion in the output document.
///
/// Entries are kept in the order they were selected; directory toggles
/// cascade over descendants known to the [`DirectoryListing`] at call time.
#[derive(Debug, Default)]
pub struct SelectionSet {
    entries: Vec<Entry>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the entry at `path` is selected.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    /// Iterates selected entries in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Toggles `entry` in or out of the selection.
    ///
    /// Selecting a directory also selects every descendant currently known
    /// to `listing`, in listing traversal order; deselecting a directory
    /// also removes every selected path under it. Double-toggling a
    /// directory restores the selection to its prior state.
    pub fn toggle(&mut self, entry: &Entry, listing: &DirectoryListing) {
        if self.contains(&entry.path) {
            self.remove_with_descendants(entry);

            return;
        }

        self.entries.push(entry.clone());

        if entry.kind.is_dir() {
            for descendant in listing.descendants_of(&entry.path) {
                if !self.contains(&descendant.path) {
                    self.entries.push(descendant);
                }
            }
        }
    }

    fn remove_with_descendants(&mut self, entry: &Entry) {
        let prefix = format!("{}/", entry.path);
        self.entries
            .retain(|selected| selected.path != entry.path && !selected.path.starts_with(&prefix));
    }

    /// Removes every selection. The listing and any generated output are
    /// unaffected.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryKind;

    fn file(parent: &str, name: &str) -> Entry {
        Entry::child(parent, name.to_string(), EntryKind::File)
    }

    fn dir(parent: &str, name: &str) -> Entry {
        Entry::child(parent, name.to_string(), EntryKind::Directory)
    }

    fn sample_listing() -> DirectoryListing {
        let mut listing = DirectoryListing::new();
        listing.insert_children("proj", vec![file("proj", "x.txt"), dir("proj", "sub")]);
        listing.insert_children("proj/sub", vec![file("proj/sub", "y.txt")]);

        listing
    }

    #[test]
    fn test_toggle_adds_file() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();

        // Act
        selection.toggle(&file("proj", "x.txt"), &listing);

        // Assert
        assert!(selection.contains("proj/x.txt"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_removes_selected_file() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();
        selection.toggle(&file("proj", "x.txt"), &listing);

        // Act
        selection.toggle(&file("proj", "x.txt"), &listing);

        // Assert
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_directory_cascades_to_known_descendants() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();

        // Act
        selection.toggle(&dir("proj", "sub"), &listing);

        // Assert
        assert!(selection.contains("proj/sub"));
        assert!(selection.contains("proj/sub/y.txt"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_toggle_directory_removal_drops_prefixed_paths() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();
        selection.toggle(&dir("proj", "sub"), &listing);

        // Act
        selection.toggle(&dir("proj", "sub"), &listing);

        // Assert
        assert!(selection.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();
        selection.toggle(&file("proj", "x.txt"), &listing);

        // Act — select then deselect the same directory
        selection.toggle(&dir("proj", "sub"), &listing);
        selection.toggle(&dir("proj", "sub"), &listing);

        // Assert — the earlier file selection is untouched
        assert!(selection.contains("proj/x.txt"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_directory_does_not_duplicate_selected_descendant() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();
        selection.toggle(&file("proj/sub", "y.txt"), &listing);

        // Act
        selection.toggle(&dir("proj", "sub"), &listing);

        // Assert
        assert_eq!(selection.len(), 2);
        let paths: Vec<&str> = selection.iter().map(|entry| entry.path.as_str()).collect();
        assert_eq!(paths, vec!["proj/sub/y.txt", "proj/sub"]);
    }

    #[test]
    fn test_directory_removal_keeps_sibling_with_similar_prefix() {
        // Arrange
        let mut listing = DirectoryListing::new();
        listing.insert_children(
            "proj",
            vec![dir("proj", "sub"), file("proj", "subtitle.txt")],
        );
        listing.insert_children("proj/sub", vec![]);
        let mut selection = SelectionSet::new();
        selection.toggle(&file("proj", "subtitle.txt"), &listing);
        selection.toggle(&dir("proj", "sub"), &listing);

        // Act
        selection.toggle(&dir("proj", "sub"), &listing);

        // Assert — `proj/subtitle.txt` is not under `proj/sub/`
        assert!(selection.contains("proj/subtitle.txt"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_iter_preserves_selection_order() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();

        // Act
        selection.toggle(&dir("proj", "sub"), &listing);
        selection.toggle(&file("proj", "x.txt"), &listing);

        // Assert
        let paths: Vec<&str> = selection.iter().map(|entry| entry.path.as_str()).collect();
        assert_eq!(paths, vec!["proj/sub", "proj/sub/y.txt", "proj/x.txt"]);
    }

    #[test]
    fn test_clear_empties_selection() {
        // Arrange
        let listing = sample_listing();
        let mut selection = SelectionSet::new();
        selection.toggle(&dir("proj", "sub"), &listing);

        // Act
        selection.clear();

        // Assert
        assert!(selection.is_empty());
    }
}
