use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::domain::listing::TreeRow;
use crate::domain::selection::SelectionSet;
use crate::ui::Component;

const TREE_BRANCH: &str = "└ ";
const MARK_SELECTED: &str = "[x] ";
const MARK_UNSELECTED: &str = "[ ] ";

/// Left-side tree picker panel: flattened rows with selection checkboxes.
pub struct TreePanel<'a> {
    cursor: usize,
    root_path: &'a str,
    rows: &'a [TreeRow],
    selection: &'a SelectionSet,
}

impl<'a> TreePanel<'a> {
    pub fn new(
        rows: &'a [TreeRow],
        selection: &'a SelectionSet,
        cursor: usize,
        root_path: &'a str,
    ) -> Self {
        Self {
            cursor,
            root_path,
            rows,
            selection,
        }
    }

    fn row_label(&self, row: &TreeRow) -> String {
        let mark = if self.selection.contains(&row.entry.path) {
            MARK_SELECTED
        } else {
            MARK_UNSELECTED
        };
        let indent = "  ".repeat(row.depth);
        let branch = if row.depth == 0 { "" } else { TREE_BRANCH };
        let suffix = if row.entry.kind.is_dir() { "/" } else { "" };

        format!("{mark}{indent}{branch}{}{suffix}", row.entry.name)
    }
}

impl Component for TreePanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem<'_>> = if self.rows.is_empty() {
            vec![ListItem::new(Span::styled(
                "No files found",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.rows
                .iter()
                .map(|row| {
                    let color = if row.entry.kind.is_dir() {
                        Color::Yellow
                    } else {
                        Color::Cyan
                    };

                    ListItem::new(Span::styled(self.row_label(row), Style::default().fg(color)))
                })
                .collect()
        };

        let mut list_state = ListState::default();
        if !self.rows.is_empty() {
            list_state.select(Some(self.cursor.min(self.rows.len().saturating_sub(1))));
        }

        let title = format!(" Files — {} ", self.root_path);
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(Color::Cyan))),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
