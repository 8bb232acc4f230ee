pub mod components;
pub mod state;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Notice;
use crate::concat::Document;
use crate::domain::listing::TreeRow;
use crate::domain::selection::SelectionSet;
use crate::ui::state::app_mode::AppMode;

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

pub struct RenderContext<'a> {
    pub mode: &'a AppMode,
    pub notice: Option<&'a Notice>,
    pub output: Option<&'a Document>,
    pub root_path: &'a str,
    pub rows: &'a [TreeRow],
    pub selection: &'a SelectionSet,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        mode,
        notice,
        output,
        root_path,
        rows,
        selection,
    } = context;

    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(selection.len()).render(f, status_bar_area);
    components::footer_bar::FooterBar::new(notice).render(f, footer_bar_area);

    let (cursor, output_scroll) = browse_state(mode);
    render_panels(f, content_area, rows, selection, root_path, output, cursor, output_scroll);

    if let AppMode::Help { context } = mode {
        components::help_overlay::HelpOverlay::new(context).render(f, content_area);
    }
}

/// Returns the tree cursor and output scroll for the current mode; the help
/// overlay keeps rendering its originating browse state underneath.
fn browse_state(mode: &AppMode) -> (usize, u16) {
    match mode {
        AppMode::Browse {
            cursor,
            output_scroll,
        }
        | AppMode::Help {
            context:
                state::app_mode::HelpContext::Browse {
                    cursor,
                    output_scroll,
                },
        } => (*cursor, *output_scroll),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_panels(
    f: &mut Frame,
    content_area: Rect,
    rows: &[TreeRow],
    selection: &SelectionSet,
    root_path: &str,
    output: Option<&Document>,
    cursor: usize,
    output_scroll: u16,
) {
    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(content_area);

    components::tree_panel::TreePanel::new(rows, selection, cursor, root_path)
        .render(f, content_layout[0]);
    components::output_panel::OutputPanel::new(output, output_scroll).render(f, content_layout[1]);
}
