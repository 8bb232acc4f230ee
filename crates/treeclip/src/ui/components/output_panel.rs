use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::concat::Document;
use crate::ui::Component;

const EMPTY_OUTPUT_MESSAGE: &str = "Select files with Space, then press Enter to build the output.";
const OUTPUT_SCROLL_X_OFFSET: u16 = 0;

/// Right-side read-only pane displaying the output document verbatim,
/// framing delimiters included.
pub struct OutputPanel<'a> {
    document: Option<&'a Document>,
    scroll_offset: u16,
}

impl<'a> OutputPanel<'a> {
    pub fn new(document: Option<&'a Document>, scroll_offset: u16) -> Self {
        Self {
            document,
            scroll_offset,
        }
    }

    fn title(&self) -> String {
        match self.document {
            Some(document) => format!(
                " Output — {} file{} ",
                document.file_count,
                if document.file_count == 1 { "" } else { "s" }
            ),
            None => " Output ".to_string(),
        }
    }
}

impl Component for OutputPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let (text, style) = match self.document {
            Some(document) => (document.text.as_str(), Style::default()),
            None => (EMPTY_OUTPUT_MESSAGE, Style::default().fg(Color::DarkGray)),
        };

        let paragraph = Paragraph::new(text)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(self.title(), Style::default().fg(Color::Yellow))),
            )
            .scroll((self.scroll_offset, OUTPUT_SCROLL_X_OFFSET));
        f.render_widget(paragraph, area);
    }
}
