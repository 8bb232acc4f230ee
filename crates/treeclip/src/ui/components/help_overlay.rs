use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::state::app_mode::HelpContext;

const OVERLAY_WIDTH_PERCENT: u16 = 60;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const MIN_OVERLAY_WIDTH: u16 = 30;
const MIN_OVERLAY_HEIGHT: u16 = 10;

/// Centered popup overlay showing keybindings for the current view.
pub struct HelpOverlay<'a> {
    context: &'a HelpContext,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(context: &'a HelpContext) -> Self {
        Self { context }
    }
}

impl Component for HelpOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(area);

        f.render_widget(Clear, popup_area);

        let title = format!(" {} ", self.context.title());
        let bindings = self.context.keybindings();

        let key_width = bindings.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let mut lines: Vec<Line<'_>> = Vec::with_capacity(bindings.len() + 3);
        lines.push(Line::from(""));

        for (key, description) in bindings {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{key:>key_width$}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": ", Style::default().fg(Color::White)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? / q / Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(title, Style::default().fg(Color::Cyan))),
        );

        f.render_widget(paragraph, popup_area);
    }
}

/// Computes a centered rectangle within the given `area`.
fn centered_rect(area: Rect) -> Rect {
    let popup_width = (area.width * OVERLAY_WIDTH_PERCENT / 100).max(MIN_OVERLAY_WIDTH);
    let popup_height = (area.height * OVERLAY_HEIGHT_PERCENT / 100).max(MIN_OVERLAY_HEIGHT);

    let width = popup_width.min(area.width);
    let height = popup_height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_centered_rect_centers_within_area() {
        // Arrange
        let area = Rect::new(0, 0, 100, 50);

        // Act
        let popup = centered_rect(area);

        // Assert
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 30);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_area_when_small() {
        // Arrange
        let area = Rect::new(0, 0, 20, 8);

        // Act
        let popup = centered_rect(area);

        // Assert — min sizes clamped to area
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 8);
    }

    #[test]
    fn test_render_lists_keybindings() {
        // Arrange
        let context = HelpContext::Browse {
            cursor: 0,
            output_scroll: 0,
        };
        let overlay = HelpOverlay::new(&context);
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");

        // Act
        terminal
            .draw(|frame| {
                let area = frame.area();
                overlay.render(frame, area);
            })
            .expect("failed to draw");

        // Assert
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Keybindings"));
        assert!(text.contains("Toggle selection"));
        assert!(text.contains("Press ? / q / Esc to close"));
    }
}
