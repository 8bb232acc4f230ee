use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{Notice, NoticeKind};
use crate::ui::Component;

const KEY_HINTS: &str = " Space toggle | Enter build | c copy | ? help | q quit";

/// Bottom bar: shows the active notice when one is set, key hints otherwise.
pub struct FooterBar<'a> {
    notice: Option<&'a Notice>,
}

impl<'a> FooterBar<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = match self.notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Error => Color::Red,
                    NoticeKind::Info => Color::Green,
                };

                Line::from(Span::styled(
                    format!(" {}", notice.message),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            None => Line::from(Span::styled(
                KEY_HINTS,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            )),
        };

        let footer = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}
