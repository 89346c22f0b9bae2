use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, pending: usize, spinner: char) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if pending == 0 {
            ("●".to_string(), Style::default().fg(STATUS_OK))
        } else {
            (spinner.to_string(), Style::default().fg(STATUS_BUSY))
        };
        let activity = match pending {
            0 => "idle".to_string(),
            1 => "1 task running".to_string(),
            n => format!("{n} tasks running"),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status, status_style),
            Span::styled("  ", text_style),
            Span::styled("Background Task Demo", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(activity, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
