use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    mount_id: String,
    provided: bool,
}

impl Header {
    pub fn new(mount_id: &str, provided: bool) -> Self {
        Self {
            mount_id: mount_id.to_string(),
            provided,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if self.provided {
            ("provider attached", Style::default().fg(STATUS_OK))
        } else {
            ("no provider", Style::default().fg(STATUS_WARN))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("counter-context", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("mount #{}", self.mount_id), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
