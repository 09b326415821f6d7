use crate::ui::copy;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::users::RenderMode;
use ratatui::style::{Modifier, Style};
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

    pub fn widget(&self, mode: &RenderMode) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let title = match mode {
            RenderMode::Success { users, .. } => copy::title_with_count(users.len()),
            _ => copy::TITLE.to_string(),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(title, text_style.add_modifier(Modifier::BOLD)),
        ];
        if let RenderMode::Success {
            is_refreshing: true,
            ..
        } = mode
        {
            spans.push(Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)));
            spans.push(Span::styled("atualizando…", Style::default().fg(ACCENT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
