use crate::ui::copy;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::users::{RenderAction, RenderMode};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, mode: &RenderMode, area: Rect) -> Paragraph<'static> {
        let hints = hints_for(mode);
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints carry accented letters
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Key hints for the actions `mode` offers, plus scrolling and quit.
pub fn hints_for(mode: &RenderMode) -> String {
    let mut hints: Vec<String> = mode
        .actions()
        .iter()
        .map(|action| match action {
            RenderAction::Refresh if matches!(mode, RenderMode::RealError { .. }) => {
                format!("R: {}", copy::ACTION_RETRY)
            }
            RenderAction::Refresh => format!("R: {}", copy::ACTION_REFRESH),
            RenderAction::SimulateError => format!("E: {}", copy::ACTION_SIMULATE_ERROR),
            RenderAction::DismissSimulatedError => format!("Esc: {}", copy::ACTION_DISMISS),
        })
        .collect();
    if matches!(mode, RenderMode::Success { .. }) {
        hints.push("↑/↓: Rolar".to_string());
    }
    hints.push("Q: Sair".to_string());
    format!(" {}", hints.join(" │ "))
}
