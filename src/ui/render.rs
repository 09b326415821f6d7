use crate::model::User;
use crate::ui::app::{App, CARD_HEIGHT};
use crate::ui::copy;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rows, layout_regions, split_banner};
use crate::ui::theme::{ACCENT, BANNER_TEXT, HEADER_TEXT, MUTED, STATUS_ERROR, STATUS_OK};
use crate::ui::users::RenderMode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const BANNER_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.mode()), header);
    frame.render_widget(Clear, body);

    match app.mode() {
        RenderMode::SimulatedError { message } => {
            draw_error(frame, body, message, copy::ACTION_DISMISS, "Esc")
        }
        RenderMode::RealError { message } => {
            draw_error(frame, body, message, copy::ACTION_RETRY, "R")
        }
        RenderMode::Loading => {
            let lines = vec![
                Line::from(Span::styled(
                    app.spinner_frame().to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(copy::LOADING, Style::default().fg(MUTED))),
            ];
            draw_centered(frame, body, lines);
        }
        RenderMode::Empty => {
            let lines = vec![Line::from(Span::styled(
                copy::EMPTY,
                Style::default().fg(STATUS_ERROR),
            ))];
            draw_centered(frame, body, lines);
        }
        RenderMode::Success {
            users,
            show_success_banner,
            ..
        } => {
            let list_area = if *show_success_banner {
                let (banner, rest) = split_banner(BANNER_HEIGHT, body);
                frame.render_widget(success_banner(), banner);
                rest
            } else {
                body
            };
            let lines: Vec<Line<'static>> = users.iter().flat_map(user_card).collect();
            let list = Paragraph::new(lines).scroll((app.scroll_offset(), 0));
            frame.render_widget(list, list_area);
        }
    }

    frame.render_widget(Footer::new().widget(app.mode(), footer), footer);
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str, action: &str, key: &str) {
    let lines = vec![
        Line::from(Span::styled(
            copy::ERROR_TITLE,
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(MUTED))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {}: {} ]", key, action),
            Style::default().fg(HEADER_TEXT).bg(STATUS_ERROR),
        )),
    ];
    draw_centered(frame, area, lines);
}

fn draw_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, centered_rows(height, area));
}

fn success_banner() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        copy::SUCCESS_BANNER,
        Style::default().fg(BANNER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_OK)),
    )
}

/// `CARD_HEIGHT` lines per user: name, email, city, contact, blank.
fn user_card(user: &User) -> Vec<Line<'static>> {
    let contact = match (&user.phone, &user.website) {
        (Some(phone), Some(site)) => format!("{} · {}", phone, site),
        (Some(phone), None) => phone.clone(),
        (None, Some(site)) => site.clone(),
        (None, None) => String::new(),
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", user.name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", user.email),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            format!("  {}", user.address.city),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(format!("  {}", contact), Style::default().fg(MUTED))),
        Line::from(""),
    ];
    debug_assert_eq!(lines.len(), usize::from(CARD_HEIGHT));
    lines
}
