use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::locale::Locale;
use crate::state::AppState;

/// Content rows of the start panel that react to clicks.
pub const LANGUAGE_LINE: usize = 4;
pub const START_LINE: usize = 6;

pub fn draw_start(f: &mut Frame, area: Rect, state: &AppState) {
    let strings = state.locale.strings();

    let mut language_spans = vec![Span::raw("◀ ")];
    for (i, locale) in Locale::ALL.iter().enumerate() {
        if i > 0 {
            language_spans.push(Span::raw("  "));
        }
        let style = if *locale == state.locale {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        language_spans.push(Span::styled(
            format!(" {} ", locale.strings().language),
            style,
        ));
    }
    language_spans.push(Span::raw(" ▶"));

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            strings.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(language_spans),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", strings.start),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(err) = &state.load_error {
        lines.push(Line::from(Span::styled(
            format!("✗  {}", err),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[←/→] Language    [Enter] Start    [q] Exit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
