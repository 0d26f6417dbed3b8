use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let strings = state.locale.strings();
    let mut spans = vec![Span::raw(" ")];

    if let Some(session) = state.session.as_ref() {
        spans.push(Span::styled(
            format!("{}: {}", strings.score, session.score()),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw("   "));

        let total = session.total_questions();
        let shown = session
            .current_index()
            .map_or(total, |idx| idx + 1);
        spans.push(Span::styled(
            format!("{} {}/{}", strings.question, shown, total),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("   "));
    }

    spans.push(Span::styled(
        format!("{} ({})", strings.language, language_code(state)),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::raw("   "));
    spans.push(Span::styled("[?] help", Style::default().fg(Color::DarkGray)));

    let widget =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}

fn language_code(state: &AppState) -> &'static str {
    match state.locale {
        crate::locale::Locale::Es => "es",
        crate::locale::Locale::En => "en",
    }
}
