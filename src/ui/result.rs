use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::session::Outcome;
use crate::state::AppState;
use crate::timer::format_elapsed;
use crate::ui::question::wrap_text;

/// End-screen lines and the content row of the restart button.
pub fn build_result(state: &AppState, width: usize) -> (Vec<Line<'static>>, usize) {
    let strings = state.locale.strings();
    let score = state.score();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings.end,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            state.locale.final_score(score),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(session) = state.session.as_ref() {
        lines.push(Line::from(format!("{} / {}", score, session.total_questions())));
    }

    let mut time_line = format!("{}: {}", strings.time, format_elapsed(state.elapsed_secs()));
    if let Some(finished) = state.finished_at {
        time_line.push_str(&format!("  ({})", finished.format("%H:%M:%S")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        time_line,
        Style::default().fg(Color::Rgb(200, 200, 120)),
    )));

    if let Some(session) = state.session.as_ref() {
        if !session.outcomes().is_empty() {
            lines.push(Line::from(""));
        }
        for (question, outcome) in session.questions().iter().zip(session.outcomes()) {
            let (icon, color) = match outcome {
                Outcome::Correct => ("✓", Color::Green),
                Outcome::Incorrect => ("✗", Color::Red),
                Outcome::Skipped => ("–", Color::DarkGray),
            };
            let prompt = wrap_text(&question.prompt, width.saturating_sub(10))
                .into_iter()
                .next()
                .unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::raw(format!("{}. {}", question.number, prompt)),
            ]));
        }
    }

    lines.push(Line::from(""));
    let restart_line = lines.len();
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", strings.restart),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[q] Exit",
        Style::default().fg(Color::DarkGray),
    )));

    (lines, restart_line)
}

pub fn draw_result(f: &mut Frame, area: Rect, state: &AppState) {
    let (lines, _) = build_result(state, area.width.saturating_sub(2) as usize);

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
