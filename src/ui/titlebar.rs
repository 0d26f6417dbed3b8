use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};
use crate::timer::format_elapsed;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let strings = state.locale.strings();

    let timer_text = if state.screen() == Screen::Start {
        String::new()
    } else {
        format!(" {}: {} ", strings.time, format_elapsed(state.elapsed_secs()))
    };
    let timer_span = Span::styled(
        timer_text.clone(),
        Style::default().fg(Color::Rgb(200, 200, 120)),
    );

    let title_text = format!("[ {} ]", state.title());
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Title centered on the full width, timer pinned to the right
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let timer_len = timer_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + timer_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
