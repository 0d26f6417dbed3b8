use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let strings = state.locale.strings();

    let bindings: Vec<(&str, &str)> = if state.has_dialog() {
        vec![("Enter", "ok"), ("Esc", "close")]
    } else {
        match state.screen() {
            Screen::Start => vec![
                ("←/→", "language"),
                ("Enter", strings.start),
                ("q", "quit"),
            ],
            Screen::Quiz => {
                let session = state.session.as_ref();
                let mut keys = vec![("a-z", "answer"), ("↑/↓", "move")];
                if session.map_or(false, |s| s.can_confirm()) {
                    keys.push(("Enter", strings.confirm));
                }
                if session.map_or(false, |s| s.can_advance()) {
                    keys.push(("→", strings.next));
                }
                keys.push(("Ctrl+Q", "quit"));
                keys
            }
            Screen::End => vec![("Enter", strings.restart), ("q", "quit")],
        }
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
