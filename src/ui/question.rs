use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::choice_letter;
use crate::session::{Action, ChoiceMark};
use crate::state::AppState;
use crate::ui::layout::inner;
use crate::ui::markdown::markdown_to_lines;

/// Maps content lines of the question panel to clickable elements.
#[derive(Debug, Default)]
pub struct QuestionHitMap {
    /// (first_content_line, line_count, choice_index) for each choice.
    pub choice_lines: Vec<(usize, usize, usize)>,
    pub button_line: usize,
    /// Column ranges (start, end exclusive) within the panel's inner area.
    pub confirm_cols: Option<(usize, usize)>,
    pub next_cols: Option<(usize, usize)>,
}

impl QuestionHitMap {
    pub fn action_at(&self, row: usize, col: usize) -> Option<Action> {
        for &(first, count, idx) in &self.choice_lines {
            if row >= first && row < first + count {
                return Some(Action::Select(idx));
            }
        }
        if row == self.button_line {
            let inside = |cols: Option<(usize, usize)>| {
                cols.map_or(false, |(start, end)| col >= start && col < end)
            };
            if inside(self.confirm_cols) {
                return Some(Action::Confirm);
            }
            if inside(self.next_cols) {
                return Some(Action::Advance);
            }
        }
        None
    }
}

/// Wrap a styled Line at `width`, preserving span styles across breaks.
fn wrap_styled_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }

    let total_width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
    if total_width <= width {
        return vec![line];
    }

    let mut chars: Vec<(char, Style)> = Vec::new();
    for span in &line.spans {
        for c in span.content.chars() {
            chars.push((c, span.style));
        }
    }

    let mut result: Vec<Line<'static>> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars.len() - pos <= width {
            result.push(styled_chars_to_line(&chars[pos..]));
            break;
        }

        let chunk_end = pos + width;
        let break_at = if chars[chunk_end].0 == ' ' {
            chunk_end
        } else if let Some(sp) = chars[pos..chunk_end].iter().rposition(|(c, _)| *c == ' ') {
            if sp > 0 { pos + sp } else { chunk_end }
        } else {
            chunk_end
        };

        result.push(styled_chars_to_line(&chars[pos..break_at]));
        pos = break_at;
        if pos < chars.len() && chars[pos].0 == ' ' {
            pos += 1;
        }
    }

    if result.is_empty() {
        result.push(Line::from(""));
    }

    result
}

/// Rebuild a Line from (char, style) pairs, grouping same-style runs into spans.
fn styled_chars_to_line(chars: &[(char, Style)]) -> Line<'static> {
    if chars.is_empty() {
        return Line::from("");
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current_text = String::new();
    let mut current_style = chars[0].1;

    for &(c, style) in chars {
        if style != current_style && !current_text.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
        }
        current_style = style;
        current_text.push(c);
    }
    if !current_text.is_empty() {
        spans.push(Span::styled(current_text, current_style));
    }

    Line::from(spans)
}

/// Wrap text to fit within `width` columns, breaking at word boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}

fn mark_style(mark: ChoiceMark) -> Style {
    match mark {
        ChoiceMark::Plain => Style::default(),
        ChoiceMark::Selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        ChoiceMark::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        ChoiceMark::Incorrect => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

/// Lay out the current question at `width` columns. The same pass feeds
/// drawing and mouse hit-testing.
pub fn build_question(state: &AppState, width: usize) -> Option<(Vec<Line<'static>>, QuestionHitMap)> {
    let session = state.session.as_ref()?;
    let question = session.current_question()?;
    let strings = state.locale.strings();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut hits = QuestionHitMap::default();
    let text_width = width.saturating_sub(4); // 2 indent left + 2 margin right

    // Prompt
    let prompt_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    for wline in wrap_text(&question.prompt, text_width) {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(wline, prompt_style),
        ]));
    }
    lines.push(Line::from(""));

    // Detail
    for block in &question.detail {
        for line in markdown_to_lines(block) {
            for wline in wrap_styled_line(line, text_width) {
                lines.push(Line::from(
                    std::iter::once(Span::raw("  "))
                        .chain(wline.spans)
                        .collect::<Vec<_>>(),
                ));
            }
        }
        lines.push(Line::from(""));
    }

    // Choices
    for (i, choice) in question.choices.iter().enumerate() {
        let mark = session.choice_mark(i);
        let style = mark_style(mark);
        let cursor = if i == state.choice_cursor { "▸" } else { " " };
        let radio = match mark {
            ChoiceMark::Plain => "( )",
            ChoiceMark::Correct if session.answer().selected_choice() != Some(i) => "( )",
            _ => "(●)",
        };
        let verdict = match mark {
            ChoiceMark::Correct => " ✓",
            ChoiceMark::Incorrect => " ✗",
            _ => "",
        };

        let prefix = format!(" {} {} {}. ", cursor, radio, choice_letter(i));
        let prefix_len = prefix.chars().count();
        let wrapped = wrap_text(
            &format!("{}{}", choice.text, verdict),
            width.saturating_sub(prefix_len + 2),
        );

        hits.choice_lines.push((lines.len(), wrapped.len(), i));
        for (li, wline) in wrapped.into_iter().enumerate() {
            let lead = if li == 0 {
                Span::styled(prefix.clone(), style)
            } else {
                Span::raw(" ".repeat(prefix_len))
            };
            lines.push(Line::from(vec![lead, Span::styled(wline, style)]));
        }
    }
    lines.push(Line::from(""));

    // Buttons
    let mut spans = vec![Span::raw("  ")];
    let mut col = 2;
    if session.can_confirm() {
        let label = format!("[ {} ]", strings.confirm);
        let len = label.chars().count();
        hits.confirm_cols = Some((col, col + len));
        spans.push(Span::styled(
            label,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
        col += len + 3;
    }
    let next_label = format!("[ {} ]", strings.next);
    let next_style = if session.can_advance() {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    hits.next_cols = Some((col, col + next_label.chars().count()));
    spans.push(Span::styled(next_label, next_style));

    hits.button_line = lines.len();
    lines.push(Line::from(spans));

    Some((lines, hits))
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let strings = state.locale.strings();
    let Some((lines, _)) = build_question(state, inner(area).width as usize) else {
        let p = Paragraph::new("").block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };

    let position = state
        .session
        .as_ref()
        .and_then(|s| s.current_index().map(|idx| (idx + 1, s.total_questions())))
        .unwrap_or((0, 0));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} {}/{} ", strings.question, position.0, position.1));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
