pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod markdown;
pub mod question;
pub mod result;
pub mod start;
pub mod statusbar;
pub mod titlebar;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::command::Command;
use crate::state::{AppState, Screen};

/// Draws the whole frame from `state`; nothing here mutates it.
pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    match state.screen() {
        Screen::Start => start::draw_start(f, layout.main, state),
        Screen::Quiz => question::draw_question(f, layout.main, state),
        Screen::End => result::draw_result(f, layout.main, state),
    }
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

/// Command for a left click at (`x`, `y`) on a frame of size `area`.
pub fn hit_test(state: &AppState, area: Rect, x: u16, y: u16) -> Option<Command> {
    if state.has_dialog() {
        return None;
    }

    let content = layout::inner(layout::compute_layout(area).main);
    if x < content.x
        || y < content.y
        || x >= content.x + content.width
        || y >= content.y + content.height
    {
        return None;
    }
    let row = (y - content.y) as usize;
    let col = (x - content.x) as usize;

    match state.screen() {
        Screen::Start => match row {
            start::LANGUAGE_LINE => Some(Command::ToggleLocale),
            start::START_LINE => Some(Command::Start),
            _ => None,
        },
        Screen::Quiz => question::build_question(state, content.width as usize)
            .and_then(|(_, hits)| hits.action_at(row, col))
            .map(Command::Session),
        Screen::End => {
            let (_, restart_line) = result::build_result(state, content.width as usize);
            (row == restart_line).then_some(Command::Restart)
        }
    }
}
