//! Maps input to commands and applies them to [`AppState`].

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Action;
use crate::state::{AppState, Dialog, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleLocale,
    Start,
    Restart,
    Quit,
    AskQuit,
    ShowHelp,
    CloseDialog,
    MoveCursor(isize),
    SelectCursor,
    /// Confirm a pending selection, advance past a confirmed one, or pick
    /// the highlighted choice.
    Primary,
    Session(Action),
}

pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if let Some(dialog) = state.top_dialog() {
        return match (dialog, key.code) {
            (Dialog::ConfirmQuit, KeyCode::Enter) => Some(Command::Quit),
            (Dialog::ConfirmQuit, KeyCode::Esc) => Some(Command::CloseDialog),
            (Dialog::Help, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) => {
                Some(Command::CloseDialog)
            }
            _ => None,
        };
    }

    if ctrl && key.code == KeyCode::Char('q') {
        return Some(match state.screen() {
            Screen::Quiz => Command::AskQuit,
            _ => Command::Quit,
        });
    }

    match state.screen() {
        Screen::Start => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                Some(Command::ToggleLocale)
            }
            KeyCode::Enter | KeyCode::Char('s') => Some(Command::Start),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('?') => Some(Command::ShowHelp),
            _ => None,
        },
        Screen::Quiz => match key.code {
            KeyCode::Char('n') if ctrl => Some(Command::Session(Action::Advance)),
            KeyCode::Right => Some(Command::Session(Action::Advance)),
            KeyCode::Up => Some(Command::MoveCursor(-1)),
            KeyCode::Down => Some(Command::MoveCursor(1)),
            KeyCode::Char(' ') => Some(Command::SelectCursor),
            KeyCode::Enter => Some(Command::Primary),
            KeyCode::Esc => Some(Command::AskQuit),
            KeyCode::Char('?') => Some(Command::ShowHelp),
            KeyCode::Char(c) if !ctrl && c.is_ascii_lowercase() => {
                Some(Command::Session(Action::Select((c as u8 - b'a') as usize)))
            }
            KeyCode::Char(c) if !ctrl && ('1'..='9').contains(&c) => {
                Some(Command::Session(Action::Select((c as u8 - b'1') as usize)))
            }
            _ => None,
        },
        Screen::End => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('?') => Some(Command::ShowHelp),
            _ => None,
        },
    }
}

pub fn execute(state: &mut AppState, command: Command) {
    match command {
        Command::ToggleLocale => {
            state.toggle_locale();
        }
        Command::Start => {
            if state.screen() != Screen::Start {
                return;
            }
            if let Err(e) = state.start_quiz() {
                log::error!("cannot start quiz: {}", e);
                state.load_error = Some(e.to_string());
            }
        }
        Command::Restart => {
            if state.screen() == Screen::End {
                state.restart();
            }
        }
        Command::Quit => {
            state.dialog_stack.clear();
            state.should_quit = true;
        }
        Command::AskQuit => state.push_dialog(Dialog::ConfirmQuit),
        Command::ShowHelp => state.push_dialog(Dialog::Help),
        Command::CloseDialog => {
            state.pop_dialog();
        }
        Command::MoveCursor(delta) => state.move_cursor(delta),
        Command::SelectCursor => {
            let _ = state.apply(Action::Select(state.choice_cursor));
        }
        Command::Primary => {
            let action = primary_action(state);
            let _ = state.apply(action);
        }
        Command::Session(action) => {
            if let Action::Select(idx) = action {
                if idx < state.choice_count() {
                    state.choice_cursor = idx;
                }
            }
            let _ = state.apply(action);
        }
    }
}

fn primary_action(state: &AppState) -> Action {
    let Some(session) = state.session.as_ref() else {
        return Action::Confirm;
    };
    if session.can_confirm() {
        Action::Confirm
    } else if session.answer().is_confirmed() {
        Action::Advance
    } else {
        Action::Select(state.choice_cursor)
    }
}
