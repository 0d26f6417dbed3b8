use std::path::PathBuf;
use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use quizgame::bank::BankSource;
use quizgame::command::{self, Command};
use quizgame::locale::Locale;
use quizgame::session::{Action, Phase, SessionOptions};
use quizgame::state::{AppState, Dialog, Screen};
use quizgame::timer::{format_elapsed, spawn_ticker, TimerEvent};
use quizgame::ui;

fn fixture_state(locale: Locale) -> AppState {
    let source = BankSource::new(PathBuf::from("fixtures"), None);
    AppState::new(locale, source, SessionOptions::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(cmd) = command::map_key(state, key(code)) {
        command::execute(state, cmd);
    }
}

#[test]
fn test_locale_strings() {
    assert_eq!(Locale::default(), Locale::Es);
    assert_eq!(Locale::Es.strings().confirm, "Confirmar");
    assert_eq!(Locale::En.strings().next, "Next");
    assert_eq!(Locale::Es.final_score(3), "Tu puntuación es: 3");
    assert_eq!(Locale::En.final_score(2), "Your score is: 2");
    assert_eq!(Locale::Es.bank_file_name(), "askES.md");
    assert_eq!(Locale::En.toggle(), Locale::Es);
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(65), "00:01:05");
    assert_eq!(format_elapsed(3600 + 59), "01:00:59");
}

#[test]
fn test_ticker_delivers_and_stops_once() {
    let ticker = spawn_ticker(Duration::from_millis(5));
    assert_eq!(ticker.recv(), Some(TimerEvent::Tick));
    assert!(ticker.stop());
    assert!(!ticker.stop());
    assert!(ticker.is_stopped());
}

#[test]
fn test_full_keyboard_session() {
    let mut state = fixture_state(Locale::Es);
    assert_eq!(state.screen(), Screen::Start);

    // Switch to English, then start
    press(&mut state, KeyCode::Right);
    assert_eq!(state.locale, Locale::En);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.screen(), Screen::Quiz);
    assert_eq!(state.title(), "Fixture Quiz");
    assert!(state.started_at.is_some());

    // Locale is fixed once started
    assert!(!state.toggle_locale());
    assert_eq!(state.locale, Locale::En);

    // Q1: "b" is correct; Enter confirms, Enter again advances
    press(&mut state, KeyCode::Char('b'));
    assert_eq!(state.choice_cursor, 1);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.score(), 1);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.choice_cursor, 0);

    // Q2: pick wrong via cursor + space, confirm
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.score(), 1);
    press(&mut state, KeyCode::Right);

    // Q3: digit selection, then finish
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.screen(), Screen::End);
    assert_eq!(state.score(), 2);
    assert!(state.finished_at.is_some());
}

#[test]
fn test_ticks_apply_only_while_in_progress() {
    let mut state = fixture_state(Locale::Es);
    assert!(state.apply(Action::Tick).is_err());

    state.start_quiz().unwrap();
    state.apply(Action::Tick).unwrap();
    state.apply(Action::Tick).unwrap();
    assert_eq!(state.elapsed_secs(), 2);

    // Single-question Spanish fixture: skip ends the session
    state.apply(Action::Advance).unwrap();
    assert_eq!(state.screen(), Screen::End);
    assert!(state.apply(Action::Tick).is_err());
    assert_eq!(state.elapsed_secs(), 2);
}

#[test]
fn test_restart_builds_fresh_session() {
    let mut state = fixture_state(Locale::Es);
    state.start_quiz().unwrap();
    state.apply(Action::Select(1)).unwrap();
    state.apply(Action::Confirm).unwrap();
    state.apply(Action::Advance).unwrap();
    assert_eq!(state.score(), 1);

    press(&mut state, KeyCode::Char('r'));
    assert_eq!(state.screen(), Screen::Start);
    assert!(state.session.is_none());
    assert!(state.finished_at.is_none());

    press(&mut state, KeyCode::Enter);
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.phase(), Phase::InProgress(0));
    assert_eq!(session.score(), 0);
    assert_eq!(session.elapsed_secs(), 0);
}

#[test]
fn test_missing_bank_shows_error_and_stays_on_start() {
    let source = BankSource::new(PathBuf::from("fixtures/nowhere"), None);
    let mut state = AppState::new(Locale::En, source, SessionOptions::default());

    command::execute(&mut state, Command::Start);
    assert_eq!(state.screen(), Screen::Start);
    let err = state.load_error.clone().unwrap();
    assert!(err.contains("askEN.md"));

    // Changing language clears the message
    command::execute(&mut state, Command::ToggleLocale);
    assert!(state.load_error.is_none());
}

#[test]
fn test_quit_needs_confirmation_during_quiz() {
    let mut state = fixture_state(Locale::En);
    state.start_quiz().unwrap();

    let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(command::map_key(&state, ctrl_q), Some(Command::AskQuit));
    command::execute(&mut state, Command::AskQuit);
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmQuit));

    // Choice keys are swallowed by the dialog
    assert_eq!(command::map_key(&state, key(KeyCode::Char('a'))), None);

    press(&mut state, KeyCode::Esc);
    assert!(!state.has_dialog());
    assert!(!state.should_quit);

    command::execute(&mut state, Command::AskQuit);
    press(&mut state, KeyCode::Enter);
    assert!(state.should_quit);
}

#[test]
fn test_key_mapping_per_screen() {
    let mut state = fixture_state(Locale::En);
    assert_eq!(
        command::map_key(&state, key(KeyCode::Enter)),
        Some(Command::Start)
    );
    assert_eq!(command::map_key(&state, key(KeyCode::Char('q'))), Some(Command::Quit));

    state.start_quiz().unwrap();
    assert_eq!(
        command::map_key(&state, key(KeyCode::Char('c'))),
        Some(Command::Session(Action::Select(2)))
    );
    assert_eq!(
        command::map_key(&state, key(KeyCode::Right)),
        Some(Command::Session(Action::Advance))
    );
    assert_eq!(command::map_key(&state, key(KeyCode::Enter)), Some(Command::Primary));
}

#[test]
fn test_mouse_hits_choices_and_buttons() {
    let mut state = fixture_state(Locale::En);
    let area = Rect::new(0, 0, 80, 30);

    // Start screen: start button row inside the bordered main panel
    let start_row = 1 + 1 + ui::start::START_LINE as u16;
    assert_eq!(ui::hit_test(&state, area, 10, start_row), Some(Command::Start));
    command::execute(&mut state, Command::Start);
    assert_eq!(state.screen(), Screen::Quiz);

    let (_, hits) = ui::question::build_question(&state, 78).unwrap();
    assert_eq!(hits.choice_lines.len(), 3);
    assert!(hits.confirm_cols.is_none());

    // Click the second choice
    let (first, _, idx) = hits.choice_lines[1];
    assert_eq!(idx, 1);
    let cmd = ui::hit_test(&state, area, 10, 2 + first as u16).unwrap();
    assert_eq!(cmd, Command::Session(Action::Select(1)));
    command::execute(&mut state, cmd);

    // Confirm button appears once something is selected
    let (_, hits) = ui::question::build_question(&state, 78).unwrap();
    let (start, _) = hits.confirm_cols.unwrap();
    let cmd = ui::hit_test(&state, area, 1 + start as u16, 2 + hits.button_line as u16).unwrap();
    assert_eq!(cmd, Command::Session(Action::Confirm));
    command::execute(&mut state, cmd);
    assert_eq!(state.score(), 1);

    // Outside the panel nothing happens
    assert_eq!(ui::hit_test(&state, area, 0, 0), None);
}
