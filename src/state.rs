use chrono::{DateTime, Local};

use crate::bank::BankSource;
use crate::error::{BankError, SessionError};
use crate::locale::Locale;
use crate::session::{Action, Phase, Session, SessionOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Quiz,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmQuit,
    Help,
}

#[derive(Debug)]
pub struct AppState {
    pub locale: Locale,
    pub source: BankSource,
    pub options: SessionOptions,
    pub session: Option<Session>,
    pub title: Option<String>,
    pub choice_cursor: usize,
    pub load_error: Option<String>,
    pub dialog_stack: Vec<Dialog>,
    pub started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(locale: Locale, source: BankSource, options: SessionOptions) -> Self {
        Self {
            locale,
            source,
            options,
            session: None,
            title: None,
            choice_cursor: 0,
            load_error: None,
            dialog_stack: Vec::new(),
            started_at: None,
            finished_at: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.session.as_ref().map(Session::phase) {
            None | Some(Phase::NotStarted) => Screen::Start,
            Some(Phase::InProgress(_)) => Screen::Quiz,
            Some(Phase::Completed) => Screen::End,
        }
    }

    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.locale.strings().title.to_string())
    }

    /// Locale is fixed once a session exists.
    pub fn toggle_locale(&mut self) -> bool {
        if self.screen() != Screen::Start {
            return false;
        }
        self.locale = self.locale.toggle();
        self.load_error = None;
        true
    }

    /// Loads the locale's bank and begins a fresh session.
    pub fn start_quiz(&mut self) -> Result<(), BankError> {
        let bank = self.source.load(self.locale)?;
        self.title = Some(bank.display_title(self.locale));

        let mut session = Session::new(bank.questions, self.options);
        // A new session cannot refuse to start.
        let _ = session.start();

        self.started_at = Some(Local::now());
        self.finished_at = if session.is_completed() {
            Some(Local::now())
        } else {
            None
        };
        self.session = Some(session);
        self.choice_cursor = 0;
        self.load_error = None;
        Ok(())
    }

    pub fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        let before = session.current_index();
        session.dispatch(action)?;

        if session.current_index() != before {
            self.choice_cursor = 0;
        }
        if session.is_completed() && self.finished_at.is_none() {
            self.finished_at = Some(Local::now());
        }
        Ok(())
    }

    /// Back to the start screen; the next start builds a new session.
    pub fn restart(&mut self) {
        self.session = None;
        self.title = None;
        self.choice_cursor = 0;
        self.load_error = None;
        self.started_at = None;
        self.finished_at = None;
    }

    pub fn choice_count(&self) -> usize {
        self.session
            .as_ref()
            .and_then(Session::current_question)
            .map_or(0, |q| q.choices.len())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.choice_count();
        if count == 0 {
            return;
        }
        let next = self.choice_cursor as isize + delta;
        self.choice_cursor = next.clamp(0, count as isize - 1) as usize;
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.session.as_ref().map_or(0, Session::elapsed_secs)
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, Session::score)
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
