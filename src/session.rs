//! Quiz session state machine.
//!
//! A [`Session`] walks `NotStarted -> InProgress(i) -> Completed`. While a
//! question is displayed its answer moves `Unanswered -> Selected ->
//! Confirmed`. Rejected transitions return a [`SessionError`] and leave the
//! session untouched.

use crate::error::SessionError;
use crate::model::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress(usize),
    Completed,
}

/// Answer progress for the displayed question. Choices are held by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Selected { choice: usize, correct: bool },
    Confirmed { choice: usize, correct: bool },
}

impl AnswerState {
    pub fn selected_choice(&self) -> Option<usize> {
        match *self {
            AnswerState::Unanswered => None,
            AnswerState::Selected { choice, .. } | AnswerState::Confirmed { choice, .. } => {
                Some(choice)
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, AnswerState::Confirmed { .. })
    }
}

/// How a question ended once the session moved past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
}

/// Display mark for a choice of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(usize),
    Confirm,
    Advance,
    Tick,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Refuse `Advance` until the current answer is confirmed.
    pub require_confirm: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    options: SessionOptions,
    phase: Phase,
    answer: AnswerState,
    score: u32,
    elapsed_secs: u64,
    outcomes: Vec<Outcome>,
}

impl Session {
    pub fn new(questions: Vec<Question>, options: SessionOptions) -> Self {
        Self {
            questions,
            options,
            phase: Phase::NotStarted,
            answer: AnswerState::Unanswered,
            score: 0,
            elapsed_secs: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answer(&self) -> AnswerState {
        self.answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress(idx) => Some(idx),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|idx| self.questions.get(idx))
    }

    pub fn start(&mut self) -> Result<Phase, SessionError> {
        if self.phase != Phase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.phase = if self.questions.is_empty() {
            Phase::Completed
        } else {
            Phase::InProgress(0)
        };
        self.answer = AnswerState::Unanswered;
        log::info!("session started with {} questions", self.questions.len());
        if self.is_completed() {
            self.log_completion();
        }
        Ok(self.phase)
    }

    pub fn select(&mut self, choice: usize) -> Result<(), SessionError> {
        let question = self.in_progress_question()?;
        let correct = question
            .choices
            .get(choice)
            .map(|c| c.correct)
            .ok_or(SessionError::NoSuchChoice(choice))?;

        if self.answer.is_confirmed() {
            return Err(SessionError::AlreadyConfirmed);
        }
        self.answer = AnswerState::Selected { choice, correct };
        Ok(())
    }

    /// Locks in the selection. Returns whether it was correct.
    pub fn confirm(&mut self) -> Result<bool, SessionError> {
        self.in_progress_question()?;
        match self.answer {
            AnswerState::Unanswered => Err(SessionError::NothingSelected),
            AnswerState::Confirmed { .. } => Err(SessionError::AlreadyConfirmed),
            AnswerState::Selected { choice, correct } => {
                self.answer = AnswerState::Confirmed { choice, correct };
                if correct {
                    self.score += 1;
                }
                Ok(correct)
            }
        }
    }

    pub fn advance(&mut self) -> Result<Phase, SessionError> {
        let idx = match self.phase {
            Phase::NotStarted => return Err(SessionError::NotStarted),
            Phase::Completed => return Err(SessionError::Completed),
            Phase::InProgress(idx) => idx,
        };

        let outcome = match self.answer {
            AnswerState::Confirmed { correct: true, .. } => Outcome::Correct,
            AnswerState::Confirmed { correct: false, .. } => Outcome::Incorrect,
            _ if self.options.require_confirm => return Err(SessionError::NotConfirmed),
            _ => Outcome::Skipped,
        };

        self.outcomes.push(outcome);
        self.answer = AnswerState::Unanswered;

        let next = idx + 1;
        if next >= self.questions.len() {
            self.phase = Phase::Completed;
            self.log_completion();
        } else {
            self.phase = Phase::InProgress(next);
        }
        Ok(self.phase)
    }

    /// One elapsed second. Only counts while a question is on screen.
    pub fn tick(&mut self) -> Result<u64, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::NotStarted),
            Phase::Completed => Err(SessionError::Completed),
            Phase::InProgress(_) => {
                self.elapsed_secs += 1;
                Ok(self.elapsed_secs)
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        let result = match action {
            Action::Select(choice) => self.select(choice),
            Action::Confirm => self.confirm().map(|_| ()),
            Action::Advance => self.advance().map(|_| ()),
            Action::Tick => self.tick().map(|_| ()),
        };
        if let Err(ref e) = result {
            log::debug!("{:?} rejected: {}", action, e);
        }
        result
    }

    /// Mark for choice `idx` of the current question. After confirmation
    /// every correct choice is revealed and a wrong pick is flagged.
    pub fn choice_mark(&self, idx: usize) -> ChoiceMark {
        let Some(question) = self.current_question() else {
            return ChoiceMark::Plain;
        };
        match self.answer {
            AnswerState::Unanswered => ChoiceMark::Plain,
            AnswerState::Selected { choice, .. } => {
                if choice == idx {
                    ChoiceMark::Selected
                } else {
                    ChoiceMark::Plain
                }
            }
            AnswerState::Confirmed { choice, .. } => {
                let correct = question.choices.get(idx).map_or(false, |c| c.correct);
                if correct {
                    ChoiceMark::Correct
                } else if choice == idx {
                    ChoiceMark::Incorrect
                } else {
                    ChoiceMark::Plain
                }
            }
        }
    }

    /// Confirm is offered only while a selection is pending.
    pub fn can_confirm(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
            && matches!(self.answer, AnswerState::Selected { .. })
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
            && (!self.options.require_confirm || self.answer.is_confirmed())
    }

    fn in_progress_question(&self) -> Result<&Question, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::NotStarted),
            Phase::Completed => Err(SessionError::Completed),
            Phase::InProgress(idx) => self.questions.get(idx).ok_or(SessionError::Completed),
        }
    }

    fn log_completion(&self) {
        log::info!(
            "session completed: score {}/{} in {}s",
            self.score,
            self.questions.len(),
            self.elapsed_secs
        );
    }
}
