use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating or parsing a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("cannot read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no closing --- for frontmatter")]
    UnterminatedFrontmatter,
    #[error("invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
    #[error("question {number} (\"{prompt}\") has no choices")]
    NoChoices { number: u32, prompt: String },
    #[error("no question bank found; pass a data directory or --bank")]
    NotFound,
}

/// A transition the session state machine refused. State is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session has not started")]
    NotStarted,
    #[error("session already started")]
    AlreadyStarted,
    #[error("session already completed")]
    Completed,
    #[error("no choice at position {0}")]
    NoSuchChoice(usize),
    #[error("answer already confirmed")]
    AlreadyConfirmed,
    #[error("no choice selected")]
    NothingSelected,
    #[error("answer must be confirmed before advancing")]
    NotConfirmed,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
