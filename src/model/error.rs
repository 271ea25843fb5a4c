use thiserror::Error;

use crate::model::session::Page;

/// Rejected user intents. State is never mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("'{action}' is not available on the {page:?} page")]
    WrongPage { action: &'static str, page: Page },

    #[error("no scenario is in progress")]
    NoActiveScenario,

    #[error("step {given} was already answered or is not reached yet (current step is {current})")]
    StaleStep { given: usize, current: usize },

    #[error("choice {given} does not exist (this step has {available} choices)")]
    ChoiceOutOfRange { given: usize, available: usize },

    #[error("a name is required to save a score")]
    EmptyName,

    #[error("top N must be at least 1")]
    InvalidTopN,
}

/// Failures touching the durable leaderboard file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("leaderboard file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("leaderboard CSV error: {0}")]
    Csv(#[from] csv::Error),
}
