use std::path::PathBuf;

use crate::engine::leaderboard::SortField;
use crate::model::error::GameError;
use crate::model::leaderboard_entry::LeaderboardEntry;

/// User intents forwarded by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    SelectScenario(String),
    ChooseOption { step: usize, choice: usize },
    Restart,
    Save { name: String },
    ViewLeaderboard,
    Back,
    ClearLeaderboard,
    FilterLeaderboard(Option<String>),
    SortLeaderboard { field: SortField, ascending: bool },
    TopN(usize),
    ExportLeaderboard(PathBuf),
}

#[derive(Debug)]
pub enum EngineResponse {
    Done,
    Saved(LeaderboardEntry),
    Cleared,
    Exported(PathBuf),

    /// Input rejected, nothing changed.
    Rejected(GameError),

    /// The action took effect in memory but the file could not be updated.
    StorageWarning(String),
}

impl EngineResponse {
    pub fn is_rejected(&self) -> bool {
        matches!(self, EngineResponse::Rejected(_))
    }
}
