use chrono::Utc;
use tracing::{info, warn};

use crate::engine::controller;
use crate::engine::interpret::{interpret_all, Interpretation};
use crate::engine::leaderboard::{self, LeaderboardStore, SortField};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::error::GameError;
use crate::model::leaderboard_entry::LeaderboardEntry;
use crate::model::session::{Page, Progress, SessionState};

pub const DEFAULT_TOP_N: usize = 5;
pub const MAX_TOP_N: usize = 20;

/// How the leaderboard page is currently filtered and ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub scenario: Option<String>,
    pub sort: SortField,
    pub ascending: bool,
    pub top_n: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            scenario: None,
            sort: SortField::Total,
            ascending: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Read-only rows for the leaderboard page.
pub struct LeaderboardView<'a> {
    pub rows: Vec<&'a LeaderboardEntry>,
    pub top: Vec<&'a LeaderboardEntry>,
    pub scenarios: Vec<String>,
}

/// Owns one session and the leaderboard. Commands mutate, queries borrow.
pub struct Engine {
    session: SessionState,
    leaderboard: LeaderboardStore,
    view: ViewOptions,
}

impl Engine {
    pub fn new(leaderboard: LeaderboardStore, top_n: usize) -> Self {
        Self {
            session: SessionState::new(),
            leaderboard,
            view: ViewOptions {
                top_n: top_n.clamp(1, MAX_TOP_N),
                ..Default::default()
            },
        }
    }

    pub fn handle(&mut self, cmd: EngineCommand) -> EngineResponse {
        let result = match cmd {
            EngineCommand::SelectScenario(name) => {
                controller::select_scenario(&mut self.session, &name).map(|_| EngineResponse::Done)
            }
            EngineCommand::ChooseOption { step, choice } => {
                controller::choose_option(&mut self.session, step, choice)
                    .map(|_| EngineResponse::Done)
            }
            EngineCommand::Restart => {
                controller::restart(&mut self.session);
                Ok(EngineResponse::Done)
            }
            EngineCommand::Save { name } => self.save(&name),
            EngineCommand::ViewLeaderboard => {
                controller::view_leaderboard(&mut self.session);
                Ok(EngineResponse::Done)
            }
            EngineCommand::Back => controller::back(&mut self.session).map(|_| EngineResponse::Done),
            EngineCommand::ClearLeaderboard => self.clear(),
            EngineCommand::FilterLeaderboard(scenario) => {
                self.view.scenario = scenario;
                Ok(EngineResponse::Done)
            }
            EngineCommand::SortLeaderboard { field, ascending } => {
                self.view.sort = field;
                self.view.ascending = ascending;
                Ok(EngineResponse::Done)
            }
            EngineCommand::TopN(n) => {
                if n == 0 {
                    Err(GameError::InvalidTopN)
                } else {
                    self.view.top_n = n;
                    Ok(EngineResponse::Done)
                }
            }
            EngineCommand::ExportLeaderboard(path) => Ok(match self.leaderboard.export_to(&path) {
                Ok(()) => {
                    info!(path = %path.display(), "leaderboard exported");
                    EngineResponse::Exported(path)
                }
                Err(e) => EngineResponse::StorageWarning(format!(
                    "Could not export to {}: {}",
                    path.display(),
                    e
                )),
            }),
        };

        result.unwrap_or_else(|e| {
            warn!(error = %e, "input rejected");
            EngineResponse::Rejected(e)
        })
    }

    fn save(&mut self, name: &str) -> Result<EngineResponse, GameError> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
        let entry = controller::result_entry(&self.session, name, timestamp)?;

        info!(name = %entry.name, scenario = %entry.scenario, total = entry.total, "score saved");
        Ok(match self.leaderboard.append(entry.clone()) {
            Ok(()) => EngineResponse::Saved(entry),
            Err(e) => {
                warn!(error = %e, "leaderboard not persisted");
                EngineResponse::StorageWarning(format!(
                    "Score kept for this session but not written to disk: {e}"
                ))
            }
        })
    }

    fn clear(&mut self) -> Result<EngineResponse, GameError> {
        if self.session.page != Page::Leaderboard {
            return Err(GameError::WrongPage {
                action: "clear leaderboard",
                page: self.session.page,
            });
        }

        Ok(match self.leaderboard.clear() {
            Ok(()) => EngineResponse::Cleared,
            Err(e) => {
                warn!(error = %e, "leaderboard file not removed");
                EngineResponse::StorageWarning(format!("Leaderboard emptied but file not removed: {e}"))
            }
        })
    }

    /* ---------- queries ---------- */

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn progress(&self) -> Option<Progress> {
        self.session.progress()
    }

    /// Band interpretations, only once the attempt is finished.
    pub fn interpretations(&self) -> Option<[Interpretation; 4]> {
        self.session
            .is_complete()
            .then(|| interpret_all(&self.session.scores))
    }

    pub fn view_options(&self) -> &ViewOptions {
        &self.view
    }

    pub fn leaderboard_is_empty(&self) -> bool {
        self.leaderboard.is_empty()
    }

    pub fn leaderboard_path(&self) -> &std::path::Path {
        self.leaderboard.path()
    }

    pub fn leaderboard_view(&self) -> LeaderboardView<'_> {
        let filtered = self.leaderboard.filter(self.view.scenario.as_deref());
        let top = leaderboard::top_n(&filtered, self.view.top_n);
        let rows = leaderboard::sort(filtered, self.view.sort, self.view.ascending);

        LeaderboardView {
            rows,
            top,
            scenarios: self.leaderboard.scenario_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dimension::Scores;
    use std::path::Path;

    const PO: &str = "AI Purchase Order Assistant";
    const CHAT: &str = "GenAI Chatbot for Customers";

    fn engine_at(path: &Path) -> Engine {
        Engine::new(LeaderboardStore::load(path), DEFAULT_TOP_N)
    }

    fn play(engine: &mut Engine, scenario: &str, choice: usize) {
        assert!(matches!(
            engine.handle(EngineCommand::SelectScenario(scenario.into())),
            EngineResponse::Done
        ));
        for step in 0..5 {
            let resp = engine.handle(EngineCommand::ChooseOption { step, choice });
            assert!(!resp.is_rejected());
        }
    }

    #[test]
    fn full_session_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.csv");
        let mut engine = engine_at(&path);

        play(&mut engine, PO, 0);
        assert_eq!(engine.session().page, Page::Results);

        let bands = engine.interpretations().unwrap();
        assert_eq!(bands[0].value, 6);
        assert_eq!(bands[2].value, -8);

        let saved = match engine.handle(EngineCommand::Save { name: " Ann ".into() }) {
            EngineResponse::Saved(entry) => entry,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(saved.name, "Ann");
        assert_eq!(saved.total, -4);
        assert!(saved.timestamp.contains('T'));
        assert!(!saved.timestamp.ends_with('Z'));

        // Saving again is allowed and adds a second row.
        assert!(matches!(
            engine.handle(EngineCommand::Save { name: "Ann".into() }),
            EngineResponse::Saved(_)
        ));

        let fresh = engine_at(&path);
        assert_eq!(fresh.leaderboard_view().rows.len(), 2);
        assert_eq!(fresh.leaderboard_view().rows[0].scores(), Scores::new(6, 3, -8, -5));
    }

    #[test]
    fn empty_name_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.csv");
        let mut engine = engine_at(&path);
        play(&mut engine, PO, 1);

        let resp = engine.handle(EngineCommand::Save { name: "  ".into() });
        assert!(matches!(resp, EngineResponse::Rejected(GameError::EmptyName)));
        assert!(engine.leaderboard_is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn write_failure_keeps_entry_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("leaderboard.csv");
        std::fs::create_dir_all(path.join("blocker")).unwrap();

        let mut engine = engine_at(&path);
        play(&mut engine, CHAT, 2);
        let resp = engine.handle(EngineCommand::Save { name: "Bo".into() });

        assert!(matches!(resp, EngineResponse::StorageWarning(_)));
        assert_eq!(engine.leaderboard_view().rows.len(), 1);
        assert_eq!(engine.session().page, Page::Results);
    }

    #[test]
    fn view_filters_sorts_and_ranks() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_at(&dir.path().join("leaderboard.csv"));

        for (scenario, choice, name) in [(PO, 0, "a"), (PO, 2, "b"), (CHAT, 2, "c"), (PO, 1, "d")] {
            engine.handle(EngineCommand::Restart);
            play(&mut engine, scenario, choice);
            engine.handle(EngineCommand::Save { name: name.into() });
        }
        engine.handle(EngineCommand::ViewLeaderboard);

        let view = engine.leaderboard_view();
        assert_eq!(view.scenarios, vec![PO.to_string(), CHAT.to_string()]);
        let totals: Vec<i32> = view.rows.iter().map(|e| e.total).collect();
        let mut sorted = totals.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(totals, sorted);

        engine.handle(EngineCommand::FilterLeaderboard(Some(PO.into())));
        engine.handle(EngineCommand::SortLeaderboard {
            field: SortField::Name,
            ascending: true,
        });
        engine.handle(EngineCommand::TopN(2));
        let view = engine.leaderboard_view();
        let names: Vec<&str> = view.rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "d"]);

        // Top N ignores the name ordering and only sees the filtered rows.
        assert_eq!(view.top.len(), 2);
        assert!(view.top.iter().all(|e| e.scenario == PO));
        assert!(view.top[0].total >= view.top[1].total);
        assert_eq!(view.top[0].name, "b");
    }

    #[test]
    fn top_n_zero_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_at(&dir.path().join("leaderboard.csv"));
        assert!(matches!(
            engine.handle(EngineCommand::TopN(0)),
            EngineResponse::Rejected(GameError::InvalidTopN)
        ));
        assert_eq!(engine.view_options().top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn clear_only_from_leaderboard_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.csv");
        let mut engine = engine_at(&path);
        play(&mut engine, PO, 0);
        engine.handle(EngineCommand::Save { name: "x".into() });

        assert!(engine.handle(EngineCommand::ClearLeaderboard).is_rejected());
        assert!(path.exists());

        engine.handle(EngineCommand::ViewLeaderboard);
        assert!(matches!(
            engine.handle(EngineCommand::ClearLeaderboard),
            EngineResponse::Cleared
        ));
        assert!(engine.leaderboard_is_empty());
        assert!(!path.exists());
        assert!(engine_at(&path).leaderboard_is_empty());
        assert_eq!(engine.session().page, Page::Leaderboard);
    }

    #[test]
    fn back_returns_to_blank_intro() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_at(&dir.path().join("leaderboard.csv"));
        engine.handle(EngineCommand::SelectScenario(PO.into()));
        engine.handle(EngineCommand::ViewLeaderboard);
        engine.handle(EngineCommand::Back);
        assert_eq!(engine.session(), &SessionState::new());
        assert!(engine.interpretations().is_none());
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_at(&dir.path().join("leaderboard.csv"));
        let resp = engine.handle(EngineCommand::SelectScenario("Space Elevator".into()));
        assert!(matches!(resp, EngineResponse::Rejected(GameError::UnknownScenario(_))));
        assert_eq!(engine.session(), &SessionState::new());
    }
}
