use eframe::egui;
use tracing::debug;

use crate::engine::catalog;
use crate::engine::engine::Engine;
use crate::engine::leaderboard::LeaderboardStore;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::session::Page;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

/* =========================
   Status line
   ========================= */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Warning(String),
    Error(String),
}

impl Status {
    fn from_response(resp: EngineResponse) -> Option<Self> {
        match resp {
            EngineResponse::Done => None,
            EngineResponse::Saved(entry) => Some(Status::Info(format!(
                "Score saved to leaderboard for {} ({}).",
                entry.name, entry.total
            ))),
            EngineResponse::Cleared => Some(Status::Info("Leaderboard cleared.".into())),
            EngineResponse::Exported(path) => {
                Some(Status::Info(format!("Leaderboard exported to {}.", path.display())))
            }
            EngineResponse::Rejected(e) => Some(Status::Error(e.to_string())),
            EngineResponse::StorageWarning(w) => Some(Status::Warning(w)),
        }
    }
}

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub selected_scenario: String,
    pub player_name: String,
    pub status: Option<Status>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_scenario: catalog::names().next().unwrap_or_default().to_string(),
            player_name: String::new(),
            status: None,
        }
    }
}

/* =========================
   App
   ========================= */

pub struct QuizApp {
    pub engine: Engine,
    pub ui: UiState,
    pub settings: UiSettings,
}

impl QuizApp {
    pub fn new(settings: UiSettings) -> Self {
        let store = LeaderboardStore::load(&settings_io::leaderboard_path(&settings));
        let engine = Engine::new(store, settings.default_top_n);

        Self {
            engine,
            ui: UiState::default(),
            settings,
        }
    }

    /// Runs one intent to completion and records what the user should see.
    pub fn send_command(&mut self, cmd: EngineCommand) {
        debug!(?cmd, "ui command");
        let starting = matches!(cmd, EngineCommand::SelectScenario(_));
        let top_n = match cmd {
            EngineCommand::TopN(n) => Some(n),
            _ => None,
        };

        let resp = self.engine.handle(cmd);
        if starting && !resp.is_rejected() {
            self.ui.player_name.clear();
        }
        if let Some(n) = top_n.filter(|_| !resp.is_rejected()) {
            if self.settings.remember_top_n(n) {
                self.save_settings();
            }
        }
        self.ui.status = Status::from_response(resp);
    }

    pub fn save_settings(&self) {
        settings_io::save_settings(&self.settings);
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        if self.engine.session().page != Page::Intro {
            draw_left_panel(ctx, self);
        }

        draw_center_panel(ctx, self);
    }
}
