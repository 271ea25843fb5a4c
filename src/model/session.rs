use serde::{Deserialize, Serialize};

use crate::model::dimension::Scores;
use crate::model::scenario::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Intro,
    Game,
    Results,
    Leaderboard,
}

/// Per-window session. Lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub page: Page,
    pub scenario: Option<&'static Scenario>,
    pub step: usize,
    pub scores: Scores,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to (Intro, none, 0, zero).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.scenario
            .map(|s| self.step >= s.step_count())
            .unwrap_or(false)
    }

    pub fn progress(&self) -> Option<Progress> {
        let scenario = self.scenario?;
        let total = scenario.step_count();
        let fraction = if self.is_complete() {
            1.0
        } else {
            self.step as f32 / total as f32
        };

        Some(Progress {
            step_number: (self.step + 1).min(total),
            total,
            remaining: total.saturating_sub(self.step + 1),
            fraction,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based step being shown.
    pub step_number: usize,
    pub total: usize,
    pub remaining: usize,
    pub fraction: f32,
}
