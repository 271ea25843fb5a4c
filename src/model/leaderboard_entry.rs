use serde::{Deserialize, Serialize};

use crate::model::dimension::Scores;

/// Column order of the leaderboard CSV file.
pub const HEADER: [&str; 8] = [
    "Timestamp", "Name", "Scenario", "Time", "Cost", "Trust", "Impact", "Total",
];

/// One saved result. `total` is computed once at creation and stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Time")]
    pub time: i32,
    #[serde(rename = "Cost")]
    pub cost: i32,
    #[serde(rename = "Trust")]
    pub trust: i32,
    #[serde(rename = "Impact")]
    pub impact: i32,
    #[serde(rename = "Total")]
    pub total: i32,
}

impl LeaderboardEntry {
    pub fn new(timestamp: String, name: &str, scenario: &str, scores: Scores) -> Self {
        Self {
            timestamp,
            name: name.trim().to_string(),
            scenario: scenario.to_string(),
            time: scores.time,
            cost: scores.cost,
            trust: scores.trust,
            impact: scores.impact,
            total: scores.total(),
        }
    }

    #[cfg(test)]
    pub fn scores(&self) -> Scores {
        Scores::new(self.time, self.cost, self.trust, self.impact)
    }
}
