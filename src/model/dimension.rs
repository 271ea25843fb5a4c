use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::error::GameError;

/// The four governance metrics tracked through a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Time,
    Cost,
    Trust,
    Impact,
}

impl Dimension {
    /// Display order used everywhere (scoreboard, results, CSV columns).
    pub const ALL: [Dimension; 4] = [
        Dimension::Time,
        Dimension::Cost,
        Dimension::Trust,
        Dimension::Impact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Time => "time",
            Dimension::Cost => "cost",
            Dimension::Trust => "trust",
            Dimension::Impact => "impact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Time => "Time",
            Dimension::Cost => "Cost Risk",
            Dimension::Trust => "Trust",
            Dimension::Impact => "Business Impact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dimension::Time => "acceleration or delay (repairs / rework)",
            Dimension::Cost => "financial exposure, compliance, ROI",
            Dimension::Trust => "explainability, adoption, compliance",
            Dimension::Impact => "ability to scale and transform",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownDimension(s.to_string()))
    }
}

/// One integer per dimension.
///
/// Used both for the fixed deltas of a choice and for the running
/// totals of an attempt, so a choice can never leave a dimension out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub time: i32,
    pub cost: i32,
    pub trust: i32,
    pub impact: i32,
}

impl Scores {
    pub const ZERO: Scores = Scores::new(0, 0, 0, 0);

    pub const fn new(time: i32, cost: i32, trust: i32, impact: i32) -> Self {
        Self { time, cost, trust, impact }
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Time => self.time,
            Dimension::Cost => self.cost,
            Dimension::Trust => self.trust,
            Dimension::Impact => self.impact,
        }
    }

    /// Additive update, the only way running scores change.
    pub fn add(&mut self, deltas: &Scores) {
        self.time += deltas.time;
        self.cost += deltas.cost;
        self.trust += deltas.trust;
        self.impact += deltas.impact;
    }

    pub fn total(&self) -> i32 {
        self.time + self.cost + self.trust + self.impact
    }

    /// Signed per-dimension values, e.g. `Time +2  |  Cost Risk -1  |  ...`
    pub fn signed_summary(&self) -> String {
        Dimension::ALL
            .iter()
            .map(|d| format!("{} {:+}", d.label(), self.get(*d)))
            .collect::<Vec<_>>()
            .join("  |  ")
    }
}
