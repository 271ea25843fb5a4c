use serde::{Deserialize, Serialize};

use crate::model::dimension::{Dimension, Scores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Negative,
    Neutral,
    Positive,
}

impl Band {
    /// `<= -3`, `-2..=2`, `>= 3`. Same for every dimension.
    pub fn of(value: i32) -> Band {
        match value {
            i32::MIN..=-3 => Band::Negative,
            -2..=2 => Band::Neutral,
            _ => Band::Positive,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Band::Negative => "negative",
            Band::Neutral => "neutral",
            Band::Positive => "positive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub dimension: Dimension,
    pub value: i32,
    pub band: Band,
    pub headline: &'static str,
    pub detail: &'static str,
}

pub fn interpret(value: i32, dimension: Dimension) -> Interpretation {
    let band = Band::of(value);
    let (headline, detail) = narrative(dimension, band);

    Interpretation {
        dimension,
        value,
        band,
        headline,
        detail,
    }
}

/// Interpretations for a finished attempt, in display order.
pub fn interpret_all(scores: &Scores) -> [Interpretation; 4] {
    Dimension::ALL.map(|d| interpret(scores.get(d), d))
}

fn narrative(dimension: Dimension, band: Band) -> (&'static str, &'static str) {
    use Band::*;
    use Dimension::*;

    match (dimension, band) {
        (Time, Negative) => (
            "Lost days",
            "Lack of governance duplicated efforts and slowed time-to-market.",
        ),
        (Time, Neutral) => ("Balanced", "Average delivery speed, some rework still required."),
        (Time, Positive) => (
            "Accelerated Delivery",
            "Governance enabled automation and reuse, reducing delays.",
        ),

        (Cost, Negative) => (
            "High Risk",
            "Exposed to fines, overruns, and low ROI due to weak governance.",
        ),
        (Cost, Neutral) => ("Average", "Some costs controlled, but risks remain."),
        (Cost, Positive) => ("Optimized ROI", "Controlled risks, maximized value of AI."),

        (Trust, Negative) => (
            "Low Trust",
            "Stakeholders reject solutions due to black-box models, poor quality, or compliance gaps.",
        ),
        (Trust, Neutral) => (
            "Medium Trust",
            "Some adoption, but doubts remain on transparency or quality.",
        ),
        (Trust, Positive) => (
            "High Trust",
            "Strong explainability, compliance, and reliable data.",
        ),

        (Impact, Negative) => (
            "Blocked Impact",
            "Lack of governance prevented transformation and scaling.",
        ),
        (Impact, Neutral) => (
            "Limited Impact",
            "Success at local/POC level, struggles to scale broadly.",
        ),
        (Impact, Positive) => (
            "Enterprise Impact",
            "Governance choices enabled scaling across domains.",
        ),
    }
}
