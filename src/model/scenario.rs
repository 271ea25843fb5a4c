use crate::model::dimension::Scores;

/// A selectable option at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub deltas: Scores,
}

/// One decision point. Always has at least one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub prompt: &'static str,
    pub choices: &'static [Choice],
}

/// A named storyline. Always has at least one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub steps: &'static [Step],
}

impl Scenario {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&'static Step> {
        self.steps.get(index)
    }
}

pub const fn choice(label: &'static str, time: i32, cost: i32, trust: i32, impact: i32) -> Choice {
    Choice {
        label,
        deltas: Scores::new(time, cost, trust, impact),
    }
}
