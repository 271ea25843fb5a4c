use tracing::{debug, info};

use crate::engine::catalog;
use crate::model::dimension::Scores;
use crate::model::error::GameError;
use crate::model::leaderboard_entry::LeaderboardEntry;
use crate::model::session::{Page, SessionState};

/// Intro -> Game. Starts a fresh attempt of `name`.
pub fn select_scenario(state: &mut SessionState, name: &str) -> Result<(), GameError> {
    expect_page(state, Page::Intro, "select scenario")?;
    let scenario = catalog::find(name)?;

    state.page = Page::Game;
    state.scenario = Some(scenario);
    state.step = 0;
    state.scores = Scores::ZERO;

    info!(scenario = scenario.name, "scenario started");
    Ok(())
}

/// Applies the deltas of one choice and advances. Moves to Results after the last step.
///
/// `step_index` must be the current step, so a stale click from an earlier
/// render cannot be applied twice.
pub fn choose_option(
    state: &mut SessionState,
    step_index: usize,
    choice_index: usize,
) -> Result<(), GameError> {
    expect_page(state, Page::Game, "choose option")?;
    let scenario = state.scenario.ok_or(GameError::NoActiveScenario)?;

    if step_index != state.step {
        return Err(GameError::StaleStep {
            given: step_index,
            current: state.step,
        });
    }
    let step = scenario.step(step_index).ok_or(GameError::StaleStep {
        given: step_index,
        current: state.step,
    })?;
    let choice = step.choices.get(choice_index).ok_or(GameError::ChoiceOutOfRange {
        given: choice_index,
        available: step.choices.len(),
    })?;

    state.scores.add(&choice.deltas);
    state.step += 1;
    debug!(step = step_index, choice = choice_index, scores = ?state.scores, "choice applied");

    if state.step >= scenario.step_count() {
        state.page = Page::Results;
        info!(scenario = scenario.name, total = state.scores.total(), "scenario completed");
    }
    Ok(())
}

/// Back to a blank Intro page. Safe to call at any time.
pub fn restart(state: &mut SessionState) {
    if state.scenario.is_none() {
        debug!("restart without an active attempt");
    }
    state.reset();
}

pub fn view_leaderboard(state: &mut SessionState) {
    state.page = Page::Leaderboard;
}

/// Leaderboard -> Intro. Drops any unfinished attempt.
pub fn back(state: &mut SessionState) -> Result<(), GameError> {
    expect_page(state, Page::Leaderboard, "back")?;
    state.reset();
    Ok(())
}

/// Builds the entry for the finished attempt. Does not touch the session.
pub fn result_entry(
    state: &SessionState,
    name: &str,
    timestamp: String,
) -> Result<LeaderboardEntry, GameError> {
    expect_page(state, Page::Results, "save")?;
    let scenario = state.scenario.ok_or(GameError::NoActiveScenario)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }

    Ok(LeaderboardEntry::new(timestamp, name, scenario.name, state.scores))
}

fn expect_page(state: &SessionState, page: Page, action: &'static str) -> Result<(), GameError> {
    if state.page == page {
        Ok(())
    } else {
        Err(GameError::WrongPage {
            action,
            page: state.page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PO: &str = "AI Purchase Order Assistant";

    fn started(name: &str) -> SessionState {
        let mut state = SessionState::new();
        select_scenario(&mut state, name).unwrap();
        state
    }

    #[test]
    fn select_resets_attempt() {
        let state = started(PO);
        assert_eq!(state.page, Page::Game);
        assert_eq!(state.scenario.unwrap().name, PO);
        assert_eq!(state.step, 0);
        assert_eq!(state.scores, Scores::ZERO);
    }

    #[test]
    fn select_unknown_scenario_is_rejected() {
        let mut state = SessionState::new();
        assert_eq!(
            select_scenario(&mut state, "Nope"),
            Err(GameError::UnknownScenario("Nope".into()))
        );
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn select_outside_intro_is_rejected() {
        let mut state = started(PO);
        choose_option(&mut state, 0, 1).unwrap();
        let before = state.clone();
        assert!(matches!(
            select_scenario(&mut state, "GenAI Chatbot for Customers"),
            Err(GameError::WrongPage { page: Page::Game, .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn final_scores_are_sum_of_selected_deltas() {
        for scenario in catalog::all() {
            for pick in 0..3 {
                let mut state = started(scenario.name);
                let mut expected = Scores::ZERO;
                for (i, step) in scenario.steps.iter().enumerate() {
                    let c = (pick + i) % step.choices.len();
                    expected.add(&step.choices[c].deltas);
                    choose_option(&mut state, i, c).unwrap();
                }
                assert_eq!(state.scores, expected);
                assert_eq!(state.step, scenario.step_count());
                assert_eq!(state.page, Page::Results);
            }
        }
    }

    #[test]
    fn purchase_order_first_option_everywhere() {
        let mut state = started(PO);
        for i in 0..5 {
            choose_option(&mut state, i, 0).unwrap();
        }
        assert_eq!(state.scores, Scores::new(6, 3, -8, -5));
        assert_eq!(state.scores.total(), -4);
    }

    #[test]
    fn stale_or_out_of_range_choices_do_not_mutate() {
        let mut state = started(PO);
        choose_option(&mut state, 0, 2).unwrap();
        let before = state.clone();

        assert_eq!(
            choose_option(&mut state, 0, 0),
            Err(GameError::StaleStep { given: 0, current: 1 })
        );
        assert_eq!(
            choose_option(&mut state, 2, 0),
            Err(GameError::StaleStep { given: 2, current: 1 })
        );
        assert_eq!(
            choose_option(&mut state, 1, 3),
            Err(GameError::ChoiceOutOfRange { given: 3, available: 3 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn no_choices_after_completion() {
        let mut state = started(PO);
        for i in 0..5 {
            choose_option(&mut state, i, 1).unwrap();
        }
        let before = state.clone();
        assert!(matches!(
            choose_option(&mut state, 5, 0),
            Err(GameError::WrongPage { page: Page::Results, .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn choose_on_intro_is_rejected() {
        let mut state = SessionState::new();
        assert!(choose_option(&mut state, 0, 0).is_err());
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn restart_always_returns_to_blank_intro() {
        let mut fresh = SessionState::new();
        restart(&mut fresh);
        assert_eq!(fresh, SessionState::new());

        let mut mid = started(PO);
        choose_option(&mut mid, 0, 0).unwrap();
        restart(&mut mid);
        assert_eq!(mid, SessionState::new());

        let mut done = started(PO);
        for i in 0..5 {
            choose_option(&mut done, i, 2).unwrap();
        }
        view_leaderboard(&mut done);
        restart(&mut done);
        assert_eq!(done, SessionState::new());
    }

    #[test]
    fn leaderboard_navigation() {
        let mut state = started(PO);
        assert!(back(&mut state).is_err());

        view_leaderboard(&mut state);
        assert_eq!(state.page, Page::Leaderboard);
        back(&mut state).unwrap();
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn result_entry_requires_completion_and_name() {
        let mut state = started(PO);
        assert!(matches!(
            result_entry(&state, "ann", "t".into()),
            Err(GameError::WrongPage { .. })
        ));

        for i in 0..5 {
            choose_option(&mut state, i, 0).unwrap();
        }
        assert_eq!(result_entry(&state, "   ", "t".into()), Err(GameError::EmptyName));

        let entry = result_entry(&state, "  Ann ", "2025-01-01T00:00:00.000000".into()).unwrap();
        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.scenario, PO);
        assert_eq!((entry.time, entry.cost, entry.trust, entry.impact), (6, 3, -8, -5));
        assert_eq!(entry.total, -4);
        assert_eq!(state.page, Page::Results);
    }

    #[test]
    fn progress_tracks_steps() {
        let mut state = started(PO);
        let p = state.progress().unwrap();
        assert_eq!((p.step_number, p.total, p.remaining), (1, 5, 4));
        assert_eq!(p.fraction, 0.0);

        for i in 0..4 {
            choose_option(&mut state, i, 0).unwrap();
        }
        let p = state.progress().unwrap();
        assert_eq!((p.step_number, p.remaining), (5, 0));
        assert!(p.fraction < 1.0);

        choose_option(&mut state, 4, 0).unwrap();
        let p = state.progress().unwrap();
        assert_eq!(p.fraction, 1.0);
        assert_eq!(p.remaining, 0);

        assert!(SessionState::new().progress().is_none());
    }
}
