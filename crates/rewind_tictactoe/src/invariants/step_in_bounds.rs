//! Step invariant: the current step names an existing entry.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step references an existing history entry"
    }
}
