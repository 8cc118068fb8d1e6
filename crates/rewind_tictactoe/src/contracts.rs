//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules;
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the raw index names a square.
pub struct PositionOnBoard;

impl PositionOnBoard {
    /// Resolves `index` to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the displayed board.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: The displayed board has no winner.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Checks the displayed board.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match rules::find_winning_line(state.board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Composite precondition: the board is still open and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        NoWinnerYet::check(state)?;
        SquareIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Displayed board has no winner
/// - Square must be empty
///
/// Postconditions:
/// - History invariants hold
/// - History was cut at the old step and grew by one entry
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected = before.step() + 2;
        if after.history().len() != expected || after.step() != before.step() + 1 {
            warn!(
                expected,
                len = after.history().len(),
                step = after.step(),
                "History did not branch at the previous step"
            );
            return Err(MoveError::InvariantViolation(
                "History did not branch at the previous step".to_string(),
            ));
        }

        Ok(())
    }
}
