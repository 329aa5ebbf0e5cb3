//! The tiny game-state container consumed by the DP core (spec §6).
//!
//! This is deliberately thin: a `board`, the currently-drawn `figure`, and
//! a round counter, plus the handful of operations a caller needs to drive
//! play. None of this is performance-critical — the DP core never touches
//! it, it exists so a CLI or test harness has something to simulate with.

mod display;

use rand::Rng;

use crate::board::{action, piece::NUM_PIECES, Board};
use crate::error::SolverError;

/// One round of the placement game: the board, the figure on offer, and
/// how many rounds have elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    figure: u8,
    round: u32,
}

impl GameState {
    /// A fresh game: empty board, figure `0`, round `0`. Callers typically
    /// call [`GameState::set_random_figure`] immediately after.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            figure: 0,
            round: 0,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn figure(&self) -> u8 {
        self.figure
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether `action` (a placement offset `0..24`, or [`action::SKIP`])
    /// is legal for the current board and figure.
    pub fn legal(&self, candidate: u8) -> bool {
        action::is_legal(self.board.bits(), &crate::board::PIECES[self.figure as usize], candidate)
    }

    /// Applies `action`, OR-ing the figure's footprint into the board (or
    /// doing nothing to the board, for [`action::SKIP`]), and advances the
    /// round counter. Rejects an illegal action rather than silently
    /// clamping it — the legality predicate is the single source of truth
    /// (spec §7).
    pub fn perform(&mut self, candidate: u8) -> Result<(), SolverError> {
        if !self.legal(candidate) {
            return Err(SolverError::IllegalAction {
                board: self.board.bits(),
                piece: self.figure,
                action: candidate,
            });
        }
        if candidate != action::SKIP {
            let (x, y) = action::offsets(candidate);
            let mask = crate::board::PIECES[self.figure as usize]
                .footprint(x, y)
                .expect("legal() already checked the offset is in range");
            self.board = self.board.with_filled(mask);
        }
        self.round += 1;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_terminal()
    }

    /// Draws the next figure uniformly from the six pieces.
    pub fn set_random_figure(&mut self, rng: &mut impl Rng) {
        self.figure = rng.gen_range(0..NUM_PIECES as u8);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn perform_skip_leaves_board_unchanged_but_advances_round() {
        let mut state = GameState::new();
        state.perform(action::SKIP).unwrap();
        assert_eq!(state.board(), Board::default());
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn perform_placement_fills_the_footprint() {
        let mut state = GameState::new();
        state.perform(action::encode(0, 0)).unwrap();
        assert!(state.board().contains(crate::board::PIECES[0].footprint(0, 0).unwrap()));
    }

    #[test]
    fn illegal_action_is_rejected_without_mutating_state() {
        let mut state = GameState::new();
        state.perform(action::encode(0, 0)).unwrap();
        let before = state.board();
        // Placing the same single cell again overlaps the one just filled.
        let err = state.perform(action::encode(0, 0)).unwrap_err();
        assert!(matches!(err, SolverError::IllegalAction { .. }));
        assert_eq!(state.board(), before);
    }

    #[test]
    fn is_finished_only_at_terminal_board() {
        let mut state = GameState::new();
        assert!(!state.is_finished());
        state.board = Board::new(crate::board::TERMINAL);
        assert!(state.is_finished());
    }

    #[test]
    fn set_random_figure_is_deterministic_under_a_seeded_rng() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut state = GameState::new();
        state.set_random_figure(&mut rng);
        assert!((state.figure() as usize) < NUM_PIECES);
    }
}
