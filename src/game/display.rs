use std::fmt;

use super::GameState;
use crate::board::action;

const FILLED_CELL: char = '#';
const LEGAL_CELL: char = 'o';
const ILLEGAL_CELL: char = '.';

/// Diagnostic rendering: the board with filled cells marked, empty cells
/// marked by whether the current figure could legally go there, and the
/// figure's own shape alongside it. Grounded in the original `Jigsaw`'s
/// `__repr__` (filled/legal/illegal grid plus a figure preview) and in
/// [`crate::board::Board`]'s `Display` impl; purely diagnostic, it does not
/// participate in solver semantics.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "round {}, figure {}", self.round, self.figure)?;
        let figure = &crate::board::PIECES[self.figure as usize];
        for row in 0..4 {
            let mut board_cells = String::with_capacity(6);
            let mut figure_cells = String::with_capacity(6);
            for col in 0..6 {
                let bit = 23 - (col * 4 + row);
                let filled = self.board.bits() & (1 << bit) != 0;
                board_cells.push(if filled {
                    FILLED_CELL
                } else if self.legal(action::encode(col as u8, row as u8)) {
                    LEGAL_CELL
                } else {
                    ILLEGAL_CELL
                });
                let figure_bit = figure.mask & (1 << bit) != 0;
                figure_cells.push(if figure_bit { FILLED_CELL } else { ' ' });
            }
            writeln!(f, "{board_cells}  {figure_cells}")?;
        }
        Ok(())
    }
}
