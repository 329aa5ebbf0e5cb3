//! Height-stratified traversal driver.
//!
//! Boards are finalized in decreasing order of population: the terminal
//! board first, then every board one placement away from it, and so on
//! down to the empty board. Processing a board only after every board
//! reachable from its row at a strictly higher population has already
//! been finalized is what lets [`kernel::process`] compute each row
//! exactly once (spec §4.4's monotone-population invariant).
//!
//! The source this was distilled from walks the equivalent levels in the
//! opposite order (increasing "slots filled since terminal"); either
//! convention satisfies the same invariant. This driver uses decreasing
//! population because it keeps the invariant textually obvious.

use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;

use crate::board::{Board, CELLS, TERMINAL};
use crate::error::SolverError;

use super::kernel;
use super::table::DpTable;

/// Below this many boards, a height level is processed serially: spinning
/// up rayon's work-stealing pool doesn't pay for itself on a handful of
/// states. The source solver uses the same threshold.
const SERIAL_THRESHOLD: usize = 1000;

/// Runs the full dynamic program from scratch and returns the completed
/// table. Every reachable `(board, piece)` row is finalized; unreachable
/// rows are left at their initial `(+inf, SKIP)` sentinel.
pub fn compute() -> Result<DpTable, SolverError> {
    let table = DpTable::try_new()?;

    for piece in 0..crate::board::NUM_PIECES {
        table.set(DpTable::index(TERMINAL, piece as u8), 0.0, action_skip());
    }
    table.mark_visited(TERMINAL);

    let mut stacks: Vec<Mutex<Vec<u32>>> =
        (0..=CELLS).map(|_| Mutex::new(Vec::new())).collect();
    stacks[CELLS as usize].lock().unwrap().push(TERMINAL);

    for height in (0..=CELLS).rev() {
        let boards = std::mem::take(&mut *stacks[height as usize].lock().unwrap());
        if boards.is_empty() {
            continue;
        }

        let started = Instant::now();
        if boards.len() > SERIAL_THRESHOLD {
            boards.par_iter().for_each(|&bits| {
                kernel::process(&table, Board::new(bits), height, &stacks);
            });
        } else {
            for &bits in &boards {
                kernel::process(&table, Board::new(bits), height, &stacks);
            }
        }
        log::info!(
            "height {:>2}/{}: finalized {} boards in {:?}",
            height,
            CELLS,
            boards.len(),
            started.elapsed()
        );
    }

    Ok(table)
}

#[inline]
fn action_skip() -> u8 {
    crate::board::SKIP
}
