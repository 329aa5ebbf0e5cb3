//! Per-state update kernel: the heart of the dynamic program.
//!
//! Given a board `B` whose placement successors have all already lowered
//! `dst[B*6+p]` for every piece `p`, this module folds in the skip action
//! (a minimum over subsets, not a plain average — see [`skip_value`]) and
//! then propagates `B`'s finalized row backwards onto every predecessor
//! board reachable by placing one piece to reach `B`.

use std::sync::Mutex;

use crate::board::{action, piece::PIECES, Board};
use crate::subset;

use super::table::DpTable;

/// The minimum over non-empty subsets `S` of `{0..6}` of
/// `(|S| + sum_{p in S} dsts[p]) / |S|`.
///
/// This is the value of the optimal stationary skip policy: keep a draw
/// that lands in `S`, re-skip one that doesn't, repeat. A plain average
/// over all six pieces is wrong whenever skipping again is sometimes
/// better than placing.
pub fn skip_value(dsts: &[f32; PIECES.len()]) -> f32 {
    let mut best = f32::INFINITY;
    for subset in subset::non_empty() {
        let sum: f32 = subset.members.iter().map(|&p| dsts[p as usize]).sum();
        let candidate = (subset.size as f32 + sum) / subset.size as f32;
        if candidate < best {
            best = candidate;
        }
    }
    best
}

/// Finalizes board `B`'s row (folds in the skip action) and propagates
/// the result backwards onto every predecessor. `height` is `B`'s
/// population; `next_stacks[h]` collects boards newly discovered at
/// population `h < height`.
pub fn process(table: &DpTable, board: Board, height: u32, next_stacks: &[Mutex<Vec<u32>>]) {
    finalize_skip(table, board);
    propagate(table, board, height, next_stacks);
}

fn finalize_skip(table: &DpTable, board: Board) {
    let base = DpTable::index(board.bits(), 0);
    let mut dsts = [0.0f32; PIECES.len()];
    for (p, slot) in dsts.iter_mut().enumerate() {
        *slot = table.dst(base + p);
    }

    let skip_val = skip_value(&dsts);
    for (p, &current) in dsts.iter().enumerate() {
        if current > skip_val {
            table.set(base + p, skip_val, action::SKIP);
        }
    }
}

fn propagate(table: &DpTable, board: Board, height: u32, next_stacks: &[Mutex<Vec<u32>>]) {
    let base = DpTable::index(board.bits(), 0);
    let avg: f32 = (0..PIECES.len()).map(|p| table.dst(base + p)).sum::<f32>() / PIECES.len() as f32;
    let candidate_dst = 1.0 + avg;

    for (piece_idx, piece) in PIECES.iter().enumerate() {
        for x in 0..=piece.max_x {
            for y in 0..=piece.max_y {
                let mask = piece.mask >> (x * 4 + y);
                if !board.contains(mask) {
                    continue;
                }
                let predecessor = board.with_cleared(mask);
                let action = action::encode(x, y);
                let idx = DpTable::index(predecessor.bits(), piece_idx as u8);

                table.try_lower(idx, candidate_dst, action);

                if table.mark_visited(predecessor.bits()) {
                    next_stacks[height as usize - piece.cells as usize]
                        .lock()
                        .expect("next-stack mutex poisoned")
                        .push(predecessor.bits());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_value_of_equal_distances_is_that_distance() {
        let dsts = [2.0; 6];
        // Every subset's induced average collapses to the common value,
        // since (|S| + |S|*2.0) / |S| == 1.0 + 2.0.
        assert!((skip_value(&dsts) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn skip_value_prefers_the_best_singleton_when_it_dominates() {
        let mut dsts = [100.0; 6];
        dsts[2] = 0.0;
        // Subset {2} alone gives (1 + 0) / 1 = 1.0, which beats any
        // subset diluted by the other five pieces' bad distances.
        assert!((skip_value(&dsts) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn finalize_skip_overrides_dominated_placements() {
        let table = DpTable::new();
        let board = Board::new(0);
        let base = DpTable::index(board.bits(), 0);
        // Piece 0's placement is artificially bad; pieces 1..5 are all
        // good. Skipping piece 0's draw and re-drawing from {1..5} gives
        // (5 + 5*1.0) / 5 == 2.0, which beats placing piece 0 at 50.0 but
        // does not disturb pieces 1..5's own (better) distances.
        table.set(base, 50.0, 3);
        for p in 1..6 {
            table.set(base + p, 1.0, action::SKIP);
        }
        finalize_skip(&table, board);
        assert!((table.dst(base) - 2.0).abs() < 1e-5);
        assert_eq!(table.act(base), action::SKIP);
        for p in 1..6 {
            assert!((table.dst(base + p) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn process_on_terminal_board_propagates_to_every_predecessor() {
        let table = DpTable::new();
        let terminal = Board::new(crate::board::TERMINAL);
        for p in 0..PIECES.len() {
            table.set(DpTable::index(terminal.bits(), 0) + p, 0.0, action::SKIP);
        }
        let height = crate::board::CELLS;
        let stacks: Vec<Mutex<Vec<u32>>> =
            (0..=height).map(|_| Mutex::new(Vec::new())).collect();

        process(&table, terminal, height, &stacks);

        // Every (piece, offset) fits wholly within the terminal board
        // (trivially true: it's entirely filled), so each one must have
        // lowered its predecessor's row off the +inf sentinel and pushed
        // that predecessor onto the stack for `height - piece.cells`
        // (several pieces share a cell count and so share a stack; a given
        // predecessor board is pushed only once, by whichever piece's
        // placement discovers it first).
        for (piece_idx, piece) in PIECES.iter().enumerate() {
            for x in 0..=piece.max_x {
                for y in 0..=piece.max_y {
                    let mask = piece.footprint(x, y).unwrap();
                    let predecessor = terminal.with_cleared(mask);
                    let idx = DpTable::index(predecessor.bits(), piece_idx as u8);

                    assert!(
                        table.dst(idx).is_finite(),
                        "piece {piece_idx} offset ({x},{y}) never propagated to its predecessor"
                    );
                    assert_eq!(table.act(idx), action::encode(x, y));

                    let lower_stack = &stacks[(height - piece.cells as u32) as usize];
                    assert!(
                        lower_stack.lock().unwrap().contains(&predecessor.bits()),
                        "predecessor of piece {piece_idx} offset ({x},{y}) was never enqueued"
                    );
                }
            }
        }
    }
}
