//! The dense dynamic-programming table: expected rounds-to-completion
//! and the chosen action, for every (board, piece) pair.

use std::sync::atomic::{AtomicU32, AtomicU8, AtomicU64, Ordering};

use crate::board::{action::SKIP, piece::NUM_PIECES, NUM_BOARDS};
use crate::error::SolverError;

/// +inf, stored as the bit pattern of `f32::INFINITY` in the atomic
/// distance array until a finite value is written.
const INF_BITS: u32 = 0x7F80_0000;

/// Two dense arrays of length `2^24 * 6`, plus the `2^24`-bit visited
/// set used only during traversal. Indexed by `board * 6 + piece`.
pub struct DpTable {
    dst: Vec<AtomicU32>,
    act: Vec<AtomicU8>,
    visited: Vec<AtomicU64>,
}

impl DpTable {
    pub const ROWS: usize = NUM_BOARDS * NUM_PIECES;

    pub fn new() -> Self {
        let mut dst = Vec::with_capacity(Self::ROWS);
        dst.resize_with(Self::ROWS, || AtomicU32::new(INF_BITS));
        let mut act = Vec::with_capacity(Self::ROWS);
        act.resize_with(Self::ROWS, || AtomicU8::new(SKIP));
        let visited_words = (NUM_BOARDS + 63) / 64;
        let mut visited = Vec::with_capacity(visited_words);
        visited.resize_with(visited_words, || AtomicU64::new(0));
        Self { dst, act, visited }
    }

    /// Like [`DpTable::new`], but reports allocation failure as
    /// [`SolverError::OutOfMemory`] instead of aborting the process. This is
    /// the constructor the real traversal driver uses, since the dense
    /// arrays are sized ~0.5 GB and a caller may want to report the failure
    /// rather than crash (spec §7: `OutOfMemory` is fatal but surfaced).
    pub fn try_new() -> Result<Self, SolverError> {
        let mut dst = Vec::new();
        dst.try_reserve_exact(Self::ROWS)
            .map_err(|_| SolverError::OutOfMemory { bytes: Self::ROWS * 4 })?;
        dst.resize_with(Self::ROWS, || AtomicU32::new(INF_BITS));

        let mut act = Vec::new();
        act.try_reserve_exact(Self::ROWS)
            .map_err(|_| SolverError::OutOfMemory { bytes: Self::ROWS })?;
        act.resize_with(Self::ROWS, || AtomicU8::new(SKIP));

        let visited_words = (NUM_BOARDS + 63) / 64;
        let mut visited = Vec::new();
        visited
            .try_reserve_exact(visited_words)
            .map_err(|_| SolverError::OutOfMemory { bytes: visited_words * 8 })?;
        visited.resize_with(visited_words, || AtomicU64::new(0));

        Ok(Self { dst, act, visited })
    }

    #[inline]
    pub fn index(board: u32, piece: u8) -> usize {
        board as usize * NUM_PIECES + piece as usize
    }

    #[inline]
    pub fn dst(&self, idx: usize) -> f32 {
        f32::from_bits(self.dst[idx].load(Ordering::Relaxed))
    }

    #[inline]
    pub fn act(&self, idx: usize) -> u8 {
        self.act[idx].load(Ordering::Relaxed)
    }

    /// Unconditionally sets a row (used only to seed the terminal board).
    pub fn set(&self, idx: usize, dst: f32, act: u8) {
        self.dst[idx].store(dst.to_bits(), Ordering::Relaxed);
        self.act[idx].store(act, Ordering::Relaxed);
    }

    /// Lowers `dst[idx]` to `candidate` and sets `act[idx] := action` iff
    /// `candidate` strictly improves on the stored value. Ties keep the
    /// first writer's action, per spec. Safe to call concurrently for the
    /// same `idx` from different boards at the same height.
    pub fn try_lower(&self, idx: usize, candidate: f32, action: u8) -> bool {
        let mut current = self.dst[idx].load(Ordering::Relaxed);
        loop {
            if candidate >= f32::from_bits(current) {
                return false;
            }
            match self.dst[idx].compare_exchange_weak(
                current,
                candidate.to_bits(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    self.act[idx].store(action, Ordering::Relaxed);
                    return true;
                }
                Err(observed) => current = observed,
            }
        }
    }

    /// Marks `board` visited, returning `true` iff this call was the one
    /// that set the bit (i.e. the board was not visited before).
    pub fn mark_visited(&self, board: u32) -> bool {
        let word = board as usize / 64;
        let bit = 1u64 << (board % 64);
        let previous = self.visited[word].fetch_or(bit, Ordering::Relaxed);
        previous & bit == 0
    }

    pub fn is_visited(&self, board: u32) -> bool {
        let word = board as usize / 64;
        let bit = 1u64 << (board % 64);
        self.visited[word].load(Ordering::Relaxed) & bit != 0
    }

    /// Snapshot of the distance array, for serialization.
    pub fn dst_snapshot(&self) -> Vec<f32> {
        self.dst
            .iter()
            .map(|a| f32::from_bits(a.load(Ordering::Relaxed)))
            .collect()
    }

    /// Snapshot of the action array, for serialization.
    pub fn act_snapshot(&self) -> Vec<u8> {
        self.act.iter().map(|a| a.load(Ordering::Relaxed)).collect()
    }

    /// Builds a table directly from previously-saved arrays (cache load).
    pub fn from_arrays(dst: Vec<f32>, act: Vec<u8>) -> Self {
        debug_assert_eq!(dst.len(), Self::ROWS);
        debug_assert_eq!(act.len(), Self::ROWS);
        let dst = dst.into_iter().map(|v| AtomicU32::new(v.to_bits())).collect();
        let act = act.into_iter().map(AtomicU8::new).collect();
        let visited_words = (NUM_BOARDS + 63) / 64;
        let mut visited = Vec::with_capacity(visited_words);
        visited.resize_with(visited_words, || AtomicU64::new(0));
        Self { dst, act, visited }
    }
}

impl Default for DpTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_rows_are_infinite_and_skip() {
        let table = DpTable::new();
        let idx = DpTable::index(0, 0);
        assert_eq!(table.dst(idx), f32::INFINITY);
        assert_eq!(table.act(idx), SKIP);
    }

    #[test]
    fn try_lower_only_improves() {
        let table = DpTable::new();
        let idx = DpTable::index(5, 2);
        assert!(table.try_lower(idx, 10.0, 3));
        assert!(!table.try_lower(idx, 10.0, 4));
        assert!(table.try_lower(idx, 9.5, 4));
        assert_eq!(table.dst(idx), 9.5);
        assert_eq!(table.act(idx), 4);
    }

    #[test]
    fn mark_visited_is_one_shot() {
        let table = DpTable::new();
        assert!(table.mark_visited(100));
        assert!(!table.mark_visited(100));
        assert!(table.is_visited(100));
    }
}
