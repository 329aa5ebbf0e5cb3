//! The solver contract consumed by callers (spec §6): `solve` and
//! `distances`, backed by a read-only, shared [`DpTable`].
//!
//! [`Solver`] is an explicit value a caller constructs once and shares by
//! reference — there is no ambient singleton (spec §9's "Global singleton"
//! note: the source exposes this as process-wide lazily-initialized state;
//! a systems language models that as a value the caller owns instead).

use std::path::Path;

use crate::board::{action::SKIP, piece::NUM_PIECES};
use crate::cache;
use crate::dp::{self, DpTable};
use crate::error::SolverError;

/// A fully-computed DP table, ready for read-only lookups.
pub struct Solver {
    table: DpTable,
}

impl Solver {
    /// Loads a previously-saved table from `path`, or computes it from
    /// scratch and saves it there if the cache is absent or corrupt (spec
    /// §4.5, §7: `CacheMiss` is transparent, `CacheCorrupt` is logged and
    /// treated as a miss).
    pub fn load_or_compute(path: &Path) -> Result<Self, SolverError> {
        match cache::load(path) {
            Ok(Some(table)) => return Ok(Self { table }),
            Ok(None) => {}
            Err(err) => {
                log::warn!("cache at {path:?} is corrupt, recomputing: {err}");
                let _ = std::fs::remove_file(path);
            }
        }

        let table = dp::compute()?;
        if let Err(err) = cache::save(path, &table) {
            log::warn!("failed to persist cache at {path:?}: {err}");
        }
        Ok(Self { table })
    }

    /// Computes a fresh table without consulting or writing any cache.
    pub fn compute() -> Result<Self, SolverError> {
        Ok(Self { table: dp::compute()? })
    }

    /// The optimal action for `(board, piece)`: a placement offset `0..24`
    /// or [`SKIP`].
    pub fn solve(&self, board: u32, piece: u8) -> u8 {
        self.table.act(DpTable::index(board, piece))
    }

    /// The six `(action, expected_rounds)` pairs for `board`, in
    /// piece-index order.
    pub fn distances(&self, board: u32) -> [(u8, f32); NUM_PIECES] {
        let mut out = [(SKIP, f32::INFINITY); NUM_PIECES];
        for (piece, slot) in out.iter_mut().enumerate() {
            let idx = DpTable::index(board, piece as u8);
            *slot = (self.table.act(idx), self.table.dst(idx));
        }
        out
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        cache::save(path, &self.table)
    }
}
