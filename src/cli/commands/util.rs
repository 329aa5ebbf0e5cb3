//! Shared utilities for CLI commands.

use std::path::PathBuf;
use std::str::FromStr;

use tessera_solver::solver::Solver;

/// A board literal on the command line: `0x` prefixed hex or plain decimal.
#[derive(Clone, Copy, Debug)]
pub struct BoardArg(pub u32);

impl FromStr for BoardArg {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16)?,
            None => s.parse()?,
        };
        Ok(BoardArg(bits))
    }
}

/// Loads the solver from `path` (computing and caching it if absent),
/// exiting the process with a message on failure. CLI commands are
/// short-lived processes; there is no caller left to hand a `Result` back
/// to once `main` has returned, so this is the one place the crate accepts
/// a hard exit.
pub(crate) fn load_solver(path: &PathBuf) -> Solver {
    match Solver::load_or_compute(path) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("failed to load or compute the solver: {err}");
            std::process::exit(1);
        }
    }
}
