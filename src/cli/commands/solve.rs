//! Solve command - the optimal action for a single (board, piece) pair.

use std::path::PathBuf;

use structopt::StructOpt;

use tessera_solver::cache::DEFAULT_CACHE_FILE;

use super::util::{load_solver, BoardArg};
use super::Command;

#[derive(StructOpt)]
pub struct SolveArgs {
    #[structopt(long)]
    pub board: BoardArg,
    #[structopt(long)]
    pub piece: u8,
    #[structopt(long, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,
}

impl Command for SolveArgs {
    fn execute(self) {
        let solver = load_solver(&self.cache);
        let action = solver.solve(self.board.0, self.piece);
        println!("{action}");
    }
}
