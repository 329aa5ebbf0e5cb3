//! Distances command - the six (action, expected-rounds) pairs for a board.

use std::path::PathBuf;

use structopt::StructOpt;

use tessera_solver::board::SKIP;
use tessera_solver::cache::DEFAULT_CACHE_FILE;

use super::util::{load_solver, BoardArg};
use super::Command;

#[derive(StructOpt)]
pub struct DistancesArgs {
    #[structopt(long)]
    pub board: BoardArg,
    #[structopt(long, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,
}

impl Command for DistancesArgs {
    fn execute(self) {
        let solver = load_solver(&self.cache);
        for (piece, (action, distance)) in solver.distances(self.board.0).into_iter().enumerate() {
            let action_label = if action == SKIP {
                "skip".to_string()
            } else {
                action.to_string()
            };
            println!("piece {piece}: action={action_label} distance={distance:.4}");
        }
    }
}
