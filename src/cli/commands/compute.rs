//! Compute command - runs the DP from scratch and writes the cache file.

use std::path::PathBuf;

use structopt::StructOpt;

use tessera_solver::cache::DEFAULT_CACHE_FILE;
use tessera_solver::solver::Solver;

use super::Command;

#[derive(StructOpt)]
pub struct ComputeArgs {
    #[structopt(long, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,
}

impl Command for ComputeArgs {
    fn execute(self) {
        match Solver::compute() {
            Ok(solver) => {
                if let Err(err) = solver.save(&self.cache) {
                    eprintln!("computed the table but failed to save it: {err}");
                    std::process::exit(1);
                }
                println!("wrote {}", self.cache.display());
            }
            Err(err) => {
                eprintln!("failed to compute the table: {err}");
                std::process::exit(1);
            }
        }
    }
}
