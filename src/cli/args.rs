//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    compute::ComputeArgs, distances::DistancesArgs, play::PlayArgs, solve::SolveArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tessera",
    about = "Solver for the 4x6 random-piece placement game"
)]
pub enum Tessera {
    #[structopt(
        name = "compute",
        about = "Run the dynamic program from scratch and write the cache file (default: `tessera_solver.cache` next to the binary, override with `--cache`)."
    )]
    Compute(ComputeArgs),
    #[structopt(
        name = "solve",
        about = "Print the optimal action for a given `--board` (hex or decimal bitmask) and `--piece` (0-5), loading or computing the cache as needed."
    )]
    Solve(SolveArgs),
    #[structopt(
        name = "distances",
        about = "Print the six (action, expected-rounds) pairs for a given `--board`, one per piece index."
    )]
    Distances(DistancesArgs),
    #[structopt(
        name = "play",
        about = "Simulate a full game under the computed policy, printing each round's board. Draws are seeded with `--seed` for reproducibility."
    )]
    Play(PlayArgs),
}

impl crate::cli::commands::Command for Tessera {
    fn execute(self) {
        match self {
            Self::Compute(cmd) => cmd.execute(),
            Self::Solve(cmd) => cmd.execute(),
            Self::Distances(cmd) => cmd.execute(),
            Self::Play(cmd) => cmd.execute(),
        }
    }
}
