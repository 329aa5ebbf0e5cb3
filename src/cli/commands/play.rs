//! Play command - simulate a full game under the computed policy.

use std::path::PathBuf;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use tessera_solver::board::SKIP;
use tessera_solver::cache::DEFAULT_CACHE_FILE;
use tessera_solver::game::GameState;

use super::util::load_solver;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(long, default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let solver = load_solver(&self.cache);
        // No `seed` given: derive one from the clock, the same way the
        // build script seeds its own `StdRng` (this crate doesn't enable
        // rand's `getrandom` feature, so `from_entropy` isn't available).
        let seed = self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system clock is before the unix epoch")
                .as_nanos() as u64
        });
        let mut rng = StdRng::seed_from_u64(seed);

        let mut state = GameState::new();
        state.set_random_figure(&mut rng);
        println!("{state}");

        while !state.is_finished() {
            let action = solver.solve(state.board().bits(), state.figure());
            state.perform(action).expect("solver only returns legal actions");
            let label = if action == SKIP { "skip".to_string() } else { action.to_string() };
            println!("-> {label}");

            if state.is_finished() {
                break;
            }
            state.set_random_figure(&mut rng);
            println!("{state}");
        }

        println!("finished in {} rounds", state.round());
    }
}
