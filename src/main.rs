//! Solver binary entry point.

mod cli;

use cli::{commands::Command, Tessera};
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Tessera::from_args().execute();
}
