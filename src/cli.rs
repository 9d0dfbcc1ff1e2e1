use arkanoid::game::DEFAULT_CFG_PATH;
use clap::Parser;

/// CLI tooling for the game.
#[derive(Parser, Debug)]
pub struct Args {
    /// Seed for the random number generator. Picked from
    /// the clock when absent.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Game config to load.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CFG_PATH)]
    pub cfg: String,
}
