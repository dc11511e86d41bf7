//! Terminal front end for the V5 dice engine.

mod commands;
mod render;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "v5",
    about = "V5 dice roller with hunger dice, Rouse Checks and willpower rerolls",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool and evaluate it
    Roll {
        /// Total number of dice (1-20), hunger dice included
        total: u32,

        /// How many of the dice are hunger dice (0-5)
        #[arg(short = 'H', long, default_value = "0")]
        hunger: u32,

        /// Successes needed (0 = just count successes)
        #[arg(short, long, default_value = "0")]
        difficulty: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a Rouse Check (one hunger die, difficulty 1)
    Rouse {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive roller with add-die and willpower rerolls
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            total,
            hunger,
            difficulty,
            seed,
            json,
        } => commands::roll::run(total, hunger, difficulty, seed, json),
        Commands::Rouse { seed, json } => commands::rouse::run(seed, json),
        Commands::Play { seed } => commands::play::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
