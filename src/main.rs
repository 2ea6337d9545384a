//! xhud CLI - track a two-player miniatures game from the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// xhud - status cards for a live miniatures game
#[derive(Parser, Debug)]
#[command(name = "xhud")]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and verify list files
    Check {
        /// List files (JSON)
        #[arg(required = true)]
        lists: Vec<PathBuf>,

        /// Maximum points per list (default: 100)
        #[arg(long, default_value = "100")]
        point_limit: u32,
    },

    /// Print a list with computed stats and costs
    Dump {
        /// List file (JSON)
        list: PathBuf,
    },

    /// Generate the status card for a list
    Gen {
        /// List file (JSON)
        list: PathBuf,

        /// Card file to write
        out: PathBuf,
    },

    /// Run a game between two lists
    Run {
        /// Player 1 list file (JSON)
        first: PathBuf,

        /// Player 2 list file (JSON)
        second: PathBuf,

        /// Player 1 card file (default: p1.txt)
        #[arg(long)]
        p1_card: Option<PathBuf>,

        /// Player 2 card file (default: p2.txt)
        #[arg(long)]
        p2_card: Option<PathBuf>,

        /// Prompt shown before each command (default: "xhud> ")
        #[arg(long)]
        prompt: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Check { lists, point_limit } => cli::check::execute(&lists, point_limit),

        Commands::Dump { list } => cli::dump::execute(&list),

        Commands::Gen { list, out } => cli::generate::execute(&list, &out),

        Commands::Run {
            first,
            second,
            p1_card,
            p2_card,
            prompt,
        } => cli::run::execute(&first, &second, p1_card, p2_card, prompt),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
