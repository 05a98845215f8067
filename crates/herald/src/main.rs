mod cli; // Declare the cli module

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand}; // Use clap for argument parsing
use log::error;

/// Herald: a priority-ordered in-process event mediator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Simple ping command for testing
    #[arg(long)]
    ping: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a wiring manifest
    Check {
        /// Path to the manifest (.json, .toml, .yaml)
        manifest: PathBuf,
    },
    /// List a manifest's bindings per event, in dispatch order
    Events {
        /// Path to the manifest (.json, .toml, .yaml)
        manifest: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();

    // Handle simple ping command
    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    let Some(command) = args.command else {
        eprintln!("no command given; see --help");
        return ExitCode::FAILURE;
    };

    let result = match command {
        Commands::Check { manifest } => cli::run_check(&manifest),
        Commands::Events { manifest } => cli::run_events(&manifest),
    };

    match result {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
