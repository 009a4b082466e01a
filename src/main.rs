mod cli;

use clap::{Parser, Subcommand};
use tracing::Level;

/// Electrode resistance over a two-layer half-space
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resistance and apparent resistivity of one electrode array
    Resistance(cli::resistance::Args),
    /// Apparent resistivity over a series of growing electrode arrays
    Sounding(cli::sounding::Args),
}

fn main() {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ok = match &args.command {
        Commands::Resistance(args) => cli::resistance::run(args),
        Commands::Sounding(args) => cli::sounding::run(args),
    };
    if !ok {
        std::process::exit(1);
    }
}
