mod cli;
mod commands;
mod io;

use cli::{Cli, Commands};
use commands::{select, spread};
use tracing::Level;

/// Route `tracing` output to stderr at a level chosen by `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Select(args) => select::run(&cli, args),
        Commands::Spread(args) => spread::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
