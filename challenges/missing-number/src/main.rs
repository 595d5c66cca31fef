use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tracing_subscriber::filter::LevelFilter;

use missing_number::finder::SumFinder;
use missing_number::{Config, Scanner, Writer, driver};

const MAX_BLOCKS: i64 = 1000;

#[derive(Parser, Debug)]
#[command(name = "missing-number")]
#[command(about = "Finds the one number missing from 0..n", long_about = None)]
struct Cli {
    /// Disable colors, screen clearing and emoji
    #[arg(long)]
    plain: bool,
    /// Skip the closing progress bar
    #[arg(long)]
    no_animation: bool,
    /// Steps in the closing progress bar
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(..=MAX_BLOCKS))]
    blocks: u16,
    /// Delay between progress bar steps
    #[arg(long, default_value_t = 100)]
    frame_delay_ms: u64,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // logs go to stderr, stdout belongs to the game
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .init();

    let config = Config::new(
        cli.plain,
        !cli.no_animation,
        usize::from(cli.blocks),
        cli.frame_delay_ms,
    );
    let mut scanner = Scanner::new(BufReader::new(io::stdin()));
    let mut out = Writer::new(io::stdout(), config.palette);

    match driver::run(&SumFinder, &config, &mut scanner, &mut out, std::thread::sleep) {
        Ok(session) => {
            info!("played {} rounds, solved {}", session.rounds, session.solved);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("console error: {}", err);
            ExitCode::FAILURE
        }
    }
}
