use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod args;

use args::{Cli, Commands};
use cli::commands::{add, bits};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match &cli.command {
        Commands::Add {
            base,
            digits,
            values,
        } => add::add_command(*base, values, *digits),
        Commands::Bits { bytes, start, end } => bits::bits_command(bytes, *start, *end),
    }
}
