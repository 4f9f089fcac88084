use anyhow::Result;
use clap::Parser;
use trustscore::{cli, logging};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if logging::init().is_err() {
        eprintln!("Invalid log file path");
        std::process::exit(1);
    }

    cli::run(cli)
}
