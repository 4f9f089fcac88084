//! CLI command definitions and handlers

mod classify;
mod score;

use crate::config::load_config;
use crate::logging::check_github_token;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trustscore - trust scoring for pre-trained ML models
#[derive(Parser, Debug)]
#[command(name = "trustscore")]
#[command(
    version,
    about = "Score Hugging Face models for reuse: ramp-up, license, size, code quality and more",
    args_conflicts_with_subcommands = true,
    after_help = "\
Examples:
  trustscore urls.txt                                  Score every model in a URL file
  trustscore score https://huggingface.co/gpt2         Score models given on the command line
  trustscore classify https://huggingface.co/gpt2      Print the kind of each URL

Output is one JSON record per model on stdout.
Logging: LOG_FILE=<path> LOG_LEVEL=0|1|2, or RUST_LOG when LOG_FILE is unset."
)]
pub struct Cli {
    /// File with one URL per line (dataset and code URLs attach to the next model)
    pub url_file: Option<PathBuf>,

    /// Config file (default: trustscore.toml or .trustscorerc.json in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score model URLs given as arguments
    Score {
        /// Model URLs
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print MODEL, DATASET, CODE or UNKNOWN for each URL
    Classify {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Classify { urls }) => classify::run(&urls),

        Some(Commands::Score { urls }) => {
            check_github_token();
            let config = load_config(cli.config.as_deref(), &std::env::current_dir()?)?;
            score::run_urls(&urls, &config)
        }

        None => {
            let Some(url_file) = cli.url_file else {
                anyhow::bail!("No URL file given. Usage: trustscore <URL_FILE>");
            };
            check_github_token();
            let config = load_config(cli.config.as_deref(), &std::env::current_dir()?)?;
            score::run_url_file(&url_file, &config)
        }
    }
}
