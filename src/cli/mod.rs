// src/cli/mod.rs
use clap::Parser;

use crate::models::Locale;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "passkeeper", author, version, about, long_about = None)]
pub struct Args {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Language for labels and advice (en, ru)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
