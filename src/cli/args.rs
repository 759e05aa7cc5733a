//! Command line argument parsing for the Peyda CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Peyda - bilingual lost & found chatbot
#[derive(Parser, Debug, Clone)]
#[command(name = "peyda")]
#[command(about = "A bilingual (English/Persian) lost & found chatbot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PeydaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PeydaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Send one message through the full chatbot pipeline
    Message(MessageArgs),

    /// Force an item search on a message, skipping intent classification
    Search(SearchArgs),

    /// Show how a message is normalized, tokenized and keyword-filtered
    Keywords(KeywordsArgs),
}

/// Arguments for the message command
#[derive(Parser, Debug, Clone)]
pub struct MessageArgs {
    /// The chat message text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// The item description to search with
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value_t = 6)]
    pub max_results: usize,
}

/// Arguments for the keywords command
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    /// The message to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum number of keywords to extract
    #[arg(short, long, default_value_t = 8)]
    pub max_keywords: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
