use clap::{Parser, Subcommand};
use docfilter::describe::Locale;
use docfilter::model::{Combination, OutputMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docfilter", bin_name = "docfilter", version)]
#[command(
    about = "Compile form-entered filters into MongoDB query documents or flat filter arrays",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Language for descriptions and labels (pt-BR, en)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile one filter request and print the result as JSON
    #[command(alias = "c")]
    Compile {
        /// JSON file with a request or a bare list of filters (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Output shape: document or array
        #[arg(short, long)]
        output: Option<OutputMode>,

        /// How to combine filters: and, or
        #[arg(short, long)]
        logic: Option<Combination>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Compile a JSON array of requests, one result per item
    #[command(alias = "b")]
    Batch {
        /// JSON file with an array of requests (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Record failing items and keep going
        #[arg(long)]
        continue_on_fail: bool,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Print only the human-readable description of a request
    #[command(alias = "d")]
    Describe {
        /// JSON file with a request or a bare list of filters (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// How to combine filters: and, or
        #[arg(short, long)]
        logic: Option<Combination>,
    },

    /// List supported operators
    #[command(alias = "ops")]
    Operators,

    /// Get or set configuration
    Config {
        /// Configuration key (locale, combination, output, continue-on-fail)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
