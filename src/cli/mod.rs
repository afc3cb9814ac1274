//! CLI module for gotags
//!
//! - Argument parsing (`Cli`)
//! - Runtime setup (`setup`)

pub mod setup;

use crate::config::TagsConfig;
use crate::io::output::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub use setup::{configure_thread_pool, init_logging};

#[derive(Parser, Debug)]
#[command(name = "gotags")]
#[command(about = "List Go function and method declarations as tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Go source files to tag
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Share type names across files, in the order given
    #[arg(long)]
    pub whole_program: bool,

    /// Fail on the first file that cannot be read or parsed
    #[arg(long)]
    pub strict: bool,

    /// Treat result types of earlier functions as known types
    #[arg(long)]
    pub learn_result_types: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Config file (defaults to the nearest .gotags.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overlay command-line flags on file configuration
    pub fn apply_to(&self, config: TagsConfig) -> TagsConfig {
        TagsConfig {
            whole_program: config.whole_program || self.whole_program,
            jobs: self.jobs.unwrap_or(config.jobs),
            strict: config.strict || self.strict,
            format: self.format.unwrap_or(config.format),
            learn_result_types: config.learn_result_types || self.learn_result_types,
        }
    }
}
