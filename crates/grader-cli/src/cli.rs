use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "grader", version, about = "Reward scoring for reasoning/answer completions")]
pub struct Cli {
    /// Log filter (e.g. "info", "grader_core=debug"). Falls back to RUST_LOG, then "info".
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one completion and print the reward as JSON.
    ///
    /// Reads a grading request from --request (JSON or YAML by extension),
    /// from stdin when neither --request nor --completion is given, or builds
    /// one from --completion/--answer.
    Score {
        /// Grading request file; "-" reads JSON from stdin.
        #[arg(long, short, conflicts_with_all = ["completion", "answer"])]
        request: Option<PathBuf>,

        /// Completion text to score directly.
        #[arg(long)]
        completion: Option<String>,

        /// Expected answer for --completion.
        #[arg(long, requires = "completion")]
        answer: Option<String>,

        /// Include per-scorer components in the output.
        #[arg(long)]
        breakdown: bool,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Start the HTTP server. Flags override GRADER_* environment variables.
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Largest accepted request body in bytes.
        #[arg(long)]
        max_body_bytes: Option<usize>,
    },
}
