//! Command-line surface — component H. Grounded in the reference crate's clap-derive
//! `Arguments`/`Commands` split (`cli.rs`), narrowed to the one subcommand this domain needs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use logistics_planner::options::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "logistics-planner", about = "Solves Logistics planning problem instances")]
pub struct Arguments {
    /// Absent when invoked with no arguments at all, matching the original `argc <= 1` check.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solves one or more problem files, in order.
    Solve {
        /// Problem files to solve.
        files: Vec<PathBuf>,

        /// Caps the number of outer iterative-deepening iterations. Unbounded by default.
        #[arg(long)]
        max_iterations: Option<u64>,

        /// Directory for JSON run artifacts.
        #[arg(long, default_value = "outputs")]
        outputs: PathBuf,

        /// Skip writing JSON run artifacts; console output only.
        #[arg(long)]
        no_artifacts: bool,

        /// Raises tracing verbosity for per-iteration search diagnostics.
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Commands::Solve { files, .. } => files,
        }
    }

    pub fn run_options(&self) -> RunOptions {
        match self {
            Commands::Solve { max_iterations, outputs, no_artifacts, verbose, .. } => RunOptions {
                max_iterations: max_iterations.unwrap_or(u64::MAX),
                output_dir: outputs.clone(),
                write_artifacts: !no_artifacts,
                verbose: *verbose,
            },
        }
    }
}
