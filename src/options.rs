//! Run-wide options threaded explicitly through the driver — component K.
//!
//! Unlike the reference crate's single global `LazyLock<Config>` (appropriate there because it
//! solves one problem per process invocation), this CLI solves many independent files per run, so
//! only run-wide tuning belongs in a shared value; per-file `Setting`/`Configuration` data stays
//! local to each file's solve call.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub max_iterations: u64,
    pub output_dir: PathBuf,
    pub write_artifacts: bool,
    pub verbose: bool,
}
