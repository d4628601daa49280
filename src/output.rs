//! Solution printer and JSON run-artifact serializer — component G.

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use crate::domain::Action;
use crate::errors::ParseError;
use crate::search::SolveResult;

/// Prints the action sequence in the exact textual form §6 mandates, one action per line.
pub fn print_actions(actions: &[Action]) {
    for action in actions {
        println!("{}", action.render());
    }
}

#[derive(Debug, Serialize)]
struct RunArtifact<'a> {
    solved: bool,
    cost: Option<u64>,
    elapsed_ms: u128,
    iterations: u64,
    actions: &'a [Action],
}

/// Writes a JSON run artifact to `<output_dir>/<file-stem>.json`, mirroring the reference crate's
/// `Logger::finalize` shape (a serialized result struct alongside the solved instance).
pub fn write_artifact(
    output_dir: &Path,
    source_path: &Path,
    result: &SolveResult<Action>,
    elapsed: Duration,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let stem = source_path.file_stem().and_then(|s| s.to_str()).unwrap_or("problem");
    let artifact_path = output_dir.join(format!("{stem}.json"));

    let artifact = RunArtifact {
        solved: result.solved,
        cost: result.solved.then_some(result.cost),
        elapsed_ms: elapsed.as_millis(),
        iterations: result.iterations,
        actions: &result.actions,
    };

    let body = serde_json::to_string_pretty(&artifact).expect("RunArtifact is always serializable");
    std::fs::write(&artifact_path, body)?;
    Ok(artifact_path)
}

/// Reports a per-file parse failure to stderr, colored for visibility, without aborting the run.
pub fn report_parse_error(error: &ParseError) {
    eprintln!("{} {error}", "error:".red().bold());
}
