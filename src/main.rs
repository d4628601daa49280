use std::path::Path;
use std::time::Instant;

use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{info, warn};

use logistics_planner::{domain, options::RunOptions, output, parser, problem, search, setting};

mod cli;
mod logging;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let cli::Arguments { command } = cli::Arguments::parse();
    let Some(command) = command else {
        println!("No file input.");
        return;
    };

    let run_options = command.run_options();
    logging::init(run_options.verbose);

    for path in command.files() {
        match parser::parse_file(path) {
            Ok((setting, initial)) => {
                if let Err(error) = solve_and_report(path, setting, initial, &run_options) {
                    warn!(path = %path.display(), "failed to write run artifact: {error}");
                }
            }
            Err(error) => {
                warn!(path = %path.display(), "{error}");
                output::report_parse_error(&error);
            }
        }
    }
}

/// Solves one already-parsed problem and reports it; the only failure mode left at this point is
/// writing the optional JSON artifact, surfaced via `anyhow` at this binary boundary.
fn solve_and_report(
    path: &Path,
    setting: setting::Setting,
    initial: domain::Configuration,
    run_options: &RunOptions,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let problem = problem::LogisticsProblem::new(setting, initial);
    let result = search::solve(&problem, run_options.max_iterations);
    let elapsed = start.elapsed();

    output::print_actions(&result.actions);

    if result.solved {
        info!(
            path = %path.display(),
            cost = result.cost,
            iterations = result.iterations,
            elapsed_ms = elapsed.as_millis(),
            "solved"
        );
    } else {
        warn!(
            path = %path.display(),
            iterations = result.iterations,
            "iteration cap reached without a goal; returning best partial plan"
        );
    }

    if run_options.write_artifacts {
        let artifact_path = output::write_artifact(&run_options.output_dir, path, &result, elapsed)?;
        info!(path = %artifact_path.display(), "wrote run artifact");
    }

    Ok(())
}
