//! Scaffold command
//!
//! Runs the orchestrator and prints its progress the way the rest of the
//! CLI does: plain lines on stdout, or one JSON report with `--json`.

use clap::Args;

use crate::config::{ScaffoldPaths, ScaffoldSettings};
use crate::error::ScaffoldResult;
use crate::orchestrator::{Orchestrator, RunReport};

/// Exit code when the run failed and the backup was put back
pub const EXIT_RESTORED: u8 = 1;
/// Exit code for invalid input or a failed restore
pub const EXIT_FATAL: u8 = 2;

/// Arguments for a scaffold run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Page to generate (repeatable); defaults to Search and Experiments
    #[arg(short, long = "page", value_name = "NAME")]
    pub pages: Vec<String>,
}

/// Handle the scaffold command
pub fn handle_run_command(
    paths: &ScaffoldPaths,
    args: RunArgs,
    json: bool,
) -> ScaffoldResult<RunReport> {
    let settings = ScaffoldSettings::with_pages(args.pages);
    let mut orchestrator = Orchestrator::new(paths.clone(), settings);

    if !json {
        orchestrator = orchestrator.with_progress(|line| println!("{}", line));
    }

    let report = orchestrator.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}

/// Map the outcome of a run to the process exit code
pub fn exit_code(result: &ScaffoldResult<RunReport>) -> u8 {
    match result {
        Ok(report) if report.succeeded() => 0,
        Ok(_) => EXIT_RESTORED,
        Err(_) => EXIT_FATAL,
    }
}
