use std::process::ExitCode;

use scan_tools::error::ToolError;
use scan_tools::invoke::SystemRunner;
use scan_tools::logging;
use scan_tools::pipeline::Outcome;
use scan_tools::pipeline::mesh::run_stl_to_vtk;

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run_stl_to_vtk(&args, &SystemRunner) {
        Ok(Outcome::Completed(output)) => {
            eprintln!("OK: {}", output);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Skipped) => ExitCode::SUCCESS,
        Err(ToolError::Usage(msg)) => {
            println!("{msg}");
            ExitCode::FAILURE
        }
        Err(e @ ToolError::OutputCollision { .. }) => ExitCode::from(e.exit_code()),
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
