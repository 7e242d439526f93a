use std::process::ExitCode;

use scan_tools::error::ToolError;
use scan_tools::invoke::SystemRunner;
use scan_tools::logging;
use scan_tools::pipeline::convert::run_convert;

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run_convert(&args, &SystemRunner) {
        // Unsupported extensions come back as `Outcome::Skipped` and also exit 0.
        Ok(_) => ExitCode::SUCCESS,
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
