use std::process::ExitCode;

use scan_tools::error::ToolError;
use scan_tools::invoke::SystemRunner;
use scan_tools::logging;
use scan_tools::pipeline::crop::run_crop;

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run_crop(&args, &SystemRunner) {
        Ok(_) => ExitCode::SUCCESS,
        // Wrong argument count and unsupported extensions fail silently;
        // collisions were already reported by the guard.
        Err(
            e @ (ToolError::Usage(_)
            | ToolError::UnsupportedExtension { .. }
            | ToolError::OutputCollision { .. }),
        ) => ExitCode::from(e.exit_code()),
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
