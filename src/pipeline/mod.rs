pub mod convert;
pub mod crop;
pub mod mesh;

use crate::error::ToolError;
use crate::path::FilePath;

/// Result of a pipeline run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All steps ran; carries the final output path.
    Completed(FilePath),
    /// The input was not something this tool handles; nothing was done.
    Skipped,
}

/// Take the single positional argument, or fail with a usage error.
pub(crate) fn single_argument<'a>(args: &'a [String], usage: &str) -> crate::error::Result<&'a str> {
    match args {
        [only] => Ok(only.as_str()),
        _ => Err(ToolError::usage(usage)),
    }
}
