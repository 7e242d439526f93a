// Collision guard: refuse to overwrite an existing output file

use crate::config::settings::Settings;
use crate::error::ToolError;
use crate::invoke::{CommandRunner, ToolCommand, invoke};
use crate::path::FilePath;

/// Aborts a run when a derived output path already exists.
///
/// The existence check and the later creation by the external tool are two
/// separate steps; nothing prevents another process from creating the file
/// in between.
pub struct CollisionGuard<'a> {
    runner: &'a dyn CommandRunner,
    settings: &'a Settings,
}

impl<'a> CollisionGuard<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: &'a Settings) -> Self {
        Self { runner, settings }
    }

    /// Return `Err(OutputCollision)` if `path` exists, after printing the
    /// message to stdout and sending a best-effort desktop notification.
    pub fn guard_or_abort(&self, path: &FilePath) -> crate::error::Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let err = ToolError::OutputCollision {
            path: path.as_str().to_string(),
        };
        self.notify_error(&err.to_string());
        Err(err)
    }

    fn notify_error(&self, message: &str) {
        println!("{message}");
        invoke(self.runner, &ToolCommand::notify(self.settings, message));
    }
}
