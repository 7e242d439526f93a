// External tool invocation: fixed argument templates, run synchronously, result discarded

use std::fmt;
use std::process::{Command, Stdio};

use crate::config::settings::Settings;
use crate::error::ToolError;
use crate::path::FilePath;

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `convert -strip -trim <input> <output>`
    pub fn trim(settings: &Settings, input: &FilePath, output: &FilePath) -> Self {
        Self::new(&settings.trim_program)
            .arg("-strip")
            .arg("-trim")
            .arg(input.as_str())
            .arg(output.as_str())
    }

    /// `inkscape --export-filename=<output> <input>`
    pub fn export_pdf(settings: &Settings, input: &FilePath, output: &FilePath) -> Self {
        Self::new(&settings.exporter_program)
            .arg(format!("--export-filename={output}"))
            .arg(input.as_str())
    }

    /// Ghostscript pdfwrite with the configured compatibility level and preset.
    pub fn compress_pdf(settings: &Settings, input: &FilePath, output: &FilePath) -> Self {
        Self::new(&settings.compressor_program)
            .arg("-sDEVICE=pdfwrite")
            .arg(format!("-dCompatibilityLevel={}", settings.pdf_compatibility))
            .arg(format!("-dPDFSETTINGS={}", settings.pdf_settings))
            .arg("-dNOPAUSE")
            .arg("-dBATCH")
            .arg("-dQUIET")
            .arg(format!("-sOutputFile={output}"))
            .arg(input.as_str())
    }

    /// `notify-send <title> <message>`
    pub fn notify(settings: &Settings, message: &str) -> Self {
        Self::new(&settings.notifier_program)
            .arg(&settings.notification_title)
            .arg(message)
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The process ran; `None` when it was terminated by a signal.
    Exited(Option<i32>),
    SpawnFailed(String),
}

impl Invocation {
    pub fn succeeded(&self) -> bool {
        matches!(self, Invocation::Exited(Some(0)))
    }
}

/// Runs external commands. Tests substitute a recording fake.
pub trait CommandRunner {
    fn run(&self, command: &ToolCommand) -> Invocation;
}

/// Runs commands as real child processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Invocation {
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .status();

        match status {
            Ok(status) => Invocation::Exited(status.code()),
            Err(e) => Invocation::SpawnFailed(e.to_string()),
        }
    }
}

/// Run `command` and wait for it. The outcome is logged and otherwise ignored.
pub fn invoke(runner: &dyn CommandRunner, command: &ToolCommand) {
    tracing::debug!(command = %command, "invoking external tool");

    let failure = match runner.run(command) {
        Invocation::Exited(Some(0)) => None,
        Invocation::Exited(code) => Some(ToolError::external_tool(format!(
            "{} failed (exit code {})",
            command.program,
            code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
        ))),
        Invocation::SpawnFailed(reason) => Some(ToolError::external_tool(format!(
            "failed to execute {}: {reason}",
            command.program
        ))),
    };

    if let Some(err) = failure {
        tracing::warn!(error = %err, "continuing despite external tool failure");
    }
}
