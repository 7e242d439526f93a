// Shared test doubles for pipeline tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;

use scan_tools::invoke::{CommandRunner, Invocation, ToolCommand};

/// Records every command instead of running it.
///
/// With `simulate` set, it also writes the file each tool would have produced,
/// so the filesystem steps after an invocation can be exercised.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<ToolCommand>>,
    simulate: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulating() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            simulate: true,
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }

    pub fn call(&self, i: usize) -> ToolCommand {
        self.calls.borrow()[i].clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ToolCommand) -> Invocation {
        self.calls.borrow_mut().push(command.clone());
        if self.simulate {
            if let Some(out) = output_of(command) {
                std::fs::write(&out, format!("output of {}", command.program))
                    .expect("write simulated output");
            }
        }
        Invocation::Exited(Some(0))
    }
}

/// Output file named by a tool command, if any.
fn output_of(command: &ToolCommand) -> Option<PathBuf> {
    for arg in &command.args {
        if let Some(p) = arg
            .strip_prefix("--export-filename=")
            .or_else(|| arg.strip_prefix("-sOutputFile="))
        {
            return Some(PathBuf::from(p));
        }
    }
    if command.args.first().map(String::as_str) == Some("-strip") {
        return command.args.last().map(PathBuf::from);
    }
    None
}

/// Path string of `name` inside `dir`.
pub fn path_in(dir: &tempfile::TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

/// Create a file with placeholder contents and return its path string.
pub fn touch(dir: &tempfile::TempDir, name: &str) -> String {
    let p = path_in(dir, name);
    std::fs::write(&p, b"placeholder").expect("create test file");
    p
}

pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
