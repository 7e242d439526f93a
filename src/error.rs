use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Unsupported extension: '{path}'")]
    UnsupportedExtension { path: String },

    /// The wording (including the misspelling) is user-visible output of the tools.
    #[error("File: '{path}' arleady exists.")]
    OutputCollision { path: String },

    #[error("Cannot derive output path from '{path}': '{pattern}' does not occur in it")]
    Derivation { path: String, pattern: String },

    #[error("External tool error: {0}")]
    ExternalTool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("STL error: {0}")]
    Stl(String),

    #[error("Failed to {action} '{}': {source}", path.display())]
    FileOp {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generates factory methods for [`ToolError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl ToolError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a usage error.
    usage => Usage,
    /// Create an external tool error.
    external_tool => ExternalTool,
    /// Create a configuration error.
    config => Config,
    /// Create an STL parse error.
    stl => Stl,
}

impl ToolError {
    /// Process exit code for this error. Every failure the tools report exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<serde_yml::Error> for ToolError {
    fn from(e: serde_yml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
