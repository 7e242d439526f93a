// Output path derivation by textual substitution on the file extension

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::ToolError;

/// Where a substitution pattern is matched in the path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// First textual occurrence anywhere in the path, including directories.
    #[default]
    FirstOccurrence,
    /// Only at the very end of the path.
    Suffix,
}

/// A textual derivation rule from an input path to an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionRule {
    /// `.{ext}` becomes `_cropped.{ext}`.
    Crop(MatchPolicy),
    /// Trailing `.{ext}` becomes `.pdf`.
    ImageToPdf,
    /// Trailing `.pdf` (case-sensitive) becomes `_compressed.pdf`.
    Compression,
    /// Trailing `.stl` (any case) becomes `.vtk`.
    StlToVtk,
}

/// A file path kept as the exact string the user passed.
///
/// The extension is the text after the final `.`; the directory prefix is
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath {
    raw: String,
}

impl FilePath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Text after the last `.`, or `None` when the path has no dot.
    pub fn extension(&self) -> Option<&str> {
        self.raw.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Extension trimmed of surrounding whitespace and lowercased, for comparisons only.
    pub fn normalized_extension(&self) -> Option<String> {
        self.extension().map(|e| e.trim().to_lowercase())
    }

    pub fn exists(&self) -> bool {
        self.as_path().exists()
    }

    /// Compute the output path for `rule`.
    ///
    /// Fails with [`ToolError::Derivation`] when the rule's pattern is not
    /// present, so a derived path never equals its input.
    pub fn derive(&self, rule: SubstitutionRule) -> crate::error::Result<FilePath> {
        let derived = match rule {
            SubstitutionRule::Crop(policy) => {
                let ext = self.require_extension()?;
                let pattern = format!(".{ext}");
                let replacement = format!("_cropped.{ext}");
                let replaced = match policy {
                    MatchPolicy::FirstOccurrence => {
                        replace_first(&self.raw, &pattern, &replacement)
                    }
                    MatchPolicy::Suffix => replace_suffix(&self.raw, &pattern, &replacement),
                };
                replaced.ok_or_else(|| self.derivation_error(&pattern))?
            }
            SubstitutionRule::ImageToPdf => {
                let ext = self.require_extension()?;
                let pattern = format!(".{ext}");
                replace_suffix(&self.raw, &pattern, ".pdf")
                    .ok_or_else(|| self.derivation_error(&pattern))?
            }
            SubstitutionRule::Compression => {
                replace_suffix(&self.raw, ".pdf", "_compressed.pdf")
                    .ok_or_else(|| self.derivation_error(".pdf"))?
            }
            SubstitutionRule::StlToVtk => match self.raw.rsplit_once('.') {
                Some((stem, ext)) if ext.eq_ignore_ascii_case("stl") => format!("{stem}.vtk"),
                _ => return Err(self.derivation_error(".stl")),
            },
        };

        tracing::debug!(input = %self.raw, output = %derived, ?rule, "derived output path");
        Ok(FilePath::new(derived))
    }

    fn require_extension(&self) -> crate::error::Result<&str> {
        self.extension().ok_or_else(|| self.derivation_error("."))
    }

    fn derivation_error(&self, pattern: &str) -> ToolError {
        ToolError::Derivation {
            path: self.raw.clone(),
            pattern: pattern.to_string(),
        }
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        FilePath::new(s)
    }
}

fn replace_first(s: &str, pattern: &str, replacement: &str) -> Option<String> {
    s.contains(pattern)
        .then(|| s.replacen(pattern, replacement, 1))
}

fn replace_suffix(s: &str, pattern: &str, replacement: &str) -> Option<String> {
    s.strip_suffix(pattern)
        .map(|head| format!("{head}{replacement}"))
}
