// Convert pipeline: image -> PDF -> compressed PDF, or PDF -> compressed PDF

use std::fs;

use crate::config::load_settings_for_input;
use crate::config::settings::Settings;
use crate::error::ToolError;
use crate::guard::CollisionGuard;
use crate::invoke::{CommandRunner, ToolCommand, invoke};
use crate::path::{FilePath, SubstitutionRule};
use crate::pipeline::{Outcome, single_argument};

/// Image extensions converted to PDF. Compared after lowercasing.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "svg"];

pub const CONVERT_USAGE: &str = "Missing single argument: file path of image or pdf.";

/// Run the convert tool on its command-line arguments (program name excluded).
///
/// An extension that is neither an image nor `pdf` yields [`Outcome::Skipped`].
pub fn run_convert(args: &[String], runner: &dyn CommandRunner) -> crate::error::Result<Outcome> {
    let input = FilePath::new(single_argument(args, CONVERT_USAGE)?);
    let Some(ext) = input.normalized_extension() else {
        return Ok(Outcome::Skipped);
    };

    let is_image = IMAGE_EXTENSIONS.contains(&ext.as_str());
    let is_pdf = ext == "pdf";
    if !is_image && !is_pdf {
        tracing::debug!(input = %input, "unsupported extension, nothing to do");
        return Ok(Outcome::Skipped);
    }

    let settings = load_settings_for_input(input.as_path())?;
    let mut outcome = Outcome::Skipped;

    // The two checks are independent; the extension lists never overlap.
    if is_image {
        outcome = convert_image(&input, runner, &settings)?;
    }
    if is_pdf {
        outcome = compress_pdf(&input, runner, &settings)?;
    }

    Ok(outcome)
}

/// Export `image` to a sibling `.pdf`, then replace that PDF with its compressed form.
pub fn convert_image(
    image: &FilePath,
    runner: &dyn CommandRunner,
    settings: &Settings,
) -> crate::error::Result<Outcome> {
    let pdf = image.derive(SubstitutionRule::ImageToPdf)?;
    CollisionGuard::new(runner, settings).guard_or_abort(&pdf)?;

    invoke(runner, &ToolCommand::export_pdf(settings, image, &pdf));

    let compressed = compress_to_sibling(&pdf, runner, settings)?;

    // Not atomic: the uncompressed PDF is removed before the rename.
    fs::remove_file(pdf.as_path()).map_err(|source| ToolError::FileOp {
        action: "remove",
        path: pdf.as_path().to_path_buf(),
        source,
    })?;
    fs::rename(compressed.as_path(), pdf.as_path()).map_err(|source| ToolError::FileOp {
        action: "rename",
        path: compressed.as_path().to_path_buf(),
        source,
    })?;

    tracing::info!(input = %image, output = %pdf, "image converted to compressed PDF");
    Ok(Outcome::Completed(pdf))
}

/// Write a compressed copy of `pdf` to a sibling `_compressed.pdf`. The input is left untouched.
pub fn compress_pdf(
    pdf: &FilePath,
    runner: &dyn CommandRunner,
    settings: &Settings,
) -> crate::error::Result<Outcome> {
    compress_to_sibling(pdf, runner, settings).map(Outcome::Completed)
}

fn compress_to_sibling(
    pdf: &FilePath,
    runner: &dyn CommandRunner,
    settings: &Settings,
) -> crate::error::Result<FilePath> {
    let compressed = pdf.derive(SubstitutionRule::Compression)?;
    CollisionGuard::new(runner, settings).guard_or_abort(&compressed)?;

    invoke(runner, &ToolCommand::compress_pdf(settings, pdf, &compressed));
    tracing::info!(input = %pdf, output = %compressed, "PDF compressed");

    Ok(compressed)
}
