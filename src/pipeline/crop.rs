// Crop pipeline: extension check -> derive `_cropped` path -> guard -> trim

use crate::config::load_settings_for_input;
use crate::config::settings::Settings;
use crate::error::ToolError;
use crate::guard::CollisionGuard;
use crate::invoke::{CommandRunner, ToolCommand, invoke};
use crate::path::{FilePath, SubstitutionRule};
use crate::pipeline::{Outcome, single_argument};

/// Extensions accepted by the crop tool. Matching is case-sensitive.
pub const CROP_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub const CROP_USAGE: &str = "Usage: autocrop <image.png|image.jpg|image.jpeg>";

/// Run the crop tool on its command-line arguments (program name excluded).
pub fn run_crop(args: &[String], runner: &dyn CommandRunner) -> crate::error::Result<Outcome> {
    let raw = single_argument(args, CROP_USAGE)?;
    let input = FilePath::new(raw.trim());

    if !input
        .extension()
        .is_some_and(|ext| CROP_EXTENSIONS.contains(&ext))
    {
        return Err(ToolError::UnsupportedExtension {
            path: input.as_str().to_string(),
        });
    }

    let settings = load_settings_for_input(input.as_path())?;
    crop_image(&input, runner, &settings)
}

/// Trim whitespace borders from `input` into a sibling `_cropped` file.
pub fn crop_image(
    input: &FilePath,
    runner: &dyn CommandRunner,
    settings: &Settings,
) -> crate::error::Result<Outcome> {
    let cropped = input.derive(SubstitutionRule::Crop(settings.crop_match))?;
    CollisionGuard::new(runner, settings).guard_or_abort(&cropped)?;

    invoke(runner, &ToolCommand::trim(settings, input, &cropped));
    tracing::info!(input = %input, output = %cropped, "crop finished");

    Ok(Outcome::Completed(cropped))
}
