pub mod settings;

use settings::Settings;
use std::path::Path;

/// Name of the optional settings file looked up next to the input file.
pub const SETTINGS_FILE_NAME: &str = "scan_tools.yaml";

/// Load `scan_tools.yaml` from the directory containing `input_path`.
///
/// A bare file name resolves against the current directory. When no settings
/// file is present the defaults are returned.
pub fn load_settings_for_input(input_path: &Path) -> crate::error::Result<Settings> {
    let dir = match input_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let settings_path = dir.join(SETTINGS_FILE_NAME);

    if settings_path.exists() {
        tracing::debug!(path = %settings_path.display(), "loading settings");
        Settings::from_file(&settings_path)
    } else {
        Ok(Settings::default())
    }
}
