//! Theme file loading.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::theme_definitions::ThemeDefinition;

const THEME_FILE_DESCRIPTION: &str = "theme";

/// Reads the theme definition at `theme_path`.
///
/// A missing file is only an error when `required` is set (the user named
/// the file explicitly); otherwise the empty theme is returned. A file that
/// is empty or only whitespace is also the empty theme.
///
/// # Errors
///
/// Returns an error if:
/// - The file is required but does not exist
/// - The file exists but cannot be read
/// - The file contains invalid YAML or unknown color slots
pub fn get_theme_definition(theme_path: &str, required: bool) -> Result<ThemeDefinition> {
    if !required && !Path::new(theme_path).exists() {
        debug!("No theme file at `{theme_path}`, using built-in colors");
        return Ok(ThemeDefinition::default());
    }

    let contents = fs::read_to_string(theme_path).map_err(|e| {
        Error::io_error(
            THEME_FILE_DESCRIPTION.to_string(),
            theme_path.to_string(),
            e,
        )
    })?;

    if contents.trim().is_empty() {
        debug!("Theme file at `{theme_path}` is empty");
        return Ok(ThemeDefinition::default());
    }

    let theme: ThemeDefinition = serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            THEME_FILE_DESCRIPTION.to_string(),
            theme_path.to_string(),
            e,
        )
    })?;

    debug!("Loaded theme from `{theme_path}`: {theme:?}");
    Ok(theme)
}
