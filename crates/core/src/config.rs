//! Configuration path utilities for console-helpers.
//!
//! This module resolves the location of the optional theme file and expands
//! shell shorthands like `~` in it.

/// Default path for the theme file
pub const DEFAULT_THEME_PATH: &str = "~/.console-helpers/theme.yml";

/// Resolves the theme file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// theme path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use console_helpers_core::config::get_theme_path;
///
/// let default_path = get_theme_path(&None);
/// assert!(default_path.ends_with("theme.yml"));
///
/// let custom_path = get_theme_path(&Some("/path/to/theme.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/theme.yml");
/// ```
pub fn get_theme_path(theme_path_arg: &Option<String>) -> String {
    let theme_path = match theme_path_arg {
        Some(theme_path) => theme_path,
        None => DEFAULT_THEME_PATH,
    };

    shellexpand::tilde(theme_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_path_with_custom_path() {
        let custom_path = Some("/custom/path/theme.yml".to_string());
        let result = get_theme_path(&custom_path);
        assert_eq!(result, "/custom/path/theme.yml");
    }

    #[test]
    fn test_get_theme_path_with_none() {
        let result = get_theme_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".console-helpers/theme.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_theme_path_with_tilde() {
        let result = get_theme_path(&Some("~/my-theme.yml".to_string()));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-theme.yml"));
    }
}
