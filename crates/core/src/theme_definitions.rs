use serde::Deserialize;

/// A single terminal color as written in the theme file.
///
/// Exactly one of the fields may be set; leaving all of them empty means
/// "keep the built-in color".
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

impl ColorDefinition {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Color overrides for the console, one optional slot per color role.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeDefinition {
    pub header_foreground: Option<ColorDefinition>,
    pub header_background: Option<ColorDefinition>,
    pub prompt_foreground: Option<ColorDefinition>,
    pub prompt_background: Option<ColorDefinition>,
    pub highlight: Option<ColorDefinition>,
}

impl ThemeDefinition {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
