use console_helpers_core::error::{Error, Result};
use console_helpers_core::theme_definitions::{ColorDefinition, ThemeDefinition};
use crossterm::style::Color;

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one field is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "grey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

/// Helper function to extract a color from an optional theme slot
pub fn color_from_theme_slot(color_definition: &Option<ColorDefinition>) -> Result<Option<Color>> {
    match color_definition {
        None => Ok(None),
        Some(color_definition) => color_definition.as_crossterm_color(),
    }
}

/// Colors used by the console for headers, prompts and re-echoed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub header_foreground: Color,
    pub header_background: Color,
    pub prompt_foreground: Color,
    pub prompt_background: Color,
    /// Color of the value echoed back after a prompt is answered
    pub highlight: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header_foreground: Color::White,
            header_background: Color::DarkBlue,
            prompt_foreground: Color::Grey,
            prompt_background: Color::Black,
            highlight: Color::Yellow,
        }
    }
}

impl ColorScheme {
    /// Builds a scheme from a theme, keeping the default for every slot the
    /// theme leaves unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot defines more than one color kind or names
    /// an unknown color.
    pub fn from_theme(theme: &ThemeDefinition) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            header_foreground: color_from_theme_slot(&theme.header_foreground)?
                .unwrap_or(defaults.header_foreground),
            header_background: color_from_theme_slot(&theme.header_background)?
                .unwrap_or(defaults.header_background),
            prompt_foreground: color_from_theme_slot(&theme.prompt_foreground)?
                .unwrap_or(defaults.prompt_foreground),
            prompt_background: color_from_theme_slot(&theme.prompt_background)?
                .unwrap_or(defaults.prompt_background),
            highlight: color_from_theme_slot(&theme.highlight)?.unwrap_or(defaults.highlight),
        })
    }
}
