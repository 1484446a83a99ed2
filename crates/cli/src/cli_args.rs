//! Command-line argument parsing for the `pick` binary.

use clap::Parser;

use crate::prompting::SelectOptions;

/// Command-line arguments for `pick`.
///
/// ```rust
/// use clap::Parser;
/// use console_helpers::cli_args::Args;
///
/// let args = Args::parse_from(["pick", "--default", "1", "red", "green"]);
/// assert_eq!(args.default, Some(1));
/// assert_eq!(args.choices, vec!["red", "green"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(about = "Pick one of the given choices interactively and print it")]
pub struct Args {
    /// Text shown above the numbered choices.
    #[arg(long, short = 'p', default_value = "Choose an option")]
    pub prompt: String,

    /// Index of the choice used when the answer is empty.
    #[arg(long, short = 'd')]
    pub default: Option<usize>,

    /// Do not offer `-1` to cancel the selection.
    #[arg(long, action)]
    pub no_cancel: bool,

    /// Accept an empty answer (with no default) as picking nothing.
    #[arg(long, action)]
    pub allow_null: bool,

    /// Path to the theme YAML file.
    ///
    /// If not provided, `~/.console-helpers/theme.yml` is used when it exists.
    #[arg(long, short = 't')]
    pub theme_path: Option<String>,

    /// Banner shown before the choices.
    #[arg(long)]
    pub title: Option<String>,

    /// The choices to pick from.
    #[arg(required = true, num_args(1..))]
    pub choices: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn select_options(&self) -> SelectOptions {
        SelectOptions {
            allow_cancel: !self.no_cancel,
            allow_null: self.allow_null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pick", "a"]);
        assert_eq!(args.prompt, "Choose an option");
        assert_eq!(args.default, None);
        assert!(args.theme_path.is_none());
        assert_eq!(args.select_options(), SelectOptions::default());
    }

    #[test]
    fn test_option_flags() {
        let args = Args::parse_from(["pick", "--no-cancel", "--allow-null", "a", "b"]);
        let options = args.select_options();
        assert!(!options.allow_cancel);
        assert!(options.allow_null);
        assert_eq!(args.choices, vec!["a", "b"]);
    }

    #[test]
    fn test_choices_are_required() {
        assert!(Args::try_parse_from(["pick"]).is_err());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["pick", "-p", "Env", "-d", "0", "-t", "/tmp/t.yml", "x"]);
        assert_eq!(args.prompt, "Env");
        assert_eq!(args.default, Some(0));
        assert_eq!(args.theme_path.as_deref(), Some("/tmp/t.yml"));
    }
}
