//! Console Helpers Library
//!
//! This crate provides colored terminal output and simple blocking prompts
//! for console programs: read a line with an optional default, or pick one
//! entry from a numbered list with support for cancelling.
//!
//! # Architecture
//!
//! - [`prompting`]: the [`prompting::Console`] and its selection helpers
//! - [`cli_args`]: command-line arguments of the `pick` binary
//!
//! # Examples
//!
//! The `pick` binary exposes selection to shell scripts:
//!
//! ```bash
//! # Prints the chosen color, exits with 1 when cancelled
//! color=$(pick --prompt "Color" --default 1 red green blue)
//!
//! # With a banner and the user's theme file
//! pick --title "Deploy" --theme-path ~/themes/dark.yml staging production
//! ```

pub mod cli_args;
pub mod prompting;
