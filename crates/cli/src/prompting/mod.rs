//! Colored console output and blocking prompts.
//!
//! This module provides the interactive side of console-helpers: a
//! [`Console`] that writes colored text and asks the user for input, one line
//! at a time.
//!
//! # Key Features
//!
//! - **Colored Output**: Tone helpers, headers and prompt labels
//! - **Line Prompts**: Optional defaults, with the answer redrawn in a highlight color
//! - **Index Selection**: Numbered choices with `-1` to cancel
//! - **Mapped Selection**: Pick a value from a slice, out of range answers are asked again
//! - **Themes**: Colors loaded from a YAML theme file
//!
//! # Example
//!
//! ```no_run
//! use console_helpers::prompting::{Console, ConsoleSettings, SelectOptions, SelectedValue};
//!
//! let mut console = Console::stdio(ConsoleSettings::default());
//! let colors = ["red", "green", "blue"];
//! match console.select_from_displayed_choices("Color", &colors, None, SelectOptions::default())? {
//!     Some(SelectedValue::Value(color)) => console.blue(&format!("Picked {color}"))?,
//!     Some(SelectedValue::Cancelled) | None => {}
//! }
//! # Ok::<(), console_helpers_core::error::Error>(())
//! ```

pub mod colors;
pub mod console;
pub mod input;
pub mod selection;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use colors::{AsTermColor, ColorScheme};
pub use console::{Console, ConsoleSettings, Tone};
pub use selection::CANCEL_INDEX;
pub use types::{DefaultChoice, SelectOptions, SelectedIndex, SelectedValue};
