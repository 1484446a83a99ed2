//! Console Helpers Core Library
//!
//! This crate holds the parts of console-helpers that do not touch the
//! terminal: the shared error type, the theme file format and the code that
//! finds and loads it.
//!
//! # Examples
//!
//! Loading the user's theme, falling back to built-in colors when the
//! default file does not exist:
//!
//! ```no_run
//! use console_helpers_core::config::get_theme_path;
//! use console_helpers_core::file_handling::get_theme_definition;
//!
//! let theme = get_theme_definition(&get_theme_path(&None), false)?;
//! println!("Custom highlight: {:?}", theme.highlight);
//! # Ok::<(), console_helpers_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod theme_definitions;
