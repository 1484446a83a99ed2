//! Result and option types for prompts and selections.
//!
//! A selection that may be answered with "no value" returns
//! `Option<SelectedIndex>` or `Option<SelectedValue<T>>`; `None` is that
//! null answer, so the cancelled and value states never overlap with it.

use log::warn;

/// The user's answer to an index selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectedIndex {
    /// Any integer except the reserved cancel index; not bounds checked.
    Value(i32),
    Cancelled,
}

impl SelectedIndex {
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        match self {
            SelectedIndex::Value(index) => Some(*index),
            SelectedIndex::Cancelled => None,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SelectedIndex::Cancelled)
    }
}

/// The user's answer to a selection over a list of values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectedValue<T> {
    Value(T),
    Cancelled,
}

impl<T> SelectedValue<T> {
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            SelectedValue::Value(value) => Some(value),
            SelectedValue::Cancelled => None,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SelectedValue::Cancelled)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SelectedValue<U> {
        match self {
            SelectedValue::Value(value) => SelectedValue::Value(f(value)),
            SelectedValue::Cancelled => SelectedValue::Cancelled,
        }
    }
}

/// Flags controlling which answers a selection accepts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SelectOptions {
    /// Accept `-1` as a cancellation
    pub allow_cancel: bool,
    /// Accept an empty answer (with no default) as "no value"
    pub allow_null: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            allow_cancel: true,
            allow_null: false,
        }
    }
}

impl SelectOptions {
    #[must_use]
    pub fn allow_cancel(mut self, allow_cancel: bool) -> Self {
        self.allow_cancel = allow_cancel;
        self
    }

    #[must_use]
    pub fn allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }
}

/// The pre-selected choice of a mapped selection.
#[derive(Debug)]
pub enum DefaultChoice<'a, T> {
    Index(usize),
    /// Resolved to the position of the first equal choice
    Value(&'a T),
}

impl<T: PartialEq> DefaultChoice<'_, T> {
    /// Resolves the default to an index into `choices`.
    ///
    /// A default that does not point at one of the choices is dropped, so an
    /// empty answer is treated as if no default was given.
    pub fn resolve(&self, choices: &[T]) -> Option<i32> {
        let index = match self {
            DefaultChoice::Index(index) if *index < choices.len() => Some(*index),
            DefaultChoice::Index(index) => {
                warn!(
                    "Default index {index} is outside of the {} choices, ignoring it",
                    choices.len()
                );
                None
            }
            DefaultChoice::Value(value) => {
                let position = choices.iter().position(|choice| choice == *value);
                if position.is_none() {
                    warn!("Default value is not one of the choices, ignoring it");
                }
                position
            }
        };

        index.and_then(|index| i32::try_from(index).ok())
    }
}
