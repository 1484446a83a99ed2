use std::fmt::Display;
use std::io::{BufRead, Write};

use console_helpers_core::error::{Error, Result};
use itertools::Itertools;
use log::debug;

use super::console::{Console, EOL};
use super::types::{DefaultChoice, SelectOptions, SelectedIndex, SelectedValue};

/// Answer reserved for cancelling a selection
pub const CANCEL_INDEX: i32 = -1;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Shows `choices` under the prompt and asks for a number.
    ///
    /// Keeps asking until the answer is an integer, which is returned as is
    /// with no bounds check. `-1` cancels when `allow_cancel` is set and is
    /// asked again otherwise. An empty answer with no default is `Ok(None)`
    /// when `allow_null` is set and is asked again otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is closed or the terminal fails.
    pub fn select_from_choices<S: AsRef<str>>(
        &mut self,
        prompt_text: &str,
        choices: &[S],
        default_index: Option<i32>,
        options: SelectOptions,
    ) -> Result<Option<SelectedIndex>> {
        let message = selection_message(prompt_text, choices, options.allow_cancel);
        let default = default_index.map(|index| index.to_string());

        loop {
            let Some(answer) = self.read_line(&message, default.as_deref())? else {
                if options.allow_null {
                    return Ok(None);
                }
                debug!("No answer to `{prompt_text}`, asking again");
                continue;
            };

            match answer.trim().parse::<i32>() {
                Ok(CANCEL_INDEX) if options.allow_cancel => {
                    self.yellow("\tCancelled!")?;
                    return Ok(Some(SelectedIndex::Cancelled));
                }
                Ok(CANCEL_INDEX) => debug!("Cancelling `{prompt_text}` is not allowed, asking again"),
                Ok(index) => return Ok(Some(SelectedIndex::Value(index))),
                Err(e) => debug!("`{answer}` is not a valid index ({e}), asking again"),
            }
        }
    }

    /// Asks the user to pick one of `choices`, labelled with `to_label`.
    ///
    /// Choices are listed as `index -- label`. An index that does not name a
    /// choice prints an error and the whole selection is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if `choices` is empty, the input is closed or the
    /// terminal fails.
    pub fn select_from_mapped_choices<'c, T, F>(
        &mut self,
        prompt_text: &str,
        choices: &'c [T],
        to_label: F,
        default: Option<DefaultChoice<'_, T>>,
        options: SelectOptions,
    ) -> Result<Option<SelectedValue<&'c T>>>
    where
        T: PartialEq,
        F: Fn(&T) -> String,
    {
        if choices.is_empty() {
            return Err(Error::NoChoices);
        }

        let labels = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| format!("\t\t{index} -- {}", to_label(choice)))
            .collect_vec();
        let default_index = default.and_then(|default| default.resolve(choices));

        loop {
            let index = match self.select_from_choices(prompt_text, &labels, default_index, options)? {
                None => return Ok(None),
                Some(SelectedIndex::Cancelled) => return Ok(Some(SelectedValue::Cancelled)),
                Some(SelectedIndex::Value(index)) => index,
            };

            if let Some(choice) = usize::try_from(index).ok().and_then(|i| choices.get(i)) {
                return Ok(Some(SelectedValue::Value(choice)));
            }

            debug!("Index {index} is outside of the {} choices", choices.len());
            self.red("\tInvalid selection.")?;
        }
    }

    /// [`Console::select_from_mapped_choices`] labelling each choice with its
    /// `Display` form.
    pub fn select_from_displayed_choices<'c, T>(
        &mut self,
        prompt_text: &str,
        choices: &'c [T],
        default: Option<DefaultChoice<'_, T>>,
        options: SelectOptions,
    ) -> Result<Option<SelectedValue<&'c T>>>
    where
        T: PartialEq + Display,
    {
        self.select_from_mapped_choices(prompt_text, choices, ToString::to_string, default, options)
    }
}

fn selection_message<S: AsRef<str>>(prompt_text: &str, choices: &[S], allow_cancel: bool) -> String {
    let listed = choices.iter().map(AsRef::<str>::as_ref).join(EOL);
    let mut message = format!("{prompt_text}:{EOL}{listed}{EOL}\tEnter a number");

    if allow_cancel {
        message.push_str(" (-1 to cancel)");
    }

    message
}
