use std::io::{BufRead, Write};

use crossterm::cursor::{MoveToColumn, MoveToPreviousLine};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use console_helpers_core::error::{Error, Result};
use log::debug;

use super::console::{prompt_label, Console, TONE_BACKGROUND};

/// What is echoed back when a prompt resolves to no value
const NULL_ECHO: &str = "null";

const TAB_WIDTH: usize = 8;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts for a single line of input.
    ///
    /// The prompt shows ` [default]` when a default is given. An empty answer
    /// resolves to the default, or to `None` without one; anything else is
    /// returned without its line ending. With echo redraw on, the typed line
    /// is then replaced by the resolved value in the highlight color.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default is an empty string
    /// - The input is closed before a line is read
    /// - Reading or writing the terminal fails
    pub fn read_line(&mut self, prompt_text: &str, default: Option<&str>) -> Result<Option<String>> {
        if default.is_some_and(str::is_empty) {
            return Err(Error::EmptyDefault);
        }

        let message = match default {
            Some(default) => format!("{prompt_text} [{default}]"),
            None => prompt_text.to_string(),
        };

        self.prompt(&message)?;
        let answer_column = label_end_column(&prompt_label(&message));

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(Error::InputClosed);
        }

        let typed = strip_line_ending(&input);
        let resolved = if typed.is_empty() {
            debug!("Empty answer, resolving to default {default:?}");
            default.map(str::to_string)
        } else {
            Some(typed.to_string())
        };

        if self.settings.redraw_echo {
            self.redraw_answer(answer_column, resolved.as_deref())?;
        }

        Ok(resolved)
    }

    /// Moves back onto the answered line, clears what was typed and writes
    /// the resolved value in its place.
    fn redraw_answer(&mut self, column: u16, value: Option<&str>) -> Result<()> {
        queue!(
            self.writer,
            MoveToPreviousLine(1),
            MoveToColumn(column),
            Clear(ClearType::UntilNewLine)
        )?;

        let highlight = self.settings.scheme.highlight;
        self.write_with_color(highlight, TONE_BACKGROUND, value.unwrap_or(NULL_ECHO), true)
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Column the cursor sits at after printing `label`, counting from the
/// label's last line and expanding tabs.
fn label_end_column(label: &str) -> u16 {
    let last_line = label.rsplit('\n').next().unwrap_or_default();
    let column = last_line.chars().fold(0, |column, c| match c {
        '\t' => (column / TAB_WIDTH + 1) * TAB_WIDTH,
        _ => column + 1,
    });

    u16::try_from(column).unwrap_or(u16::MAX)
}
