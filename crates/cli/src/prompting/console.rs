use std::io::{stdin, stdout, BufRead, StdinLock, Stdout, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use console_helpers_core::error::Result;

use super::colors::ColorScheme;

pub(crate) const EOL: &str = "\n";

/// Background used by the tone helpers
pub const TONE_BACKGROUND: Color = Color::Black;

/// Fixed text colors for status output, all drawn on [`TONE_BACKGROUND`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Blue,
    Red,
    Yellow,
    White,
    Gray,
}

impl Tone {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tone::Blue => Color::Cyan,
            Tone::Red => Color::Red,
            Tone::Yellow => Color::Yellow,
            Tone::White => Color::White,
            Tone::Gray => Color::Grey,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ConsoleSettings {
    pub scheme: ColorScheme,
    /// Rewrite each answered prompt line with the resolved value in the
    /// highlight color. Only makes sense when input is echoed by a terminal.
    pub redraw_echo: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::default(),
            redraw_echo: true,
        }
    }
}

/// Colored output and blocking prompts over a line reader and a writer.
///
/// Every write sets its colors, prints, then resets the terminal colors and
/// flushes, so nothing leaks between writes.
pub struct Console<R, W> {
    pub(crate) reader: R,
    pub(crate) writer: W,
    pub(crate) settings: ConsoleSettings,
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console over the process stdin and stdout.
    ///
    /// ```no_run
    /// use console_helpers::prompting::{Console, ConsoleSettings};
    ///
    /// let mut console = Console::stdio(ConsoleSettings::default());
    /// let name = console.read_line("Your name", Some("anonymous"))?;
    /// # Ok::<(), console_helpers_core::error::Error>(())
    /// ```
    #[must_use]
    pub fn stdio(settings: ConsoleSettings) -> Self {
        Self::new(stdin().lock(), stdout(), settings)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, settings: ConsoleSettings) -> Self {
        Self {
            reader,
            writer,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ConsoleSettings {
        &mut self.settings
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes `message` in the given colors, followed by a newline if
    /// `new_line` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the output fails.
    pub fn write_with_color(
        &mut self,
        text_color: Color,
        background_color: Color,
        message: &str,
        new_line: bool,
    ) -> Result<()> {
        queue!(
            self.writer,
            SetForegroundColor(text_color),
            SetBackgroundColor(background_color),
            Print(message),
            ResetColor
        )?;

        if new_line {
            queue!(self.writer, Print(EOL))?;
        }

        self.writer.flush()?;
        Ok(())
    }

    pub fn write_tone(&mut self, tone: Tone, message: &str, new_line: bool) -> Result<()> {
        self.write_with_color(tone.color(), TONE_BACKGROUND, message, new_line)
    }

    pub fn blue(&mut self, message: &str) -> Result<()> {
        self.write_tone(Tone::Blue, message, true)
    }

    pub fn red(&mut self, message: &str) -> Result<()> {
        self.write_tone(Tone::Red, message, true)
    }

    pub fn yellow(&mut self, message: &str) -> Result<()> {
        self.write_tone(Tone::Yellow, message, true)
    }

    pub fn white(&mut self, message: &str) -> Result<()> {
        self.write_tone(Tone::White, message, true)
    }

    pub fn gray(&mut self, message: &str) -> Result<()> {
        self.write_tone(Tone::Gray, message, true)
    }

    /// Writes a `## message ##` banner on its own line, preceded by a blank line.
    pub fn header(&mut self, message: &str) -> Result<()> {
        let scheme = self.settings.scheme;
        self.write_with_color(
            scheme.header_foreground,
            scheme.header_background,
            &format!("{EOL}## {message} ##"),
            true,
        )
    }

    /// Writes the prompt label, leaving the cursor after it for the answer.
    pub fn prompt(&mut self, message: &str) -> Result<()> {
        let scheme = self.settings.scheme;
        self.write_with_color(
            scheme.prompt_foreground,
            scheme.prompt_background,
            &prompt_label(message),
            false,
        )
    }
}

pub(crate) fn prompt_label(message: &str) -> String {
    format!("\t{message}: ")
}
