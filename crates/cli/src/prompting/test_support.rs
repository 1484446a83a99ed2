use std::io::Cursor;

use super::console::{Console, ConsoleSettings};

pub(crate) type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// A console reading `input` that does not redraw answered prompts.
pub(crate) fn console(input: &str) -> TestConsole {
    let settings = ConsoleSettings {
        redraw_echo: false,
        ..ConsoleSettings::default()
    };
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), settings)
}

pub(crate) fn echoing_console(input: &str) -> TestConsole {
    Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        ConsoleSettings::default(),
    )
}

pub(crate) fn output(console: TestConsole) -> String {
    let (_, writer) = console.into_parts();
    String::from_utf8(writer).unwrap()
}

/// Removes CSI escape sequences (colors, cursor moves, clears).
pub(crate) fn strip_ansi(raw: &str) -> String {
    let mut plain = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            plain.push(c);
            continue;
        }

        if chars.next() == Some('[') {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        }
    }

    plain
}
