#![cfg(feature = "std")]
//! Line-oriented input sources feeding coordinates to a session.

use std::collections::VecDeque;
use std::io::BufRead;

/// A source of raw input lines.
pub trait PlayerInput {
    /// Next line, without its trailing newline; `None` once exhausted.
    fn fetch(&mut self) -> Option<String>;
}

/// Pre-recorded lines, consumed in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn fetch(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Lines read from any buffered reader, typically locked stdin.
pub struct KeyboardInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> KeyboardInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PlayerInput for KeyboardInput<R> {
    fn fetch(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Parse a `(row, col)` pair from text.
///
/// Accepts two integers separated by whitespace or a comma (`"3 6"`,
/// `"-1,4"`), or two adjacent digits (`"36"`). Range is not checked here.
pub fn parse_coordinate(input: &str) -> Option<(i32, i32)> {
    let input = input.trim();
    let parts: Vec<&str> = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [row, col] => Some((row.parse().ok()?, col.parse().ok()?)),
        [pair] if pair.len() == 2 && pair.chars().all(|ch| ch.is_ascii_digit()) => {
            let mut digits = pair.chars().filter_map(|ch| ch.to_digit(10));
            Some((digits.next()? as i32, digits.next()? as i32))
        }
        _ => None,
    }
}
