// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ANSI color palette
//!
//! Output is always colored; there is no terminal detection.

use std::fmt;

/// Escape sequence that clears every attribute
pub const RESET: &str = "\x1b[0m";

/// Colors and attributes used in the formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Red,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Bold,
}

impl Color {
    /// The ANSI escape sequence for this color
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[92m",
            Color::Red => "\x1b[91m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
            Color::Cyan => "\x1b[96m",
            Color::Bold => "\x1b[1m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wrap `text` in `color`, terminated by [`RESET`]
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    format!("{color}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_paint_wraps_with_reset() {
        assert_eq!(paint("ok", Color::Green), "\x1b[92mok\x1b[0m");
        assert_eq!(paint("", Color::Bold), "\x1b[1m\x1b[0m");
    }

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            Color::Green,
            Color::Red,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::Bold,
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), all.len());
    }
}
