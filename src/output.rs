//! Terminal output for the swatch CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, Cargo
//! style. Stdout is left for what the user asked for: hex lists, CSS, JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::{Colour, PaletteSlot};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Status printer. Colour is on only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "  Generating triadic palette"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Severity label for validation output.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    /// A two-cell block filled with `colour`, or nothing without colour.
    pub fn chip(&self, colour: Colour) -> String {
        if self.color {
            format!("\x1b[48;2;{};{};{}m  {RESET} ", colour.r, colour.g, colour.b)
        } else {
            String::new()
        }
    }

    /// One line per palette slot: chip, index, hex, lock marker.
    pub fn slot_line(&self, index: usize, slot: &PaletteSlot) -> String {
        let lock = if slot.locked { " (locked)" } else { "" };
        format!(
            "{}{} {}{}",
            self.chip(slot.colour()),
            self.dim(&format!("{}", index + 1)),
            slot.hex(),
            self.dim(lock)
        )
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// `plural(1, "colour", "colours")` is "1 colour".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "colour", "colours"), "1 colour");
        assert_eq!(plural(0, "template", "templates"), "0 templates");
        assert_eq!(plural(5, "colour", "colours"), "5 colours");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/palette.png");
        assert_eq!(display_path(p), "/nonexistent/palette.png");
    }

    #[test]
    fn test_plain_slot_line() {
        let printer = Printer::plain();
        let mut slot = PaletteSlot::new(Colour::new(0x1e, 0x3a, 0x8a));
        assert_eq!(printer.slot_line(0, &slot), "1 #1E3A8A");

        slot.locked = true;
        assert_eq!(printer.slot_line(2, &slot), "3 #1E3A8A (locked)");
    }

    #[test]
    fn test_plain_has_no_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.chip(Colour::WHITE), "");
        assert_eq!(printer.bold("x"), "x");
        assert_eq!(printer.severity("error", true), "error");
    }
}
