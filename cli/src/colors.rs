use colored::{ColoredString, Colorize};

use crate::utils::format_number;

/// Terminal styling for summaries and warnings. Report files stay plain.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn actor_name(&self, name: &str) -> ColoredString {
        name.yellow().bold()
    }

    pub fn path(&self, path: &str) -> ColoredString {
        path.underline()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    /// A count with thousands separators.
    pub fn count(&self, count: usize) -> ColoredString {
        format_number(count).as_str().green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
