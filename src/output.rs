//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::arith::Sum;
use crate::emit;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an `add` operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SumResult {
    /// The computed record
    #[serde(flatten)]
    pub sum: Sum,
}

/// Result of a `spell` operation
#[derive(Debug, Clone, Serialize)]
pub struct SpellResult {
    /// The text that was spelled
    pub text: String,
    /// One entry per character, in order
    pub chars: Vec<String>,
}

impl SumResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => {
                writeln!(out, "{} + {} = {}", self.sum.a, self.sum.b, self.sum.sum)
            },
            OutputMode::Json => render_json(self, out),
        }
    }
}

impl SpellResult {
    /// Build the result for `text`
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: emit::char_lines(text),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => emit::emit_chars(&self.text, out),
            OutputMode::Json => render_json(self, out),
        }
    }
}

fn render_json<T: Serialize>(value: &T, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value).unwrap_or_default())
}
