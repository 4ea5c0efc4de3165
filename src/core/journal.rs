//! Session-scoped journal of mutating operations.
//! Lives and dies with the process, like the rest of the state; the
//! `history` command prints it as an aligned, colored listing.

use ansi_term::Colour;
use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn colour_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "done" => Colour::Cyan,
        "undone" => Colour::Blue,
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub at: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        operation: &str,
        target: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.entries.push(JournalEntry {
            at: Local::now(),
            operation: operation.to_string(),
            target: target.into(),
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Render the journal as an aligned listing, one row per operation.
    pub fn render(&self, use_colors: bool) -> String {
        // op+target column width, capped at 40
        let raw_max = self
            .entries
            .iter()
            .map(|e| UnicodeWidthStr::width(strip_ansi(&op_target(e)).as_str()))
            .max()
            .unwrap_or(0);
        let width = raw_max.min(40);

        let mut out = String::new();
        for (n, e) in self.entries.iter().enumerate() {
            let cell = pad_visible(&op_target(e), width);
            let cell = if use_colors {
                colour_for_operation(&e.operation).paint(cell).to_string()
            } else {
                cell
            };
            out.push_str(&format!(
                "{:>3}  {}  {}  {}\n",
                n + 1,
                e.at.format("%H:%M:%S"),
                cell,
                e.message
            ));
        }
        out
    }
}

fn op_target(e: &JournalEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

/// Right-pad to `width` display columns, ignoring any ANSI escapes.
fn pad_visible(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}
