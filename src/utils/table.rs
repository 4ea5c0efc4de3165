//! Table rendering utilities for session outputs.
//! Column widths are computed from content using display width, so titles
//! with wide characters or ANSI-colored cells still line up.

use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table whose column widths fit the headers and the given rows.
    pub fn fit(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let mut widths: Vec<usize> = headers.iter().map(|h| visible_width(h)).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(cell));
                }
            }
        }

        let columns = headers
            .iter()
            .zip(widths)
            .map(|(h, width)| Column {
                header: h.to_string(),
                width,
            })
            .collect();

        Self { columns, rows }
    }

    pub fn render(&self, separator_char: &str) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Separator line under the header
        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&separator_char.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad(&row[i], col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Right-pad to `width` display columns, ignoring ANSI escapes.
fn pad(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
