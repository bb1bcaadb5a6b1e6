//! Table rendering for CLI outputs. Column widths grow to fit content,
//! measured in display cells (ignoring ANSI colors) so everything lines up.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self, separator_char: &str) -> String {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| visible_width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(cell.as_str()));
                }
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad_cell(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        let sep = separator_char.chars().next().unwrap_or('-');
        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&sep.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    out.push_str(&pad_cell(cell, widths[i]));
                    out.push(' ');
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
