//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<(Option<&'static str>, Vec<String>)>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push((None, row));
    }

    /// Row printed in a single ANSI color.
    pub fn add_colored_row(&mut self, color: &'static str, row: Vec<String>) {
        self.rows.push((Some(color), row));
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|(_, r)| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: &[String]| {
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{:<w$}", cell, w = *w)
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&line(&self.headers));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
        out.push('\n');

        for (color, row) in &self.rows {
            match color {
                Some(c) => out.push_str(&format!("{}{}{}", c, line(row), RESET)),
                None => out.push_str(&line(row)),
            }
            out.push('\n');
        }

        out
    }
}
