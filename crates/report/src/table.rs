use std::fmt;

use crate::Row;

/// Fixed-width console rendering of an error-comparison table.
///
/// The layout is right-aligned columns of widths 5, 8, 12, 12, and 12
/// joined by `" | "`, a separator rule of dashes, then one line per row
/// with t to 2 decimals and the value columns to 6 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table over the given rows.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the rows of the table.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} | {:>8} | {:>12} | {:>12} | {:>12}",
            "n", "t_n", "Euler y_n", "Exacta y(t_n)", "Error |y - y_n|"
        )?;
        writeln!(f, "{}", "-".repeat(62))?;

        for row in &self.rows {
            writeln!(
                f,
                "{:5} | {:8.2} | {:12.6} | {:12.6} | {:12.6}",
                row.step, row.t, row.euler, row.exact, row.error
            )?;
        }

        Ok(())
    }
}
