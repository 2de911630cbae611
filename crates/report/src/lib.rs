//! Error-comparison tables for solver runs.
//!
//! Given a solver trajectory and the problem's analytic solution, this crate
//! builds one [`Row`] per sample — step index, time, numerical value, exact
//! value, and absolute error — and renders them as a fixed-width console
//! table via [`Table`].

mod row;
mod table;

pub use row::{Row, rows};
pub use table::Table;
