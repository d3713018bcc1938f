//! The sparse table store and its population API.

use crate::border::BorderStyle;
use std::fmt::Display;

/// A textual table that can be streamed out as plain text.
///
/// Cells hold string values, each referred to by a row and a column number.
/// Data may be added in any order and at any index: writing past the current
/// extent grows the table, and cells that were never written read back as the
/// empty string. All cell content is center aligned when rendered.
///
/// # Example
///
/// ```rust
/// use textable::Textable;
///
/// let mut table = Textable::new();
/// table.set_row(0, ["id", "status"]);
/// table.set_cell(1, 0, 42);
/// table.set_cell(1, 1, "active");
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.cell_value(1, 0), "42");
/// println!("{table}");
/// ```
///
/// The table holds no lock: concurrent population or rendering of a shared
/// instance requires external synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Textable {
    rows: Vec<Vec<String>>,
    border: BorderStyle,
}

impl Textable {
    /// Create an empty table (zero rows) with the default [`BorderStyle`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border style used when rendering.
    ///
    /// ```rust
    /// use textable::{BorderStyle, Textable};
    ///
    /// let table = Textable::new().border(BorderStyle::Light);
    /// ```
    pub fn border(mut self, style: BorderStyle) -> Self {
        self.border = style;
        self
    }

    /// Set a single cell, converting `value` to its text form.
    ///
    /// Any type implementing [`Display`] is accepted. Arbitrarily large
    /// indices are permitted; intermediate rows and cells are created empty.
    pub fn set_cell<T: Display>(&mut self, row: usize, column: usize, value: T) {
        self.place(row, column, value.to_string());
    }

    /// Fill a row from an ordered sequence of values.
    ///
    /// Values land in columns 0, 1, 2, … in iteration order. An empty
    /// sequence is a no-op. Equivalent to the corresponding sequence of
    /// [`set_cell`](Self::set_cell) calls.
    ///
    /// For a heterogeneous argument list use the [`set_row!`](crate::set_row)
    /// macro.
    pub fn set_row<I>(&mut self, row: usize, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (column, value) in values.into_iter().enumerate() {
            self.place(row, column, value.to_string());
        }
    }

    /// Fill a column from an ordered sequence of values.
    ///
    /// Values land in rows 0, 1, 2, … in iteration order. An empty sequence
    /// is a no-op. Equivalent to the corresponding sequence of
    /// [`set_cell`](Self::set_cell) calls.
    ///
    /// For a heterogeneous argument list use the
    /// [`set_column!`](crate::set_column) macro.
    pub fn set_column<I>(&mut self, column: usize, values: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (row, value) in values.into_iter().enumerate() {
            self.place(row, column, value.to_string());
        }
    }

    /// The stored text at `(row, column)`, or `""` if the cell was never
    /// written. Out-of-range coordinates are not an error.
    pub fn cell_value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of stored rows: the maximum row index touched so far plus one,
    /// or zero for a fresh table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the widest stored row: the logical column extent used for
    /// rendering.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub(crate) fn border_style(&self) -> BorderStyle {
        self.border
    }

    /// The single mutation path: grow the outer and inner vectors as needed,
    /// then assign. Growth never overwrites existing cells.
    fn place(&mut self, row: usize, column: usize, value: String) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value;
    }
}
