//! Variadic population macros.
//!
//! The collection methods on [`Textable`](crate::Textable) require a
//! homogeneous sequence. These macros accept a heterogeneous argument list —
//! any mix of types implementing `Display` — by stringifying each argument at
//! the call site and forwarding the result as one sequence.

/// Fill consecutive columns of a row from a heterogeneous argument list.
///
/// `set_row!(table, row, v1, v2, …)` has the same effect as calling
/// [`set_cell`](crate::Textable::set_cell) for columns 0, 1, 2, … in order.
/// With no values it is a no-op.
///
/// ```rust
/// use textable::{set_row, Textable};
///
/// let mut table = Textable::new();
/// set_row!(table, 0, "pi", 3.14159, true);
/// assert_eq!(table.cell_value(0, 1), "3.14159");
/// ```
#[macro_export]
macro_rules! set_row {
    ($table:expr, $row:expr $(, $value:expr)* $(,)?) => {{
        let values: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$value)),*];
        $table.set_row($row, values)
    }};
}

/// Fill consecutive rows of a column from a heterogeneous argument list.
///
/// `set_column!(table, column, v1, v2, …)` has the same effect as calling
/// [`set_cell`](crate::Textable::set_cell) for rows 0, 1, 2, … in order.
/// With no values it is a no-op.
///
/// ```rust
/// use textable::{set_column, Textable};
///
/// let mut table = Textable::new();
/// set_column!(table, 1, "a", 7);
/// assert_eq!(table.cell_value(1, 1), "7");
/// ```
#[macro_export]
macro_rules! set_column {
    ($table:expr, $column:expr $(, $value:expr)* $(,)?) => {{
        let values: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$value)),*];
        $table.set_column($column, values)
    }};
}
