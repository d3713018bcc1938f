//! # Textable — plain-text tables with centered cells
//!
//! `textable` builds a two-dimensional table of textual cells, addressable
//! sparsely by `(row, column)`, and renders it as an aligned, bordered plain
//! text grid. Populate cells in any order — the table grows on demand, unset
//! cells read back as the empty string, and every value that implements
//! `Display` converts to text at write time.
//!
//! ## Quick start
//!
//! ```rust
//! use textable::{set_row, Textable};
//!
//! let mut table = Textable::new();
//! table.set_row(0, ["Name", "Age"]);
//! set_row!(table, 1, "Alice", 30);
//! set_row!(table, 2, "Bob", 7);
//!
//! assert_eq!(table.to_string(), "\
//! +-------+-----+
//! | Name  | Age |
//! +-------+-----+
//! | Alice | 30  |
//! +-------+-----+
//! |  Bob  |  7  |
//! +-------+-----+
//! ");
//! ```
//!
//! ## Population surface
//!
//! - [`Textable::set_cell`] — one cell, any `Display` value, any index.
//! - [`Textable::set_row`] / [`Textable::set_column`] — fill an axis from an
//!   ordered sequence, starting at index 0 of the other axis.
//! - [`set_row!`] / [`set_column!`] — the same, from a heterogeneous
//!   argument list.
//!
//! All population paths are equivalent to the corresponding sequence of
//! `set_cell` calls; none of them fails for any index magnitude.
//!
//! ## Rendering conventions
//!
//! - Column widths are the maximum byte length of any cell in the column;
//!   each cell is centered in `width + 2` columns with the odd leftover
//!   space on the right. Byte-length sizing means multi-byte content is the
//!   caller's concern; supply UTF-8 and expect columns to line up only for
//!   single-width text.
//! - A horizontal rule is drawn above the first row and after every row.
//!   Borders default to ASCII (`+`, `-`, `|`); see [`BorderStyle`] for the
//!   Unicode box-drawing sets.
//! - Every line ends with `\n`; an empty table renders to empty output.
//! - Output is deterministic: equal contents render byte-identically.
//!
//! Rendering goes to any `fmt::Write` via [`Textable::render`], to any
//! `io::Write` via [`Textable::write_to`], or through `Display`
//! (`println!("{table}")`). The only failure mode is the sink's own error.
//!
//! ## Feature flags
//!
//! - `serde` — `Serialize`/`Deserialize` for [`Textable`] and
//!   [`BorderStyle`].

mod border;
mod macros;
mod render;
mod table;

pub use border::BorderStyle;
pub use table::Textable;
