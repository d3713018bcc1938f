//! End-to-end population and rendering behavior.

use proptest::prelude::*;
use std::fmt;
use textable::{set_column, set_row, BorderStyle, Textable};

#[test]
fn ragged_rows_render_as_a_rectangle() {
    let mut table = Textable::new();
    set_row!(table, 0, "a", "bb", "ccc");
    set_row!(table, 1, "x", "y");

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.cell_value(1, 2), "");
    assert_eq!(
        table.to_string(),
        "+---+----+-----+\n\
         | a | bb | ccc |\n\
         +---+----+-----+\n\
         | x | y  |     |\n\
         +---+----+-----+\n"
    );
}

#[test]
fn column_fill_on_an_empty_table() {
    let mut table = Textable::new();
    set_column!(table, 2, "p", "q", "r");

    assert_eq!(table.column_count(), 3);
    assert_eq!(
        table.to_string(),
        "+--+--+---+\n\
         |  |  | p |\n\
         +--+--+---+\n\
         |  |  | q |\n\
         +--+--+---+\n\
         |  |  | r |\n\
         +--+--+---+\n"
    );
}

#[test]
fn border_styles_share_the_same_geometry() {
    let populate = |table: &mut Textable| {
        table.set_row(0, ["left", "right"]);
        table.set_row(1, ["1", "2"]);
    };

    let mut ascii = Textable::new();
    populate(&mut ascii);
    let mut double = Textable::new().border(BorderStyle::Double);
    populate(&mut double);

    let ascii_out = ascii.to_string();
    let double_out = double.to_string();
    assert_eq!(
        ascii_out.lines().count(),
        double_out.lines().count(),
    );
    for (a, d) in ascii_out.lines().zip(double_out.lines()) {
        assert_eq!(a.chars().count(), d.chars().count());
    }
    assert_eq!(
        double_out,
        "╔══════╦═══════╗\n\
         ║ left ║ right ║\n\
         ╠══════╬═══════╣\n\
         ║  1   ║   2   ║\n\
         ╚══════╩═══════╝\n"
    );
}

/// A sink that fails after a fixed number of write calls.
struct Flaky {
    remaining: usize,
    buffer: String,
}

impl fmt::Write for Flaky {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.remaining == 0 {
            return Err(fmt::Error);
        }
        self.remaining -= 1;
        self.buffer.push_str(s);
        Ok(())
    }
}

#[test]
fn sink_failure_leaves_the_table_renderable() {
    let mut table = Textable::new();
    table.set_row(0, ["a", "b"]);
    let before = table.to_string();

    let mut sink = Flaky {
        remaining: 3,
        buffer: String::new(),
    };
    assert!(table.render(&mut sink).is_err());

    // The failed write changed nothing; a later attempt succeeds in full.
    assert_eq!(table.to_string(), before);
}

fn cell_text() -> impl Strategy<Value = String> {
    "[ -~]{0,8}"
}

proptest! {
    #[test]
    fn set_row_equals_sequential_set_cell(
        row in 0usize..8,
        values in prop::collection::vec(cell_text(), 0..6),
    ) {
        let mut by_row = Textable::new();
        by_row.set_row(row, values.iter());

        let mut by_cell = Textable::new();
        for (column, value) in values.iter().enumerate() {
            by_cell.set_cell(row, column, value);
        }

        prop_assert_eq!(by_row, by_cell);
    }

    #[test]
    fn set_column_equals_sequential_set_cell(
        column in 0usize..8,
        values in prop::collection::vec(cell_text(), 0..6),
    ) {
        let mut by_column = Textable::new();
        by_column.set_column(column, values.iter());

        let mut by_cell = Textable::new();
        for (row, value) in values.iter().enumerate() {
            by_cell.set_cell(row, column, value);
        }

        prop_assert_eq!(by_column, by_cell);
    }

    #[test]
    fn writes_are_read_back_and_extents_track_indices(
        writes in prop::collection::vec((0usize..10, 0usize..10, cell_text()), 1..20),
    ) {
        let mut table = Textable::new();
        for (row, column, value) in &writes {
            table.set_cell(*row, *column, value);
        }

        let max_row = writes.iter().map(|(row, _, _)| *row).max().unwrap();
        prop_assert_eq!(table.row_count(), max_row + 1);

        // The last write to each coordinate wins.
        let mut expected: std::collections::HashMap<(usize, usize), &str> =
            std::collections::HashMap::new();
        for (row, column, value) in &writes {
            expected.insert((*row, *column), value.as_str());
        }
        for ((row, column), value) in expected {
            prop_assert_eq!(table.cell_value(row, column), value);
        }
    }

    #[test]
    fn rendering_is_idempotent(
        writes in prop::collection::vec((0usize..6, 0usize..6, cell_text()), 0..12),
    ) {
        let mut table = Textable::new();
        for (row, column, value) in &writes {
            table.set_cell(*row, *column, value);
        }
        prop_assert_eq!(table.to_string(), table.to_string());
    }

    #[test]
    fn every_rendered_line_has_equal_width(
        writes in prop::collection::vec((0usize..6, 0usize..6, cell_text()), 1..12),
    ) {
        let mut table = Textable::new();
        for (row, column, value) in &writes {
            table.set_cell(*row, *column, value);
        }

        let rendered = table.to_string();
        let mut lines = rendered.lines();
        let first = lines.next().unwrap().len();
        for line in lines {
            prop_assert_eq!(line.len(), first);
        }
    }
}
