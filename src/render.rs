//! Rendering of a table as an aligned, bordered text grid.
//!
//! Column widths are computed from the current contents (byte length of each
//! cell), every cell is center aligned within `width + 2` columns, and a
//! horizontal rule is emitted above the first row and after every row. Each
//! line, including the final rule, ends with `\n`. An empty table renders to
//! empty output.

use crate::border::BorderChars;
use crate::Textable;
use std::fmt;
use std::io;

/// Which horizontal rule of the grid is being drawn. Determines the corner
/// and joint characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

impl Textable {
    /// Write the rendered table to a character sink.
    ///
    /// Rendering is deterministic: the same contents always produce
    /// byte-identical output. A sink failure leaves the table untouched and
    /// re-renderable.
    pub fn render<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        let widths = self.column_widths();
        if widths.is_empty() {
            return Ok(());
        }
        let chars = self.border_style().chars();

        horizontal_rule(sink, &chars, Rule::Top, &widths)?;
        for row in 0..self.row_count() {
            self.content_line(sink, &chars, row, &widths)?;
            let rule = if row + 1 == self.row_count() {
                Rule::Bottom
            } else {
                Rule::Middle
            };
            horizontal_rule(sink, &chars, rule, &widths)?;
        }
        Ok(())
    }

    /// Write the rendered table to a byte sink.
    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self)
    }

    /// Per-column widths: the maximum byte length of any cell in the column.
    fn column_widths(&self) -> Vec<usize> {
        (0..self.column_count())
            .map(|column| {
                (0..self.row_count())
                    .map(|row| self.cell_value(row, column).len())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn content_line<W: fmt::Write>(
        &self,
        sink: &mut W,
        chars: &BorderChars,
        row: usize,
        widths: &[usize],
    ) -> fmt::Result {
        for (column, &width) in widths.iter().enumerate() {
            sink.write_char(chars.vertical)?;
            centered(sink, self.cell_value(row, column), width + 2)?;
        }
        sink.write_char(chars.vertical)?;
        sink.write_char('\n')
    }
}

impl fmt::Display for Textable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Draw one horizontal rule: a corner, a run of horizontal characters per
/// column sized `width + 2`, and a joint at each column boundary.
fn horizontal_rule<W: fmt::Write>(
    sink: &mut W,
    chars: &BorderChars,
    rule: Rule,
    widths: &[usize],
) -> fmt::Result {
    let (left, joint, right) = match rule {
        Rule::Top => (chars.top_left, chars.top_t, chars.top_right),
        Rule::Middle => (chars.left_t, chars.cross, chars.right_t),
        Rule::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
    };

    sink.write_char(left)?;
    for (column, &width) in widths.iter().enumerate() {
        if column > 0 {
            sink.write_char(joint)?;
        }
        for _ in 0..width + 2 {
            sink.write_char(chars.horizontal)?;
        }
    }
    sink.write_char(right)?;
    sink.write_char('\n')
}

/// Center `value` within `width` columns. When the leftover space is odd the
/// extra space goes on the right: `centered("hi", 5)` gives `" hi  "`.
fn centered<W: fmt::Write>(sink: &mut W, value: &str, width: usize) -> fmt::Result {
    let pad = width.saturating_sub(value.len());
    let left = pad / 2;
    for _ in 0..left {
        sink.write_char(' ')?;
    }
    sink.write_str(value)?;
    for _ in 0..pad - left {
        sink.write_char(' ')?;
    }
    Ok(())
}
