use std::fmt;

use crate::interpreter::table::core::TruthTable;

/// No column is narrower than this, whatever its title.
pub const MIN_COLUMN_WIDTH: usize = 2;

/// Returns the glyph printed for a truth value.
#[must_use]
pub const fn glyph(value: bool) -> &'static str {
    if value { "T" } else { "F" }
}

/// Renders the table with `+---+` borders and centered cells.
///
/// Each column is as wide as its title, and at least
/// [`MIN_COLUMN_WIDTH`]. Separator lines frame the header and close the
/// table; there is no trailing newline.
///
/// # Example
/// ```
/// let table = truthtable::generate("\\lnot p").unwrap();
/// let expected = "\
/// +----+---------+
/// | p  | \\lnot p |
/// +----+---------+
/// | F  |    T    |
/// | T  |    F    |
/// +----+---------+";
/// assert_eq!(table.to_string(), expected);
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.header
                                     .titles()
                                     .map(|title| title.chars().count().max(MIN_COLUMN_WIDTH))
                                     .collect();
        let separator = separator(&widths);

        writeln!(f, "{separator}")?;
        write_line(f, &widths, self.header.titles())?;
        writeln!(f, "{separator}")?;
        for row in &self.rows {
            write_line(f, &widths, row.cells().map(glyph))?;
        }
        write!(f, "{separator}")
    }
}

fn separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_line<'a>(f: &mut fmt::Formatter<'_>,
                  widths: &[usize],
                  cells: impl Iterator<Item = &'a str>)
                  -> fmt::Result {
    write!(f, "|")?;
    for (cell, &width) in cells.zip(widths) {
        write!(f, " {cell:^width$} |")?;
    }
    writeln!(f)
}
