/// Column titles of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The free variables, in column order.
    pub variables:  Vec<String>,
    /// The expression exactly as the user wrote it. Titles the result column.
    pub expression: String,
}

impl Header {
    /// Returns every column title: the variables, then the expression.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.variables
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.expression.as_str()))
    }
}

/// One line of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The assignment, one value per variable in header order.
    pub values: Vec<bool>,
    /// The value of the expression under that assignment.
    pub result: bool,
}

impl Row {
    /// Returns every cell: the assignment values, then the result.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().copied().chain(std::iter::once(self.result))
    }
}

/// A complete truth table.
///
/// Holds one row per assignment of the free variables, `2^n` rows for `n`
/// variables, ordered as a binary counter over the columns with the leftmost
/// variable most significant and `false` before `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// The column titles.
    pub header: Header,
    /// The rows, in canonical order.
    pub rows:   Vec<Row>,
}

impl TruthTable {
    /// Returns the free variables, in column order.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.header.variables
    }

    /// Returns the expression the table was generated from.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.header.expression
    }

    /// Returns the rows, in canonical order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the result column, top to bottom.
    ///
    /// # Example
    /// ```
    /// let table = truthtable::generate("p \\lor q").unwrap();
    /// assert_eq!(table.results(), vec![false, true, true, true]);
    /// ```
    #[must_use]
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }
}
