//! The in-memory table shape shared by all exports.

/// A row-oriented table: one header row plus string cells.
///
/// All accumulator shapes flatten into this before persistence, so the CSV
/// writer needs exactly one code path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows:   Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self { header, rows: Vec::new() }
    }

    /// Append one row.
    ///
    /// # Panics
    /// Panics in debug mode if the row width differs from the header width.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len(), "row width mismatch");
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
