//! Report error types.

/// Errors that can occur while querying the news database.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// A ranked report asked for more rows than the database holds.
    #[error("insufficient data: report needs {expected} rows, found {found}")]
    InsufficientData {
        /// Rows the report was asked to produce.
        expected: usize,
        /// Rows the query actually returned.
        found: usize,
    },
}
