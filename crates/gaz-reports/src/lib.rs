//! # gaz-reports
//!
//! `DuckDB` access layer and readership reports for the Gazette news database.
//!
//! The database file ships pre-populated with three tables: `articles`,
//! `authors`, and a `log` of every HTTP request the site has served. Nothing
//! in this crate writes to those tables. The crate opens the file, defines
//! the session-scoped `article_views` view, and runs the readership and
//! error-rate queries behind the `gzt` report.
//!
//! ## Query architecture
//!
//! One connection serves the whole run. The article and author reports read
//! from `article_views`, so [`NewsDb::init_article_views`] must run once per
//! session before either of them. The error-day report scans `log` directly
//! and has no ordering requirement against the view.

pub mod error;
pub mod reports;
pub mod schema;

pub use error::ReportError;
pub use schema::{ArticleCount, AuthorCount, ErrorDay};

use duckdb::Connection;

/// Handle to the news database.
///
/// Wraps one `DuckDB` connection for the lifetime of a report run. Every
/// report method takes `&self`, so a single `NewsDb` threads through the
/// whole run without any global connection state.
pub struct NewsDb {
    conn: Connection,
}

impl NewsDb {
    /// Open a news database file.
    ///
    /// The file must already contain the `articles`, `authors`, and `log`
    /// tables; this crate never creates them.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuckDb`] if the file cannot be opened.
    pub fn open_local(path: &str) -> Result<Self, ReportError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an empty in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuckDb`] if the connection cannot be created.
    pub fn open_in_memory() -> Result<Self, ReportError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Access the underlying `DuckDB` connection.
    ///
    /// Exposed for ad-hoc queries in tests. Prefer the report methods on
    /// [`NewsDb`] for standard operations.
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Define the session-scoped `article_views` view.
    ///
    /// Runs once per session, after open and before
    /// [`popular_articles`](Self::popular_articles) or
    /// [`author_popularity`](Self::author_popularity). The view lives in the
    /// connection's temporary catalog and is never written to the database
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuckDb`] if the base tables are missing or the
    /// view definition does not bind.
    pub fn init_article_views(&self) -> Result<(), ReportError> {
        tracing::debug!("defining article_views session view");
        self.conn.execute_batch(schema::CREATE_ARTICLE_VIEWS)?;
        Ok(())
    }
}

#[cfg(test)]
mod test_support;
