//! Readership report queries against the news database.
//!
//! Three reports, one connection. The article and author rankings read from
//! the session-scoped `article_views` view; the error-day report aggregates
//! the raw `log` table by calendar day. Ordering happens in SQL, so rows come
//! back ready to print.
//!
//! **Note**: `status` is compared against the literal string `200 OK`
//! everywhere. The log stores full status lines (`200 OK`, `404 NOT FOUND`),
//! not numeric codes, and any value other than `200 OK` counts as a failure.

use crate::schema::{ArticleCount, AuthorCount, ErrorDay};
use crate::{NewsDb, ReportError};

/// Rows the ranked article report prints.
pub const TOP_ARTICLES: usize = 3;

impl NewsDb {
    /// Three most-viewed articles, best first.
    ///
    /// Counts rows per title in `article_views`, so only successful `GET`
    /// requests are represented. Titles tied on views come back in whatever
    /// order the engine settles on.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InsufficientData`] if fewer than three titles
    /// have views, and [`ReportError::DuckDb`] if the view has not been
    /// defined for this session or the query fails.
    pub fn popular_articles(&self) -> Result<Vec<ArticleCount>, ReportError> {
        let mut stmt = self.conn.prepare(
            "SELECT title, COUNT(title)
             FROM article_views
             GROUP BY title
             ORDER BY COUNT(title) DESC
             LIMIT 3",
        )?;
        let counts: Vec<ArticleCount> = stmt
            .query_map([], |row| {
                Ok(ArticleCount {
                    title: row.get(0)?,
                    views: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if counts.len() < TOP_ARTICLES {
            return Err(ReportError::InsufficientData {
                expected: TOP_ARTICLES,
                found: counts.len(),
            });
        }
        tracing::debug!(rows = counts.len(), "ranked articles by views");
        Ok(counts)
    }

    /// Every author with readership, ranked by combined article views.
    ///
    /// Authors whose articles drew no successful requests have no rows in
    /// `article_views` and therefore do not appear.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuckDb`] if the view has not been defined for
    /// this session or the query fails.
    pub fn author_popularity(&self) -> Result<Vec<AuthorCount>, ReportError> {
        let mut stmt = self.conn.prepare(
            "SELECT author, COUNT(author)
             FROM article_views
             GROUP BY author
             ORDER BY COUNT(author) DESC",
        )?;
        let counts: Vec<AuthorCount> = stmt
            .query_map([], |row| {
                Ok(AuthorCount {
                    author: row.get(0)?,
                    views: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = counts.len(), "ranked authors by views");
        Ok(counts)
    }

    /// Days where at least one percent of `GET` requests failed, worst first.
    ///
    /// Both sides of the rate aggregate `GET` rows only, grouped by the
    /// calendar day of the request. Days with no `GET` traffic or no failures
    /// drop out of the inner join, so no row ever divides by zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuckDb`] if the query fails.
    pub fn high_error_days(&self) -> Result<Vec<ErrorDay>, ReportError> {
        let mut stmt = self.conn.prepare(
            "SELECT
                 (daily_errors.count / daily_queries.count::DOUBLE) * 100 AS error_percent,
                 daily_queries.day::DATE AS day
             FROM (
                 SELECT DATE_TRUNC('day', time) AS day, COUNT(*) AS count
                 FROM log
                 WHERE method = 'GET'
                 GROUP BY DATE_TRUNC('day', time)
             ) AS daily_queries
             JOIN (
                 SELECT DATE_TRUNC('day', time) AS day, COUNT(*) AS count
                 FROM log
                 WHERE method = 'GET' AND status != '200 OK'
                 GROUP BY DATE_TRUNC('day', time)
             ) AS daily_errors
             ON daily_queries.day = daily_errors.day
             WHERE daily_errors.count / daily_queries.count::DOUBLE >= 0.01
             ORDER BY error_percent DESC",
        )?;
        let days: Vec<ErrorDay> = stmt
            .query_map([], |row| {
                Ok(ErrorDay {
                    day: row.get(1)?,
                    error_percent: row.get(0)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = days.len(), "days over the error threshold");
        Ok(days)
    }
}
