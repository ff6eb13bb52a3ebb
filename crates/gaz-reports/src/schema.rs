//! `DuckDB` view DDL and report row structs for the news database.
//!
//! **Scope**: the `articles`, `authors`, and `log` tables ship pre-populated
//! inside the database file; this crate never creates or writes them. The only
//! DDL the crate owns is the session-scoped `article_views` view that every
//! report reads from.

// ── View DDL ───────────────────────────────────────────────────────────────

/// Session-scoped view of successful article requests.
///
/// One row per `GET` request that reached an article page with status
/// `200 OK`, joined to the article title and the author's display name.
/// `TEMP` keeps the view out of the database file: it lives in the
/// connection's temporary catalog and vanishes when the connection closes.
pub const CREATE_ARTICLE_VIEWS: &str = "
CREATE TEMP VIEW article_views AS
SELECT
    au.name AS author,
    a.title AS title,
    l.time AS access_time
FROM articles AS a
JOIN log AS l ON l.path LIKE '/article/' || a.slug
JOIN authors AS au ON a.author = au.id
WHERE l.method = 'GET'
  AND l.status = '200 OK';
";

// ── Report rows ────────────────────────────────────────────────────────────

/// A ranked article with its view count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCount {
    /// Article title as stored in `articles.title`.
    pub title: String,
    /// Successful `GET` requests for the article.
    pub views: i64,
}

/// A ranked author with the combined view count of their articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    /// Author display name from `authors.name`.
    pub author: String,
    /// Successful `GET` requests across all of the author's articles.
    pub views: i64,
}

/// A day whose `GET` traffic failed at a rate of one percent or more.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDay {
    /// Calendar day the requests landed on.
    pub day: chrono::NaiveDate,
    /// Share of the day's `GET` requests that returned a non-`200 OK`
    /// status, as a percentage.
    pub error_percent: f64,
}
