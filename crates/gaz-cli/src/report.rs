//! Orchestration of a report run against the news database file.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use gaz_reports::NewsDb;

use crate::render;

/// Database file every run reads. No flag overrides it; the reports are
/// defined against this one database.
pub const NEWS_DB_FILE: &str = "news.duckdb";

/// Run the full report against `db_file` and print it to stdout.
///
/// Sections stream straight out as they finish, so a failure in a later
/// section leaves the earlier ones on screen.
///
/// # Errors
///
/// Fails if the database file is missing or cannot be opened, if the session
/// view cannot be defined, or if any report query fails.
pub fn print_report(db_file: &str) -> anyhow::Result<()> {
    if !Path::new(db_file).is_file() {
        anyhow::bail!(
            "news database '{db_file}' not found. Run gzt from the directory that holds it."
        );
    }

    let db = NewsDb::open_local(db_file)
        .with_context(|| format!("failed to open news database '{db_file}'"))?;
    db.init_article_views()
        .context("failed to define the article_views view")?;

    tracing::debug!(db_file, "running readership report");
    let stdout = std::io::stdout();
    write_report(&db, &mut stdout.lock())
}

/// Write all three report sections to `out`, in their fixed order.
///
/// Each section queries first and prints second: a failing section leaves no
/// half-written heading behind, and sections already written stay written.
///
/// # Errors
///
/// Fails if a report query fails or `out` cannot be written.
pub fn write_report(db: &NewsDb, out: &mut impl Write) -> anyhow::Result<()> {
    let articles = db.popular_articles().context("failed to rank articles")?;
    writeln!(out, "\nMost Popular Articles:")?;
    for (i, article) in articles.iter().enumerate() {
        let line = render::ranked_line(i + 1, &article.title, article.views);
        writeln!(out, "{line}")?;
    }

    let authors = db.author_popularity().context("failed to rank authors")?;
    writeln!(out, "\nMost Popular Authors:")?;
    for (i, author) in authors.iter().enumerate() {
        let line = render::ranked_line(i + 1, &author.author, author.views);
        writeln!(out, "{line}")?;
    }

    let days = db.high_error_days().context("failed to scan for error days")?;
    writeln!(out, "\nHigh Request Error Days:")?;
    for day in &days {
        writeln!(out, "{}", render::error_day_line(day))?;
    }

    Ok(())
}
