//! Shared test fixtures for the news database.

#[cfg(test)]
pub(crate) mod helpers {
    use duckdb::params;

    use crate::NewsDb;

    /// Tables the reports read, trimmed to the columns the queries touch.
    ///
    /// Production never creates these tables (the shipped database file
    /// carries them pre-populated), so the DDL lives with the tests.
    const CREATE_BASE_TABLES: &str = "
CREATE TABLE authors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE articles (
    slug TEXT NOT NULL,
    title TEXT NOT NULL,
    author INTEGER NOT NULL
);
CREATE TABLE log (
    path TEXT,
    method TEXT,
    status TEXT,
    time TIMESTAMP
);
";

    /// Create the pre-populated-table layout on an existing connection.
    pub(crate) fn create_base_tables(db: &NewsDb) {
        db.conn()
            .execute_batch(CREATE_BASE_TABLES)
            .expect("create base tables");
    }

    /// In-memory database with empty base tables.
    pub(crate) fn news_db_with_tables() -> NewsDb {
        let db = NewsDb::open_in_memory().expect("open in-memory db");
        create_base_tables(&db);
        db
    }

    pub(crate) fn insert_author(db: &NewsDb, id: i32, name: &str) {
        db.conn()
            .execute(
                "INSERT INTO authors (id, name) VALUES (?, ?)",
                params![id, name],
            )
            .expect("insert author");
    }

    pub(crate) fn insert_article(db: &NewsDb, slug: &str, title: &str, author: i32) {
        db.conn()
            .execute(
                "INSERT INTO articles (slug, title, author) VALUES (?, ?, ?)",
                params![slug, title, author],
            )
            .expect("insert article");
    }

    pub(crate) fn log_request(db: &NewsDb, path: &str, method: &str, status: &str, time: &str) {
        db.conn()
            .execute(
                "INSERT INTO log (path, method, status, time) VALUES (?, ?, ?, ?::TIMESTAMP)",
                params![path, method, status, time],
            )
            .expect("insert log row");
    }

    /// Log `count` successful GET requests for `slug`, spread across `day`
    /// at one-minute offsets.
    pub(crate) fn log_article_hits(db: &NewsDb, slug: &str, day: &str, count: u32) {
        for n in 0..count {
            let time = format!("{day} {:02}:{:02}:00", 8 + n / 60, n % 60);
            log_request(db, &format!("/article/{slug}"), "GET", "200 OK", &time);
        }
    }

    /// Log `ok` successful and `failed` failing GET requests on `day`.
    ///
    /// Paths resolve to no article, so none of these rows ever reach
    /// `article_views`.
    pub(crate) fn log_get_traffic(db: &NewsDb, day: &str, ok: u32, failed: u32) {
        for n in 0..ok {
            let time = format!("{day} {:02}:{:02}:00", 10 + n / 60, n % 60);
            log_request(db, "/", "GET", "200 OK", &time);
        }
        for n in 0..failed {
            let time = format!("{day} {:02}:{:02}:00", 20 + n / 60, n % 60);
            log_request(db, "/missing", "GET", "404 NOT FOUND", &time);
        }
    }

    /// Two authors, four articles, two days of traffic.
    ///
    /// Readership adds up to Candide 8, Munchausen 3, Zuul 2, Balloon 1,
    /// giving Ursula Vernon 10 views and Rudolf Erich Raspe 4. July 2nd
    /// carries one failed GET out of four; July 1st has no failures.
    pub(crate) fn seed_library_fixture(db: &NewsDb) {
        insert_author(db, 1, "Ursula Vernon");
        insert_author(db, 2, "Rudolf Erich Raspe");

        insert_article(db, "candide", "Candide", 1);
        insert_article(db, "zuul", "Zuul", 1);
        insert_article(db, "munchausen", "Munchausen", 2);
        insert_article(db, "balloon", "Balloon", 2);

        log_article_hits(db, "candide", "2016-07-01", 5);
        log_article_hits(db, "munchausen", "2016-07-01", 3);
        log_article_hits(db, "zuul", "2016-07-01", 2);
        log_article_hits(db, "balloon", "2016-07-01", 1);

        log_article_hits(db, "candide", "2016-07-02", 3);
        log_request(
            db,
            "/article/nowhere",
            "GET",
            "404 NOT FOUND",
            "2016-07-02 09:00:00",
        );
    }
}
