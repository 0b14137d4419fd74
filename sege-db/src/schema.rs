//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `provinces`, holds every year snapshot side by side:
/// `(year, name)` is the primary key, `normalized_name` carries the
/// diacritic-folded upper-cased name used for boundary-file lookups.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS provinces (
        year TEXT NOT NULL,
        name TEXT NOT NULL,
        normalized_name TEXT NOT NULL,
        index_value REAL NOT NULL,
        rank_no INTEGER NOT NULL,
        tier INTEGER NOT NULL,
        region TEXT NOT NULL,
        PRIMARY KEY (year, name)
    );
    CREATE INDEX IF NOT EXISTS idx_provinces_year ON provinces(year);
    CREATE INDEX IF NOT EXISTS idx_provinces_norm ON provinces(year, normalized_name);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
