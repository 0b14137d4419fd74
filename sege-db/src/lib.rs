//! In-memory SQLite layer for the SEGE dashboard.
//!
//! Parsed indicator snapshots are loaded into an in-memory SQLite database
//! and read back through typed query methods whose results serialize to JSON
//! for the Dioxus/D3.js frontend.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - Indicator CSV embedded via `include_str!` in the consuming app crate,
//!   parsed by `sege-core`, loaded per year snapshot
//! - Typed query methods returning serializable structs
//!
//! # Tables
//!
//! See [`schema::create_schema`]: a single `provinces` table keyed by
//! `(year, name)` with a normalized-name column for join-style lookups.
//! Aggregates (per-region values, tier counts) are derived on the fly with
//! `GROUP BY` queries.

pub mod models;
pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the per-year province tables.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied. Empty until
    /// snapshots are loaded with [`Database::load_snapshot`].
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sege_core::{parse_indicator_csv, YearKey};

    const SAMPLE: &str = "\
İller,Endeks Değeri,Sıra,Kademe,Bölge
İstanbul,4.8000,1,1,Marmara
Ankara,4.5123,2,1,İç Anadolu
";

    #[test]
    fn database_creates_successfully() {
        assert!(Database::new().is_ok());
    }

    #[test]
    fn clone_shares_the_same_data() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        let records = parse_indicator_csv(SAMPLE).unwrap();
        db.load_snapshot(YearKey::Y2003.label(), &records).unwrap();
        let provinces = db2.query_provinces(YearKey::Y2003.label()).unwrap();
        assert_eq!(provinces.len(), 2);
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let provinces = db.query_provinces("2003").unwrap();
        assert!(provinces.is_empty());
    }
}
