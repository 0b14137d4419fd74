//! Snapshot loading into the in-memory SQLite database.

use rusqlite::params;
use sege_core::{normalize_name, ProvinceRecord};

use crate::Database;

impl Database {
    /// Load one year snapshot of parsed province records.
    ///
    /// The normalized name is stored alongside the original so boundary-file
    /// lookups stay a plain indexed equality. `INSERT OR REPLACE` keeps the
    /// load idempotent: re-running a session's loader is a no-op in effect.
    pub fn load_snapshot(&self, year: &str, records: &[ProvinceRecord]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for record in records {
            conn.execute(
                "INSERT OR REPLACE INTO provinces
                     (year, name, normalized_name, index_value, rank_no, tier, region)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    year,
                    record.name,
                    normalize_name(&record.name),
                    record.index_value,
                    record.rank,
                    record.tier,
                    record.region,
                ],
            )?;
            count += 1;
        }
        log::info!("loaded {count} provinces for SEGE {year}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sege_core::parse_indicator_csv;

    const SAMPLE: &str = "\
İller,Endeks Değeri,Sıra,Kademe,Bölge
İstanbul,4.8000,1,1,Marmara
Ankara,4.5123,2,1,İç Anadolu
";

    #[test]
    fn loading_twice_is_idempotent() {
        let db = Database::new().unwrap();
        let records = parse_indicator_csv(SAMPLE).unwrap();
        db.load_snapshot("2003", &records).unwrap();
        db.load_snapshot("2003", &records).unwrap();
        assert_eq!(db.query_provinces("2003").unwrap().len(), 2);
    }

    #[test]
    fn years_are_kept_apart() {
        let db = Database::new().unwrap();
        let records = parse_indicator_csv(SAMPLE).unwrap();
        db.load_snapshot("2003", &records).unwrap();
        assert_eq!(db.query_provinces("2003").unwrap().len(), 2);
        assert!(db.query_provinces("2011").unwrap().is_empty());
    }
}
