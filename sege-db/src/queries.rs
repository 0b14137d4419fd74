//! Typed query methods over the province tables.
//!
//! All queries return structs from [`crate::models`] that serialize to JSON
//! for the D3.js chart bridge and the detail panel.

use rusqlite::{params, OptionalExtension};

use crate::models::{NumericRow, ProvinceInfo, RegionValue, TierCount};
use crate::Database;

fn province_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProvinceInfo> {
    Ok(ProvinceInfo {
        name: row.get(0)?,
        index_value: row.get(1)?,
        rank: row.get(2)?,
        tier: row.get(3)?,
        region: row.get(4)?,
    })
}

impl Database {
    /// All provinces of a year snapshot in as-loaded (source table) order.
    /// Feeds the province selector dropdown.
    pub fn query_provinces(&self, year: &str) -> anyhow::Result<Vec<ProvinceInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, index_value, rank_no, tier, region
             FROM provinces WHERE year = ?1 ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(params![year], province_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// One province by normalized name. First match wins when the source
    /// table carries duplicates.
    pub fn query_province(
        &self,
        year: &str,
        normalized_name: &str,
    ) -> anyhow::Result<Option<ProvinceInfo>> {
        let conn = self.conn.borrow();
        let row = conn
            .query_row(
                "SELECT name, index_value, rank_no, tier, region
                 FROM provinces WHERE year = ?1 AND normalized_name = ?2
                 ORDER BY rowid LIMIT 1",
                params![year, normalized_name],
                province_from_row,
            )
            .optional()?;
        Ok(row)
    }

    /// The first row of a year snapshot in source order; the detail panel's
    /// fallback when the remembered selection is absent from the year.
    pub fn query_first_province(&self, year: &str) -> anyhow::Result<Option<ProvinceInfo>> {
        let conn = self.conn.borrow();
        let row = conn
            .query_row(
                "SELECT name, index_value, rank_no, tier, region
                 FROM provinces WHERE year = ?1 ORDER BY rowid LIMIT 1",
                params![year],
                province_from_row,
            )
            .optional()?;
        Ok(row)
    }

    /// (region, index value) pairs for the regional distribution boxes.
    pub fn query_region_values(&self, year: &str) -> anyhow::Result<Vec<RegionValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT region, index_value FROM provinces
             WHERE year = ?1 ORDER BY region, rowid",
        )?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(RegionValue {
                    region: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Province counts per development tier, in natural tier order.
    pub fn query_tier_counts(&self, year: &str) -> anyhow::Result<Vec<TierCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT tier, COUNT(*) FROM provinces
             WHERE year = ?1 GROUP BY tier ORDER BY tier",
        )?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(TierCount {
                    tier: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// The numeric columns of every row, feeding the correlation matrix.
    pub fn query_numeric_rows(&self, year: &str) -> anyhow::Result<Vec<NumericRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT index_value, CAST(rank_no AS REAL), CAST(tier AS REAL)
             FROM provinces WHERE year = ?1 ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(NumericRow {
                    index_value: row.get(0)?,
                    rank: row.get(1)?,
                    tier: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sege_core::{normalize_name, parse_indicator_csv};

    const SAMPLE: &str = "\
İller,Endeks Değeri,Sıra,Kademe,Bölge
İstanbul,4.8000,1,1,Marmara
Ankara,4.5123,2,1,İç Anadolu
Konya,0.7500,26,2,İç Anadolu
Muş,-0.9919,81,5,Doğu Anadolu
";

    fn loaded() -> Database {
        let db = Database::new().unwrap();
        let records = parse_indicator_csv(SAMPLE).unwrap();
        db.load_snapshot("2003", &records).unwrap();
        db
    }

    #[test]
    fn provinces_come_back_in_source_order() {
        let db = loaded();
        let provinces = db.query_provinces("2003").unwrap();
        let names: Vec<_> = provinces.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["İstanbul", "Ankara", "Konya", "Muş"]);
    }

    #[test]
    fn lookup_by_normalized_name() {
        let db = loaded();
        let ankara = db
            .query_province("2003", &normalize_name("ankara"))
            .unwrap()
            .unwrap();
        assert_eq!(ankara.rank, 2);
        assert_eq!(ankara.region, "İç Anadolu");
        assert!(db.query_province("2003", "ATLANTIS").unwrap().is_none());
    }

    #[test]
    fn first_province_is_the_first_source_row() {
        let db = loaded();
        let first = db.query_first_province("2003").unwrap().unwrap();
        assert_eq!(first.name, "İstanbul");
        assert!(db.query_first_province("2011").unwrap().is_none());
    }

    #[test]
    fn tier_counts_sorted_by_tier() {
        let db = loaded();
        let counts = db.query_tier_counts("2003").unwrap();
        assert_eq!(
            counts
                .iter()
                .map(|c| (c.tier, c.count))
                .collect::<Vec<_>>(),
            [(1, 2), (2, 1), (5, 1)]
        );
    }

    #[test]
    fn region_values_cover_every_row() {
        let db = loaded();
        let values = db.query_region_values("2003").unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(
            values.iter().filter(|v| v.region == "İç Anadolu").count(),
            2
        );
    }

    #[test]
    fn numeric_rows_expose_three_columns() {
        let db = loaded();
        let rows = db.query_numeric_rows("2003").unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].rank, 1.0);
        assert_eq!(rows[3].tier, 5.0);
    }
}
