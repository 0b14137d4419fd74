//! Aggregate statistics for the analysis panel.
//!
//! Transforms query results from `sege-db` into the chart-ready shapes the
//! D3 bridge consumes: per-region five-number box summaries and a Pearson
//! correlation matrix over the numeric columns.

use std::collections::BTreeMap;

use sege_db::models::{NumericRow, RegionValue};
use serde::Serialize;

/// Five-number summary plus outliers for one box of a box plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoxSummary {
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Lowest observation within 1.5·IQR below Q1.
    pub whisker_low: f64,
    /// Highest observation within 1.5·IQR above Q3.
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// One region's box on the regional distribution chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionBox {
    pub region: String,
    #[serde(flatten)]
    pub summary: BoxSummary,
}

/// Annotated symmetric correlation matrix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major, `values[i][j]` = correlation of column i with column j.
    pub values: Vec<Vec<f64>>,
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Compute the box summary of a set of values. Returns `None` for an empty
/// set; a single value collapses the box to a point.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let (low_fence, high_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= high_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Some(BoxSummary {
        median,
        q1,
        q3,
        whisker_low,
        whisker_high,
        outliers,
    })
}

/// Group (region, value) pairs into one box per region, regions in
/// alphabetical order.
pub fn regional_distribution(values: &[RegionValue]) -> Vec<RegionBox> {
    let mut by_region: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for rv in values {
        by_region.entry(rv.region.as_str()).or_default().push(rv.value);
    }
    by_region
        .into_iter()
        .filter_map(|(region, values)| {
            box_summary(&values).map(|summary| RegionBox {
                region: region.to_string(),
                summary,
            })
        })
        .collect()
}

/// Pearson correlation of two equal-length columns. Zero-variance columns
/// correlate as 0 rather than NaN so the heatmap stays renderable.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    let mean = |v: &[f64]| v.iter().take(n).sum::<f64>() / n as f64;
    let (mx, my) = (mean(x), mean(y));
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let (dx, dy) = (x[i] - mx, y[i] - my);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Pairwise Pearson correlation over the three numeric columns of the active
/// year's table. Symmetric with a unit diagonal.
pub fn correlation_matrix(rows: &[NumericRow]) -> CorrelationMatrix {
    let labels = vec![
        "Endeks Değeri".to_string(),
        "Sıra".to_string(),
        "Kademe".to_string(),
    ];
    let columns: [Vec<f64>; 3] = [
        rows.iter().map(|r| r.index_value).collect(),
        rows.iter().map(|r| r.rank).collect(),
        rows.iter().map(|r| r.tier).collect(),
    ];

    let mut values = vec![vec![0.0; 3]; 3];
    for i in 0..3 {
        values[i][i] = 1.0;
        for j in (i + 1)..3 {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }
    CorrelationMatrix { labels, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_summary_of_known_values() {
        // 1..=9: median 5, Q1 3, Q3 7, no outliers.
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let summary = box_summary(&values).unwrap();
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.q1, 3.0);
        assert_eq!(summary.q3, 7.0);
        assert_eq!(summary.whisker_low, 1.0);
        assert_eq!(summary.whisker_high, 9.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn extreme_value_becomes_an_outlier() {
        let mut values: Vec<f64> = (1..=9).map(f64::from).collect();
        values.push(100.0);
        let summary = box_summary(&values).unwrap();
        assert_eq!(summary.outliers, vec![100.0]);
        assert!(summary.whisker_high <= 9.0);
    }

    #[test]
    fn empty_and_singleton_inputs() {
        assert!(box_summary(&[]).is_none());
        let summary = box_summary(&[2.5]).unwrap();
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q1, 2.5);
        assert_eq!(summary.whisker_high, 2.5);
    }

    #[test]
    fn regions_group_and_sort_alphabetically() {
        let values = vec![
            RegionValue { region: "Marmara".into(), value: 4.8 },
            RegionValue { region: "Ege".into(), value: 4.2 },
            RegionValue { region: "Marmara".into(), value: 3.9 },
        ];
        let boxes = regional_distribution(&values);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].region, "Ege");
        assert_eq!(boxes[1].region, "Marmara");
        assert_eq!(boxes[1].summary.median, (4.8 + 3.9) / 2.0);
    }

    #[test]
    fn pearson_known_relationships() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &up) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down) + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let rows: Vec<NumericRow> = (1..=10)
            .map(|i| NumericRow {
                index_value: 5.0 - 0.5 * f64::from(i),
                rank: f64::from(i),
                tier: f64::from((i + 1) / 2),
            })
            .collect();
        let matrix = correlation_matrix(&rows);
        assert_eq!(matrix.labels.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.values[i][i], 1.0);
            for j in 0..3 {
                assert!((matrix.values[i][j] - matrix.values[j][i]).abs() < 1e-12);
            }
        }
        // Index value falls as rank rises.
        assert!(matrix.values[0][1] < -0.99);
    }
}
