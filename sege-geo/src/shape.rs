//! GeoJSON loading of province boundary shapes.

use anyhow::{bail, Context};
use serde_json::Value;

use crate::geometry::{
    point_in_ring, point_ring_distance, ring_area, ring_centroid, GeoPoint,
};

/// Embedded simplified first-level administrative boundaries.
pub static PROVINCE_GEOJSON: &str = include_str!("../../fixtures/tur_adm1.geojson");

/// GeoJSON property carrying the province name in the source file.
const SOURCE_NAME_KEY: &str = "NAME_1";

/// One province boundary: polygons, each a list of rings (exterior first,
/// holes after), each ring a list of lon/lat points.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvinceShape {
    /// Canonical `name` field, renamed from the source attribute on load.
    pub name: String,
    pub polygons: Vec<Vec<Vec<GeoPoint>>>,
}

impl ProvinceShape {
    /// Whether the point falls inside any polygon (holes excluded).
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.polygons.iter().any(|rings| {
            let mut iter = rings.iter();
            match iter.next() {
                Some(exterior) if point_in_ring(point, exterior) => {
                    !iter.any(|hole| point_in_ring(point, hole))
                }
                _ => false,
            }
        })
    }

    /// Planar distance from a point to this shape; zero inside.
    pub fn distance_to(&self, point: GeoPoint) -> f64 {
        if self.contains(point) {
            return 0.0;
        }
        self.polygons
            .iter()
            .flat_map(|rings| rings.iter())
            .map(|ring| point_ring_distance(point, ring))
            .fold(f64::INFINITY, f64::min)
    }

    /// Emit this shape's geometry as a GeoJSON value (Polygon when single,
    /// MultiPolygon otherwise) for the Leaflet bridge.
    pub fn geometry_value(&self) -> Value {
        let ring_value = |ring: &Vec<GeoPoint>| -> Value {
            Value::Array(
                ring.iter()
                    .map(|p| Value::Array(vec![p.lon.into(), p.lat.into()]))
                    .collect(),
            )
        };
        let polygon_value = |rings: &Vec<Vec<GeoPoint>>| -> Value {
            Value::Array(rings.iter().map(ring_value).collect())
        };
        match self.polygons.as_slice() {
            [single] => serde_json::json!({
                "type": "Polygon",
                "coordinates": polygon_value(single),
            }),
            many => serde_json::json!({
                "type": "MultiPolygon",
                "coordinates": Value::Array(many.iter().map(polygon_value).collect()),
            }),
        }
    }

    /// Area centroid of the largest polygon's exterior ring.
    pub fn centroid(&self) -> Option<GeoPoint> {
        self.polygons
            .iter()
            .filter_map(|rings| rings.first())
            .max_by(|a, b| {
                ring_area(a)
                    .abs()
                    .partial_cmp(&ring_area(b).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|ring| ring_centroid(ring))
    }
}

fn parse_ring(value: &Value) -> anyhow::Result<Vec<GeoPoint>> {
    let coords = value.as_array().context("ring must be an array")?;
    let mut ring = Vec::with_capacity(coords.len());
    for pair in coords {
        let pair = pair.as_array().context("coordinate must be an array")?;
        if pair.len() < 2 {
            bail!("coordinate needs lon and lat");
        }
        let lon = pair[0].as_f64().context("lon must be a number")?;
        let lat = pair[1].as_f64().context("lat must be a number")?;
        ring.push(GeoPoint::new(lon, lat));
    }
    Ok(ring)
}

fn parse_rings(value: &Value) -> anyhow::Result<Vec<Vec<GeoPoint>>> {
    value
        .as_array()
        .context("polygon must be an array of rings")?
        .iter()
        .map(parse_ring)
        .collect()
}

/// Parse a GeoJSON FeatureCollection of Polygon/MultiPolygon features into
/// province shapes, lifting `NAME_1` into the canonical `name` field.
///
/// Any structural problem is an error: without geometry nothing downstream
/// can render, so the caller halts and shows the load banner.
pub fn parse_feature_collection(payload: &str) -> anyhow::Result<Vec<ProvinceShape>> {
    let root: Value = serde_json::from_str(payload).context("boundary file is not valid JSON")?;
    if root.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        bail!("boundary file is not a GeoJSON FeatureCollection");
    }
    let features = root
        .get("features")
        .and_then(Value::as_array)
        .context("FeatureCollection has no features array")?;

    let mut shapes = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        let name = feature
            .get("properties")
            .and_then(|p| p.get(SOURCE_NAME_KEY))
            .and_then(Value::as_str)
            .with_context(|| format!("feature {index} has no {SOURCE_NAME_KEY} property"))?
            .to_string();

        let geometry = feature
            .get("geometry")
            .with_context(|| format!("feature {index} ({name}) has no geometry"))?;
        let coords = geometry
            .get("coordinates")
            .with_context(|| format!("feature {index} ({name}) has no coordinates"))?;

        let polygons = match geometry.get("type").and_then(Value::as_str) {
            Some("Polygon") => vec![parse_rings(coords)?],
            Some("MultiPolygon") => coords
                .as_array()
                .context("MultiPolygon coordinates must be an array")?
                .iter()
                .map(parse_rings)
                .collect::<anyhow::Result<_>>()?,
            other => bail!("feature {index} ({name}) has unsupported geometry type {other:?}"),
        };

        shapes.push(ProvinceShape { name, polygons });
    }

    if shapes.is_empty() {
        bail!("boundary file has no features");
    }
    Ok(shapes)
}

/// Index of the shape nearest to a point by planar distance. Strict
/// less-than comparison keeps the first-encountered shape on ties.
pub fn nearest_shape(shapes: &[ProvinceShape], point: GeoPoint) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, shape) in shapes.iter().enumerate() {
        let distance = shape.distance_to(point);
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_feature(name: &str, x: f64, y: f64) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{"NAME_1":"{name}"}},"geometry":{{"type":"Polygon","coordinates":[[[{x},{y}],[{x1},{y}],[{x1},{y1}],[{x},{y1}],[{x},{y}]]]}}}}"#,
            x1 = x + 1.0,
            y1 = y + 1.0,
        )
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        )
    }

    #[test]
    fn parses_and_renames_name_attribute() {
        let payload = collection(&[square_feature("Ankara", 32.0, 39.0)]);
        let shapes = parse_feature_collection(&payload).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].name, "Ankara");
    }

    #[test]
    fn rejects_non_collections_and_missing_names() {
        assert!(parse_feature_collection("{}").is_err());
        assert!(parse_feature_collection("not json").is_err());
        let no_name = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}]}"#;
        assert!(parse_feature_collection(no_name).is_err());
    }

    #[test]
    fn centroid_resolves_to_owning_shape() {
        let payload = collection(&[
            square_feature("Ankara", 32.0, 39.0),
            square_feature("Konya", 32.0, 37.0),
        ]);
        let shapes = parse_feature_collection(&payload).unwrap();
        let centroid = shapes[0].centroid().unwrap();
        let nearest = nearest_shape(&shapes, centroid).unwrap();
        assert_eq!(shapes[nearest].name, "Ankara");
    }

    #[test]
    fn outside_click_still_resolves_to_nearest() {
        let payload = collection(&[
            square_feature("Ankara", 32.0, 39.0),
            square_feature("Konya", 32.0, 37.0),
        ]);
        let shapes = parse_feature_collection(&payload).unwrap();
        // Well north of both squares, closer to the Ankara one.
        let nearest = nearest_shape(&shapes, GeoPoint::new(32.5, 45.0)).unwrap();
        assert_eq!(shapes[nearest].name, "Ankara");
    }

    #[test]
    fn tie_breaks_to_first_index() {
        let payload = collection(&[
            square_feature("A", 0.0, 0.0),
            square_feature("B", 2.0, 0.0),
        ]);
        let shapes = parse_feature_collection(&payload).unwrap();
        // Equidistant between the two squares.
        let nearest = nearest_shape(&shapes, GeoPoint::new(1.5, 0.5)).unwrap();
        assert_eq!(shapes[nearest].name, "A");
    }

    #[test]
    fn geometry_round_trips_through_geojson_value() {
        let payload = collection(&[square_feature("Ankara", 32.0, 39.0)]);
        let shapes = parse_feature_collection(&payload).unwrap();
        let value = shapes[0].geometry_value();
        assert_eq!(value["type"], "Polygon");
        assert_eq!(value["coordinates"][0][0][0], 32.0);
        assert_eq!(value["coordinates"][0][0][1], 39.0);
    }

    #[test]
    fn embedded_fixture_covers_all_provinces() {
        let shapes = parse_feature_collection(PROVINCE_GEOJSON).unwrap();
        assert_eq!(shapes.len(), 81);
        assert!(shapes.iter().any(|s| s.name == "Ankara"));
    }

    #[test]
    fn holes_are_excluded_from_containment() {
        let payload = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"NAME_1":"Donut"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]],[[1,1],[3,1],[3,3],[1,3],[1,1]]]}}]}"#;
        let shapes = parse_feature_collection(payload).unwrap();
        assert!(shapes[0].contains(GeoPoint::new(0.5, 0.5)));
        assert!(!shapes[0].contains(GeoPoint::new(2.0, 2.0)));
        assert!(shapes[0].distance_to(GeoPoint::new(2.0, 2.0)) > 0.0);
    }
}
