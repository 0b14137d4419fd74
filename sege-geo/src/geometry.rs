//! Planar geometry primitives over lon/lat coordinates.
//!
//! Distances are plain Euclidean in degree space, matching the behavior of
//! the map's nearest-province click resolution at national scale. No
//! projection is applied; the boundary file's coordinate reference system is
//! taken as-is.

/// A lon/lat coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Ray-cast point-in-ring test. Points exactly on an edge may land on either
/// side; the nearest-shape distance of such points is ~0 either way.
pub fn point_in_ring(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (ring[i], ring[j]);
        if ((pi.lat > point.lat) != (pj.lat > point.lat))
            && (point.lon
                < (pj.lon - pi.lon) * (point.lat - pi.lat) / (pj.lat - pi.lat) + pi.lon)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Distance from a point to a segment.
pub fn point_segment_distance(point: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    let (dx, dy) = (b.lon - a.lon, b.lat - a.lat);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((point.lon - a.lon) * dx + (point.lat - a.lat) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.lon + t * dx, a.lat + t * dy);
    ((point.lon - cx).powi(2) + (point.lat - cy).powi(2)).sqrt()
}

/// Minimum distance from a point to a ring boundary.
pub fn point_ring_distance(point: GeoPoint, ring: &[GeoPoint]) -> f64 {
    let mut best = f64::INFINITY;
    for window in ring.windows(2) {
        best = best.min(point_segment_distance(point, window[0], window[1]));
    }
    // Rings are closed in well-formed GeoJSON, but guard the open case.
    if ring.len() >= 2 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if first != last {
            best = best.min(point_segment_distance(point, last, first));
        }
    }
    best
}

/// Signed shoelace area of a ring (degree² units; sign reflects winding).
pub fn ring_area(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        sum += (ring[j].lon + ring[i].lon) * (ring[j].lat - ring[i].lat);
        j = i;
    }
    sum / 2.0
}

/// Area centroid of a ring. Falls back to the vertex mean for degenerate
/// (zero-area) rings.
pub fn ring_centroid(ring: &[GeoPoint]) -> GeoPoint {
    let area = ring_area(ring);
    let n = ring.len();
    if area.abs() < f64::EPSILON || n < 3 {
        let (mut lon, mut lat) = (0.0, 0.0);
        for p in ring {
            lon += p.lon;
            lat += p.lat;
        }
        let count = n.max(1) as f64;
        return GeoPoint::new(lon / count, lat / count);
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    let mut j = n - 1;
    for i in 0..n {
        let cross = ring[j].lon * ring[i].lat - ring[i].lon * ring[j].lat;
        cx += (ring[j].lon + ring[i].lon) * cross;
        cy += (ring[j].lat + ring[i].lat) * cross;
        j = i;
    }
    GeoPoint::new(cx / (6.0 * area), cy / (6.0 * area))
}
