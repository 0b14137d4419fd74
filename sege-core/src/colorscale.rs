//! Three-stop linear color scale for the choropleth fill.

/// Fill used for provinces with no indicator match (and for any per-feature
/// styling failure).
pub const NO_DATA_COLOR: &str = "#808080";

/// Scale stops, low to high: red, yellow, green.
const STOPS: [[u8; 3]; 3] = [[0xff, 0x00, 0x00], [0xff, 0xff, 0x00], [0x00, 0xff, 0x00]];

/// Linear color scale over `[vmin, vmax]` with a midpoint stop.
///
/// Mirrors the legend shown on the map: index values at the bottom of the
/// active year's range render red, the middle yellow, the top green.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColorScale {
    vmin: f64,
    vmax: f64,
    caption: String,
}

impl LinearColorScale {
    /// Build a scale over the active year's value range. A degenerate range
    /// (vmax <= vmin) still produces a usable scale pinned to the low stop.
    pub fn new(vmin: f64, vmax: f64, caption: impl Into<String>) -> Self {
        Self {
            vmin,
            vmax,
            caption: caption.into(),
        }
    }

    /// Build the scale for one year's table; `None` when the table is empty.
    pub fn for_values(values: &[f64], caption: impl Into<String>) -> Option<Self> {
        let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
        let vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if vmin.is_finite() && vmax.is_finite() {
            Some(Self::new(vmin, vmax, caption))
        } else {
            None
        }
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Legend caption, e.g. "SEGE Endeks Değeri (2003)".
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Position of a value on the scale in `[0, 1]`, clamped. Monotonic in
    /// the value, which is what keeps the choropleth ordering honest.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.vmin) / span).clamp(0.0, 1.0)
    }

    /// Hex fill color for a value, interpolated across the three stops.
    pub fn color_for(&self, value: f64) -> String {
        let t = self.position(value);
        // Two segments: low->mid over [0, 0.5), mid->high over [0.5, 1].
        let (from, to, local) = if t < 0.5 {
            (STOPS[0], STOPS[1], t * 2.0)
        } else {
            (STOPS[1], STOPS[2], (t - 0.5) * 2.0)
        };
        let lerp = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * local).round() as u8
        };
        format!(
            "#{:02x}{:02x}{:02x}",
            lerp(from[0], to[0]),
            lerp(from[1], to[1]),
            lerp(from[2], to[2])
        )
    }
}
