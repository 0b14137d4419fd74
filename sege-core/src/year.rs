//! The fixed set of SEGE reference years.

use serde::{Deserialize, Serialize};

/// One of the three published SEGE snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YearKey {
    Y2003,
    Y2011,
    Y2017,
}

impl YearKey {
    /// All supported years, in chronological order.
    pub const ALL: [YearKey; 3] = [YearKey::Y2003, YearKey::Y2011, YearKey::Y2017];

    /// The year label as shown in selectors and legends ("2003", ...).
    pub fn label(&self) -> &'static str {
        match self {
            YearKey::Y2003 => "2003",
            YearKey::Y2011 => "2011",
            YearKey::Y2017 => "2017",
        }
    }

    /// Parse a selector value back into a year key.
    pub fn from_label(label: &str) -> Option<YearKey> {
        match label {
            "2003" => Some(YearKey::Y2003),
            "2011" => Some(YearKey::Y2011),
            "2017" => Some(YearKey::Y2017),
            _ => None,
        }
    }
}

impl std::fmt::Display for YearKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
