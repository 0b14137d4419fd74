//! Analysis panel modes.

use serde::{Deserialize, Serialize};

/// The three aggregate views offered by the statistical analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// Per-region box distribution of index values ("Bölgesel Dağılım").
    RegionalDistribution,
    /// Province counts per development tier ("Kademe Analizi").
    TierAnalysis,
    /// Pearson correlation heatmap over numeric columns ("Korelasyon Analizi").
    Correlation,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::RegionalDistribution,
        AnalysisMode::TierAnalysis,
        AnalysisMode::Correlation,
    ];

    /// The Turkish label shown in the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::RegionalDistribution => "Bölgesel Dağılım",
            AnalysisMode::TierAnalysis => "Kademe Analizi",
            AnalysisMode::Correlation => "Korelasyon Analizi",
        }
    }

    /// Resolve a selector label. Unrecognized labels yield `None`, which the
    /// analysis panel renders as no chart at all.
    pub fn from_label(label: &str) -> Option<AnalysisMode> {
        AnalysisMode::ALL.into_iter().find(|m| m.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for mode in AnalysisMode::ALL {
            assert_eq!(AnalysisMode::from_label(mode.label()), Some(mode));
        }
    }

    #[test]
    fn unknown_mode_yields_none() {
        assert_eq!(AnalysisMode::from_label("Trend Analizi"), None);
    }
}
