//! Rain probability bands and their display colors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Five ordered rain probability bands, highest first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    /// 70% and above
    VeryHigh,
    /// 50-69.99%
    High,
    /// 30-49.99%
    Moderate,
    /// 15-29.99%
    Low,
    /// Below 15%
    VeryLow,
}

/// Band lookup table: inclusive lower bound per band, checked top to bottom.
/// The last row has no lower bound so every input lands somewhere.
pub const BAND_TABLE: [(ProbabilityBand, Option<i64>); 5] = [
    (ProbabilityBand::VeryHigh, Some(70)),
    (ProbabilityBand::High, Some(50)),
    (ProbabilityBand::Moderate, Some(30)),
    (ProbabilityBand::Low, Some(15)),
    (ProbabilityBand::VeryLow, None),
];

impl ProbabilityBand {
    /// Hex color used for map fills and the legend
    pub fn color(&self) -> &'static str {
        match self {
            ProbabilityBand::VeryHigh => "#1e3a8a",
            ProbabilityBand::High => "#3b82f6",
            ProbabilityBand::Moderate => "#eab308",
            ProbabilityBand::Low => "#f97316",
            ProbabilityBand::VeryLow => "#fca5a5",
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            ProbabilityBand::VeryHigh => "dark blue",
            ProbabilityBand::High => "light blue",
            ProbabilityBand::Moderate => "yellow",
            ProbabilityBand::Low => "orange",
            ProbabilityBand::VeryLow => "light red",
        }
    }

    /// Legend text for the band's percentage range
    pub fn range_label(&self) -> &'static str {
        match self {
            ProbabilityBand::VeryHigh => "70-100%",
            ProbabilityBand::High => "50-69%",
            ProbabilityBand::Moderate => "30-49%",
            ProbabilityBand::Low => "15-29%",
            ProbabilityBand::VeryLow => "0-14%",
        }
    }

    /// Coarse rain zone shown next to crop recommendations
    pub fn rain_zone(&self) -> &'static str {
        match self {
            ProbabilityBand::VeryHigh => "High rainfall zone",
            ProbabilityBand::High => "Moderate-high zone",
            ProbabilityBand::Moderate => "Moderate zone",
            ProbabilityBand::Low => "Low-moderate zone",
            ProbabilityBand::VeryLow => "Low rainfall zone",
        }
    }

    /// Inclusive lower bound, `None` for the open-ended bottom band
    pub fn lower_bound(&self) -> Option<Decimal> {
        BAND_TABLE
            .iter()
            .find(|(band, _)| band == self)
            .and_then(|(_, min)| min.map(Decimal::from))
    }
}

impl std::fmt::Display for ProbabilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbabilityBand::VeryHigh => write!(f, "Very High"),
            ProbabilityBand::High => write!(f, "High"),
            ProbabilityBand::Moderate => write!(f, "Moderate"),
            ProbabilityBand::Low => write!(f, "Low"),
            ProbabilityBand::VeryLow => write!(f, "Very Low"),
        }
    }
}

/// Result of classifying a probability
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Classification {
    pub band: ProbabilityBand,
    pub color: &'static str,
    pub color_name: &'static str,
}

impl From<ProbabilityBand> for Classification {
    fn from(band: ProbabilityBand) -> Self {
        Self {
            band,
            color: band.color(),
            color_name: band.color_name(),
        }
    }
}

/// One row of the map legend
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LegendEntry {
    pub band: ProbabilityBand,
    pub color: &'static str,
    pub range: &'static str,
}

/// Band for a rain probability percentage.
///
/// Values outside 0-100 are classified by the same thresholds without
/// clamping; a boundary value belongs to the higher band.
pub fn band_for(probability: Decimal) -> ProbabilityBand {
    BAND_TABLE
        .iter()
        .find(|(_, min)| min.map_or(true, |m| probability >= Decimal::from(m)))
        .map(|(band, _)| *band)
        .unwrap_or(ProbabilityBand::VeryLow)
}

/// Classify a rain probability into its band and display color
pub fn classify(probability: Decimal) -> Classification {
    band_for(probability).into()
}

/// Legend rows, highest band first
pub fn legend() -> Vec<LegendEntry> {
    BAND_TABLE
        .iter()
        .map(|(band, _)| LegendEntry {
            band: *band,
            color: band.color(),
            range: band.range_label(),
        })
        .collect()
}
