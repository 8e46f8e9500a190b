//! Crop suitability recommendations keyed by rain probability

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::probability::{band_for, ProbabilityBand};

/// Upper bound on recommendations returned per evaluation
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Below this rain probability the drought advisory is shown
pub const LOW_RAINFALL_WARNING_BELOW: i64 = 30;

pub const LOW_RAINFALL_WARNING: &str =
    "Low Rainfall Warning: consider drought-resistant crops and ensure irrigation systems are ready";

/// Qualitative suitability label attached to a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityTier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl std::fmt::Display for SuitabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitabilityTier::Excellent => write!(f, "excellent"),
            SuitabilityTier::Good => write!(f, "good"),
            SuitabilityTier::Moderate => write!(f, "moderate"),
            SuitabilityTier::Poor => write!(f, "poor"),
        }
    }
}

/// Water regime implied by the rain probability range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaterRegime {
    /// 70% and above
    HighWater,
    /// 40-69.99%
    ModerateWater,
    /// Below 40%
    DroughtTolerant,
}

/// A recommended crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CropRecord {
    pub name: String,
    pub suitability_tier: SuitabilityTier,
    /// 0-100
    pub score: u8,
    pub reason: String,
    pub water_requirement: String,
    pub harvest_time: String,
}

/// Static table row backing a [`CropRecord`]
#[derive(Debug, Clone, Copy)]
pub struct CropEntry {
    pub name: &'static str,
    pub tier: SuitabilityTier,
    pub score: u8,
    pub reason: &'static str,
    pub water_requirement: &'static str,
    pub harvest_time: &'static str,
}

impl From<&CropEntry> for CropRecord {
    fn from(entry: &CropEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            suitability_tier: entry.tier,
            score: entry.score,
            reason: entry.reason.to_string(),
            water_requirement: entry.water_requirement.to_string(),
            harvest_time: entry.harvest_time.to_string(),
        }
    }
}

const HIGH_WATER_CROPS: &[CropEntry] = &[
    CropEntry {
        name: "Rice",
        tier: SuitabilityTier::Excellent,
        score: 95,
        reason: "High rainfall is ideal for rice cultivation",
        water_requirement: "High",
        harvest_time: "3-4 months",
    },
    CropEntry {
        name: "Sugarcane",
        tier: SuitabilityTier::Excellent,
        score: 90,
        reason: "Thrives in wet conditions with abundant water",
        water_requirement: "High",
        harvest_time: "10-12 months",
    },
    CropEntry {
        name: "Jute",
        tier: SuitabilityTier::Good,
        score: 85,
        reason: "Requires consistent moisture for fiber quality",
        water_requirement: "High",
        harvest_time: "4-5 months",
    },
];

const MODERATE_WATER_CROPS: &[CropEntry] = &[
    CropEntry {
        name: "Maize",
        tier: SuitabilityTier::Excellent,
        score: 92,
        reason: "Moderate rainfall suits maize growth perfectly",
        water_requirement: "Moderate",
        harvest_time: "3-4 months",
    },
    CropEntry {
        name: "Wheat",
        tier: SuitabilityTier::Good,
        score: 88,
        reason: "Good for moderate moisture conditions",
        water_requirement: "Moderate",
        harvest_time: "4-5 months",
    },
    CropEntry {
        name: "Cotton",
        tier: SuitabilityTier::Good,
        score: 85,
        reason: "Balanced moisture supports healthy cotton growth",
        water_requirement: "Moderate",
        harvest_time: "5-6 months",
    },
];

const DROUGHT_TOLERANT_CROPS: &[CropEntry] = &[
    CropEntry {
        name: "Millets",
        tier: SuitabilityTier::Excellent,
        score: 94,
        reason: "Drought-resistant and ideal for low rainfall",
        water_requirement: "Low",
        harvest_time: "3-4 months",
    },
    CropEntry {
        name: "Pulses (Chickpea)",
        tier: SuitabilityTier::Excellent,
        score: 90,
        reason: "Thrives in drier conditions",
        water_requirement: "Low",
        harvest_time: "4-5 months",
    },
    CropEntry {
        name: "Groundnut",
        tier: SuitabilityTier::Good,
        score: 87,
        reason: "Well-suited for low to moderate rainfall",
        water_requirement: "Low-Moderate",
        harvest_time: "4-5 months",
    },
];

/// Crop lookup table: inclusive lower bound per regime, checked top to bottom
pub const CROP_TABLE: [(WaterRegime, Option<i64>, &[CropEntry]); 3] = [
    (WaterRegime::HighWater, Some(70), HIGH_WATER_CROPS),
    (WaterRegime::ModerateWater, Some(40), MODERATE_WATER_CROPS),
    (WaterRegime::DroughtTolerant, None, DROUGHT_TOLERANT_CROPS),
];

/// Water regime for a rain probability
pub fn water_regime_for(rain_probability: Decimal) -> WaterRegime {
    table_row(rain_probability).0
}

fn table_row(rain_probability: Decimal) -> (WaterRegime, &'static [CropEntry]) {
    CROP_TABLE
        .iter()
        .find(|(_, min, _)| min.map_or(true, |m| rain_probability >= Decimal::from(m)))
        .map(|(regime, _, crops)| (*regime, *crops))
        .unwrap_or((WaterRegime::DroughtTolerant, DROUGHT_TOLERANT_CROPS))
}

/// Recommended crops for a rain probability, most suitable first.
///
/// Each range yields its full table; the [`MAX_RECOMMENDATIONS`] cut never
/// bites with the current three-row tables.
pub fn recommend(rain_probability: Decimal) -> Vec<CropRecord> {
    let (_, crops) = table_row(rain_probability);
    crops
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(CropRecord::from)
        .collect()
}

/// Environmental readings fed to the recommendation panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrowingConditions {
    /// Percent
    pub rain_probability: Decimal,
    /// Celsius
    pub temperature: Decimal,
    /// Percent
    pub soil_moisture: Decimal,
}

/// Crop panel contents for one set of conditions
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropRecommendation {
    pub conditions: GrowingConditions,
    pub water_regime: WaterRegime,
    pub zone_band: ProbabilityBand,
    pub rain_zone: &'static str,
    pub zone_color: &'static str,
    pub summary: String,
    pub crops: Vec<CropRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_rainfall_warning: Option<&'static str>,
}

impl CropRecommendation {
    pub fn evaluate(conditions: GrowingConditions) -> Self {
        let rain = conditions.rain_probability;
        let zone_band = band_for(rain);

        let summary = format!(
            "Based on {}% rain probability, {}°C temperature, and {}% soil moisture",
            rain.normalize(),
            conditions.temperature.normalize(),
            conditions.soil_moisture.normalize()
        );

        let low_rainfall_warning = if rain < Decimal::from(LOW_RAINFALL_WARNING_BELOW) {
            Some(LOW_RAINFALL_WARNING)
        } else {
            None
        };

        Self {
            conditions,
            water_regime: water_regime_for(rain),
            zone_band,
            rain_zone: zone_band.rain_zone(),
            zone_color: zone_band.color(),
            summary,
            crops: recommend(rain),
            low_rainfall_warning,
        }
    }
}
