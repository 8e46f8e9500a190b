//! Weather sample lookup backed by a static fixture

use chrono::NaiveDate;
use shared::{validate_weather_sample, WeatherSample};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Source of daily weather samples.
///
/// The fixture implementation stands in for a forecasting backend; callers
/// only rely on `lookup` returning `None` when nothing matches.
pub trait WeatherSource: Send + Sync {
    /// Sample nearest to the location on exactly `date`, if one lies within
    /// the source's matching tolerance
    fn lookup(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<WeatherSample>;

    /// Number of samples available
    fn sample_count(&self) -> usize;
}

/// In-memory weather fixture indexed by date
#[derive(Debug, Clone, Default)]
pub struct WeatherDataset {
    by_date: HashMap<NaiveDate, Vec<WeatherSample>>,
    tolerance_degrees: f64,
    count: usize,
}

impl WeatherDataset {
    /// Build a dataset, dropping implausible samples
    pub fn new(samples: Vec<WeatherSample>, tolerance_degrees: f64) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<WeatherSample>> = HashMap::new();
        let mut count = 0;

        for sample in samples {
            if let Err(reason) = validate_weather_sample(&sample) {
                tracing::warn!(
                    lat = sample.lat,
                    lon = sample.lon,
                    date = %sample.date,
                    "Skipping weather sample: {}",
                    reason
                );
                continue;
            }
            by_date.entry(sample.date).or_default().push(sample);
            count += 1;
        }

        Self {
            by_date,
            tolerance_degrees,
            count,
        }
    }

    /// Load a fixture from disk; `.csv` files are read as CSV, anything else
    /// as a JSON array. An unreadable file yields an empty dataset.
    pub fn load(path: impl AsRef<Path>, tolerance_degrees: f64) -> Self {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let samples = match std::fs::File::open(path) {
            Ok(file) if is_csv => parse_csv(file),
            Ok(mut file) => {
                let mut contents = String::new();
                match file.read_to_string(&mut contents) {
                    Ok(_) => parse_json(&contents),
                    Err(e) => {
                        tracing::warn!("Failed to read weather dataset {}: {}", path.display(), e);
                        Vec::new()
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Weather dataset {} unavailable: {}", path.display(), e);
                Vec::new()
            }
        };

        let dataset = Self::new(samples, tolerance_degrees);
        tracing::info!(
            "Loaded {} weather samples from {}",
            dataset.count,
            path.display()
        );
        dataset
    }
}

impl WeatherSource for WeatherDataset {
    fn lookup(&self, lat: f64, lon: f64, date: NaiveDate) -> Option<WeatherSample> {
        let tolerance = self.tolerance_degrees;
        let distance = |s: &WeatherSample| (s.lat - lat).powi(2) + (s.lon - lon).powi(2);

        self.by_date
            .get(&date)?
            .iter()
            .filter(|s| (s.lat - lat).abs() < tolerance && (s.lon - lon).abs() < tolerance)
            .min_by(|a, b| {
                distance(a)
                    .partial_cmp(&distance(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned()
    }

    fn sample_count(&self) -> usize {
        self.count
    }
}

/// Parse a JSON array of samples, skipping records that don't deserialize
pub fn parse_json(contents: &str) -> Vec<WeatherSample> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(contents) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Weather dataset is not a JSON array: {}", e);
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::warn!("Skipping malformed weather record {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Parse CSV samples with a header row, skipping malformed rows
pub fn parse_csv<R: Read>(reader: R) -> Vec<WeatherSample> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    reader
        .deserialize::<WeatherSample>()
        .enumerate()
        .filter_map(|(index, row)| match row {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::warn!("Skipping malformed weather row {}: {}", index + 1, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(lat: f64, lon: f64, day: u32, rain: i64) -> WeatherSample {
        WeatherSample {
            lat,
            lon,
            date: date(2026, 10, day),
            rain_probability: Decimal::from(rain),
            precipitation: Decimal::from(4),
            temp_high: Decimal::from(30),
            temp_low: Decimal::from(20),
            humidity: Decimal::from(60),
            soil_moisture: Decimal::from(40),
            wind_speed: Decimal::from(10),
        }
    }

    #[test]
    fn test_lookup_picks_nearest_within_tolerance() {
        let dataset = WeatherDataset::new(
            vec![sample(28.9, 77.5, 20, 10), sample(28.65, 77.25, 20, 80)],
            0.5,
        );
        let found = dataset.lookup(28.6139, 77.209, date(2026, 10, 20)).unwrap();
        assert_eq!(found.rain_probability, Decimal::from(80));
    }

    #[test]
    fn test_lookup_requires_exact_date() {
        let dataset = WeatherDataset::new(vec![sample(28.6, 77.2, 20, 80)], 0.5);
        assert!(dataset.lookup(28.6, 77.2, date(2026, 10, 21)).is_none());
    }

    #[test]
    fn test_lookup_outside_tolerance_is_absent() {
        let dataset = WeatherDataset::new(vec![sample(28.6, 77.2, 20, 80)], 0.5);
        assert!(dataset.lookup(29.2, 77.2, date(2026, 10, 20)).is_none());
        assert!(dataset.lookup(28.6, 76.6, date(2026, 10, 20)).is_none());
    }

    #[test]
    fn test_ties_keep_fixture_order() {
        let dataset = WeatherDataset::new(
            vec![sample(28.75, 77.25, 20, 11), sample(28.25, 77.25, 20, 22)],
            0.5,
        );
        let found = dataset.lookup(28.5, 77.25, date(2026, 10, 20)).unwrap();
        assert_eq!(found.rain_probability, Decimal::from(11));
    }

    #[test]
    fn test_implausible_samples_are_dropped() {
        let mut bad = sample(28.6, 77.2, 20, 80);
        bad.humidity = Decimal::from(250);
        let dataset = WeatherDataset::new(vec![bad], 0.5);
        assert_eq!(dataset.sample_count(), 0);
        assert!(dataset.lookup(28.6, 77.2, date(2026, 10, 20)).is_none());
    }

    #[test]
    fn test_parse_json_skips_malformed_records() {
        let json = r#"[
            {"lat": 19.076, "lon": 72.8777, "date": "2026-10-20", "rainProbability": 55,
             "precipitation": 6, "tempHigh": 31, "tempLow": 25, "humidity": 80,
             "soilMoisture": 58, "windSpeed": 12},
            {"lat": "somewhere", "date": "2026-10-20"}
        ]"#;
        let samples = parse_json(json);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].rain_probability, Decimal::from(55));
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        assert!(parse_json(r#"{"lat": 1}"#).is_empty());
    }

    #[test]
    fn test_parse_csv() {
        let csv = "lat,lon,date,rainProbability,precipitation,tempHigh,tempLow,humidity,soilMoisture,windSpeed\n\
                   12.9716,77.5946,2026-10-20,35,2.5,29,19,65,44,9\n\
                   bad,row\n";
        let samples = parse_csv(csv.as_bytes());
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].precipitation, "2.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dataset = WeatherDataset::load("/definitely/not/here.json", 0.5);
        assert_eq!(dataset.sample_count(), 0);
    }

    #[test]
    fn test_bundled_fixture_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mock_weather_data.json");
        let dataset = WeatherDataset::load(path, 0.5);
        assert_eq!(dataset.sample_count(), 98);
        assert!(dataset.lookup(28.6139, 77.209, date(2026, 10, 19)).is_some());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let samples = vec![sample(28.6, 77.2, 20, 80)];
        write!(file, "{}", serde_json::to_string(&samples).unwrap()).unwrap();

        let dataset = WeatherDataset::load(file.path(), 0.5);
        assert_eq!(dataset.sample_count(), 1);
    }
}
