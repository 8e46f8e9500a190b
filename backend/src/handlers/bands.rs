//! HTTP handlers for rain probability bands

use axum::{extract::Query, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{classify, legend, Classification, LegendEntry};

/// Legend rows, highest band first
pub async fn list_bands() -> Json<Vec<LegendEntry>> {
    Json(legend())
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub probability: Decimal,
}

/// Classify a rain probability percentage
pub async fn classify_probability(Query(query): Query<ClassifyQuery>) -> Json<Classification> {
    Json(classify(query.probability))
}
