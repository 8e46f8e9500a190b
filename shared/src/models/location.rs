//! Geocoding search results

use serde::{Deserialize, Serialize};

/// Queries shorter than this never reach the geocoding provider
pub const MIN_SEARCH_QUERY_LENGTH: usize = 3;

/// A place returned by the geocoding provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationCandidate {
    pub id: u64,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Outcome of a location search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LocationSearchResponse {
    pub results: Vec<LocationCandidate>,
    /// A newer query from the same session replaced this one; the client
    /// must not display these (empty) results
    pub superseded: bool,
}

impl LocationSearchResponse {
    pub fn found(results: Vec<LocationCandidate>) -> Self {
        Self {
            results,
            superseded: false,
        }
    }

    pub fn superseded() -> Self {
        Self {
            results: Vec::new(),
            superseded: true,
        }
    }
}

/// Whether a query is long enough to send to the provider
pub fn is_searchable_query(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SEARCH_QUERY_LENGTH
}
