//! Location search service wrapping the geocoding provider

use shared::{is_searchable_query, LocationCandidate, LocationSearchResponse};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::GeocodingConfig;
use crate::error::AppResult;
use crate::external::GeocodingClient;

/// Location search service
pub struct LocationService {
    client: GeocodingClient,
    sessions: SearchSessions,
    debounce: Duration,
}

impl LocationService {
    /// Create a new LocationService from configuration
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        Ok(Self::with_client(GeocodingClient::new(config)?, config))
    }

    /// Create a new LocationService around an existing client
    pub fn with_client(client: GeocodingClient, config: &GeocodingConfig) -> Self {
        Self {
            client,
            sessions: SearchSessions::new(Duration::from_secs(config.session_idle_secs)),
            debounce: Duration::from_millis(config.debounce_ms),
        }
    }

    /// Search for places matching free text.
    ///
    /// Short queries return nothing without contacting the provider, and
    /// provider failures degrade to an empty list.
    pub async fn search(&self, query: &str) -> Vec<LocationCandidate> {
        let query = query.trim();
        if !is_searchable_query(query) {
            return Vec::new();
        }

        match self.client.search(query).await {
            Ok(results) => {
                tracing::debug!(query, count = results.len(), "Location search completed");
                results
            }
            Err(e) => {
                tracing::warn!(query, "Location search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Search on behalf of a client session that may be typing.
    ///
    /// Each call supersedes the session's earlier calls: it waits out the
    /// debounce period and is reported as superseded if a newer query from
    /// the same session arrives before or while the provider answers.
    pub async fn search_in_session(&self, session: &str, query: &str) -> LocationSearchResponse {
        let generation = self.sessions.begin(session);

        if !is_searchable_query(query) {
            return LocationSearchResponse::found(Vec::new());
        }

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if !self.sessions.is_current(session, generation) {
            tracing::debug!(session, query, "Search superseded before sending");
            return LocationSearchResponse::superseded();
        }

        let results = self.search(query).await;

        if !self.sessions.is_current(session, generation) {
            tracing::debug!(session, query, "Discarding stale search results");
            return LocationSearchResponse::superseded();
        }

        LocationSearchResponse::found(results)
    }
}

/// Latest query generation per client session
pub struct SearchSessions {
    slots: Mutex<HashMap<String, SessionSlot>>,
    idle_timeout: Duration,
}

struct SessionSlot {
    generation: u64,
    touched: Instant,
}

impl SearchSessions {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Register a new query for the session and return its generation
    pub fn begin(&self, session: &str) -> u64 {
        let now = Instant::now();
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());

        let idle = self.idle_timeout;
        slots.retain(|_, slot| now.duration_since(slot.touched) < idle);

        let slot = slots.entry(session.to_string()).or_insert(SessionSlot {
            generation: 0,
            touched: now,
        });
        slot.generation += 1;
        slot.touched = now;
        slot.generation
    }

    /// Whether `generation` is still the session's newest query
    pub fn is_current(&self, session: &str, generation: u64) -> bool {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots
            .get(session)
            .map(|slot| slot.generation == generation)
            .unwrap_or(false)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::external::geocoding::test_support::{
        spawn_provider, spawn_slow_provider, SeenRequests,
    };
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn delhi() -> serde_json::Value {
        json!([{"place_id": 7, "display_name": "Delhi, India", "lat": "28.6517", "lon": "77.2219"}])
    }

    async fn service_with(
        status: StatusCode,
        body: serde_json::Value,
        debounce_ms: u64,
    ) -> (LocationService, SeenRequests) {
        let (addr, seen) = spawn_provider(status, body).await;
        let mut config = Config::for_tests().geocoding;
        config.debounce_ms = debounce_ms;
        let client = GeocodingClient::with_base_url(&config, format!("http://{}", addr)).unwrap();
        (LocationService::with_client(client, &config), seen)
    }

    #[tokio::test]
    async fn test_short_query_never_reaches_provider() {
        let (service, seen) = service_with(StatusCode::OK, delhi(), 0).await;

        assert!(service.search("De").await.is_empty());
        assert!(service.search("  ab  ").await.is_empty());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_returns_candidates() {
        let (service, seen) = service_with(StatusCode::OK, delhi(), 0).await;

        let results = service.search("Delhi").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Delhi, India");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_empty() {
        let (service, _) = service_with(StatusCode::INTERNAL_SERVER_ERROR, json!({}), 0).await;
        assert!(service.search("Delhi").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_provider_degrades_to_empty() {
        let config = Config::for_tests().geocoding;
        let service = LocationService::new(&config).unwrap();
        assert!(service.search("Chennai").await.is_empty());
    }

    #[tokio::test]
    async fn test_newer_query_supersedes_older() {
        let (service, seen) = service_with(StatusCode::OK, delhi(), 50).await;
        let service = Arc::new(service);

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.search_in_session("tab-1", "Del").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = service.search_in_session("tab-1", "Delhi").await;
        let first = first.await.unwrap();

        assert!(first.superseded);
        assert!(first.results.is_empty());
        assert!(!second.superseded);
        assert_eq!(second.results.len(), 1);
        // Only the surviving query was sent
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_results_arriving_after_newer_query_are_discarded() {
        let (addr, seen) =
            spawn_slow_provider(StatusCode::OK, delhi(), Duration::from_millis(150)).await;
        let config = Config::for_tests().geocoding;
        let client = GeocodingClient::with_base_url(&config, format!("http://{}", addr)).unwrap();
        let service = Arc::new(LocationService::with_client(client, &config));

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.search_in_session("tab-1", "Delhi").await })
        };
        // Wait until the first query is at the provider
        while seen.lock().unwrap().is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let second = service.search_in_session("tab-1", "Delhi Cantt").await;
        let first = first.await.unwrap();

        // The provider answered both, but only the newer answer is kept
        assert_eq!(seen.lock().unwrap().len(), 2);
        assert!(first.superseded);
        assert!(first.results.is_empty());
        assert!(!second.superseded);
        assert_eq!(second.results.len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let (service, _) = service_with(StatusCode::OK, delhi(), 0).await;

        let a = service.search_in_session("a", "Delhi").await;
        let b = service.search_in_session("b", "Delhi").await;
        assert!(!a.superseded);
        assert!(!b.superseded);
    }

    #[test]
    fn test_generations_increase_per_session() {
        let sessions = SearchSessions::new(Duration::from_secs(60));
        let g1 = sessions.begin("s");
        let g2 = sessions.begin("s");
        assert!(g2 > g1);
        assert!(!sessions.is_current("s", g1));
        assert!(sessions.is_current("s", g2));
        assert!(!sessions.is_current("other", g2));
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let sessions = SearchSessions::new(Duration::ZERO);
        sessions.begin("a");
        sessions.begin("b");
        assert_eq!(sessions.len(), 1);
    }
}
