//! APOD API provider
//!
//! Implementation of `ApodSource` for NASA's Astronomy Picture of the Day
//! API (<https://api.nasa.gov/>).

use crate::config::api::{DEFAULT_COUNT, DEFAULT_ENDPOINT, DEMO_API_KEY};
use crate::error::Result;
use crate::network::HttpClient;
use crate::record::DailyRecord;

use super::traits::ApodSource;

use tracing::{debug, info};

/// APOD API provider
///
/// Issues a single `GET {endpoint}?api_key=..&count=..` per batch. The API
/// answers a `count` request with a JSON array of random records.
pub struct ApodProvider {
    client: HttpClient,
    endpoint: String,
    api_key: String,
}

impl ApodProvider {
    /// Create a provider for the public endpoint using the demo key
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEMO_API_KEY)
    }

    /// Create a provider with a custom endpoint and key (for mirrors or testing)
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    /// Endpoint this provider talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query parameters for a batch request
    fn query(&self, count: usize) -> Vec<(&'static str, String)> {
        // A count of zero would make the API return a single object instead of an array
        let count = if count == 0 { DEFAULT_COUNT } else { count };
        vec![("api_key", self.api_key.clone()), ("count", count.to_string())]
    }
}

impl ApodSource for ApodProvider {
    fn name(&self) -> &'static str {
        "NASA APOD"
    }

    fn fetch_batch(&self, count: usize) -> Result<Vec<DailyRecord>> {
        let query = self.query(count);
        let params: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();

        debug!(endpoint = %self.endpoint, count, "requesting APOD batch");
        let records: Vec<DailyRecord> = self.client.get_json(&self.endpoint, &params)?;
        info!(received = records.len(), "APOD batch received");

        Ok(records)
    }
}
