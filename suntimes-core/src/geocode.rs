use reqwest::Client;
use serde::Deserialize;

use crate::{error::Error, model::Coordinates};

/// Client for the free-text geocoding service.
///
/// One GET per lookup, `q=<text>` URL-encoded; the first candidate of the
/// returned list is the match. No retries: the first failure is terminal.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    base_url: String,
    http: Client,
}

/// One geocoding candidate. The service sends `lat`/`lon` sometimes as
/// strings, sometimes as numbers; both are accepted.
#[derive(Debug, Deserialize)]
struct GeoCandidate {
    lat: Option<CoordValue>,
    lon: Option<CoordValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoordValue {
    Number(f64),
    Text(String),
}

impl CoordValue {
    fn as_degrees(&self) -> Option<f64> {
        match self {
            CoordValue::Number(n) => Some(*n),
            CoordValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl GeocodeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Resolve free-form text to coordinates via the first candidate.
    pub async fn lookup(&self, query: &str) -> Result<Coordinates, Error> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| Error::GeocodeTransport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::GeocodeTransport(format!(
                "status {status}"
            )));
        }

        let candidates: Vec<GeoCandidate> = res
            .json()
            .await
            .map_err(|e| Error::GeocodeTransport(format!("invalid JSON body: {e}")))?;

        tracing::debug!(query, matches = candidates.len(), "geocoding response");

        let first = candidates.first().ok_or_else(|| Error::GeocodeNoResult {
            query: query.to_string(),
        })?;

        let latitude = first.lat.as_ref().and_then(CoordValue::as_degrees);
        let longitude = first.lon.as_ref().and_then(CoordValue::as_degrees);

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(Error::GeocodeMalformed),
        }
    }
}
