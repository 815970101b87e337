use chrono::{Days, Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::Error,
    model::{Coordinates, DayRecord},
};

/// Fallback token for timing fields the upstream omitted.
const MISSING_FIELD: &str = "N/A";

/// Client for the sunrise/sunset service.
///
/// `fetch_two_days` issues exactly two sequential GETs: today (no date
/// parameter), then tomorrow. The second request is only ever sent after
/// the first has fully succeeded; any failure discards everything.
#[derive(Debug, Clone)]
pub struct DayInfoClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct DayInfoResponse {
    results: Option<RawDayResults>,
}

/// Raw `results` object. Every field is optional so that a sparse upstream
/// answer degrades into fallback tokens instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
struct RawDayResults {
    sunrise: Option<String>,
    sunset: Option<String>,
    dawn: Option<String>,
    dusk: Option<String>,
    day_length: Option<String>,
    solar_noon: Option<String>,
    timezone: Option<String>,
}

impl From<RawDayResults> for DayRecord {
    fn from(raw: RawDayResults) -> Self {
        let or_missing = |v: Option<String>| v.unwrap_or_else(|| MISSING_FIELD.to_string());

        DayRecord {
            sunrise: or_missing(raw.sunrise),
            sunset: or_missing(raw.sunset),
            dawn: or_missing(raw.dawn),
            dusk: or_missing(raw.dusk),
            day_length: or_missing(raw.day_length),
            solar_noon: or_missing(raw.solar_noon),
            timezone: raw.timezone.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

impl DayInfoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Fetch records for today and tomorrow, in that order.
    pub async fn fetch_two_days(
        &self,
        coords: Coordinates,
    ) -> Result<(DayRecord, DayRecord), Error> {
        let today = self.fetch_day(coords, None).await?;

        // Tomorrow is computed in the caller's local calendar, not the
        // target location's timezone. Preserved behavior: near midnight the
        // two can disagree.
        let date = next_day(Local::now().date_naive());
        let tomorrow = self.fetch_day(coords, Some(&date)).await?;

        Ok((today, tomorrow))
    }

    async fn fetch_day(
        &self,
        coords: Coordinates,
        date: Option<&str>,
    ) -> Result<DayRecord, Error> {
        let mut query = vec![
            ("lat", coords.latitude.to_string()),
            ("lng", coords.longitude.to_string()),
        ];
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }

        let res = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(Error::DayInfoUnreachable)?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Transport {
                status: status.as_u16(),
            });
        }

        let body: DayInfoResponse = res
            .json()
            .await
            .map_err(|_| Error::UpstreamData)?;

        tracing::debug!(?date, present = body.results.is_some(), "day-info response");

        let raw = body.results.ok_or(Error::UpstreamData)?;
        Ok(raw.into())
    }
}

/// The calendar date one day after `today`, formatted `YYYY-MM-DD`.
fn next_day(today: NaiveDate) -> String {
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX);
    tomorrow.format("%Y-%m-%d").to_string()
}
