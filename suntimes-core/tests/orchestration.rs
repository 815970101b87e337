//! Integration tests for the lookup pipeline using wiremock.
//!
//! These tests verify resolver/fetcher behavior against mock HTTP servers,
//! including how far the pipeline gets before the first error stops it.

use async_trait::async_trait;
use serde_json::json;
use suntimes_core::{
    Coordinates, DayInfoClient, DevicePosition, Error, GeocodeClient, LocationIntent,
    LocationResolver, NoDeviceService, Renderer, SunTimesService,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARIS: Coordinates = Coordinates {
    latitude: 48.8566,
    longitude: 2.3522,
};

fn results_body(timezone: Option<&str>) -> serde_json::Value {
    let mut results = json!({
        "sunrise": "6:12:34 AM",
        "sunset": "8:45:00 PM",
        "dawn": "5:40:00 AM",
        "dusk": "9:15:00 PM",
        "day_length": "14:32:26",
        "solar_noon": "1:28:47 PM",
    });
    if let Some(tz) = timezone {
        results["timezone"] = json!(tz);
    }
    json!({ "results": results, "status": "OK" })
}

fn geocoder(server: &MockServer) -> GeocodeClient {
    GeocodeClient::new(format!("{}/search", server.uri()))
}

fn day_info(server: &MockServer) -> DayInfoClient {
    DayInfoClient::new(format!("{}/json", server.uri()))
}

/// Device stub that fails the way a denied permission prompt would.
#[derive(Debug)]
struct DeniedDevice;

#[async_trait]
impl DevicePosition for DeniedDevice {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Err(Error::LocationDenied("user dismissed the prompt".into()))
    }
}

/// Renderer that counts every boundary call.
#[derive(Debug, Default)]
struct CountingRenderer {
    started: usize,
    finished: usize,
    rendered: Vec<Vec<String>>,
    alerts: Vec<String>,
}

impl Renderer for CountingRenderer {
    fn loading_started(&mut self) {
        self.started += 1;
    }

    fn loading_finished(&mut self) {
        self.finished += 1;
    }

    fn render(&mut self, model: &suntimes_core::DisplayModel) {
        self.rendered
            .push(model.entries().iter().flat_map(|e| e.lines()).collect());
    }

    fn alert(&mut self, error: &Error) {
        self.alerts.push(error.to_string());
    }
}

#[tokio::test]
async fn empty_geocode_list_is_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = geocoder(&server).lookup("Atlantis").await.unwrap_err();
    assert!(matches!(err, Error::GeocodeNoResult { ref query } if query == "Atlantis"));
}

#[tokio::test]
async fn candidate_without_coordinates_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "display_name": "Paris, France" }
        ])))
        .mount(&server)
        .await;

    let err = geocoder(&server).lookup("Paris").await.unwrap_err();
    assert!(matches!(err, Error::GeocodeMalformed));
}

#[tokio::test]
async fn geocode_server_error_is_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = geocoder(&server).lookup("Paris").await.unwrap_err();
    assert!(matches!(err, Error::GeocodeTransport(_)));
}

#[tokio::test]
async fn blank_input_never_reaches_the_geocoder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(geocoder(&server), Box::new(NoDeviceService));
    let err = resolver
        .resolve(&LocationIntent::Text("   ".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput));
    server.verify().await;
}

#[tokio::test]
async fn geocoded_coordinates_accept_string_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "48.8566", "lon": "2.3522", "display_name": "Paris" },
            { "lat": "33.6617", "lon": "-95.5555", "display_name": "Paris, TX" }
        ])))
        .mount(&server)
        .await;

    let coords = geocoder(&server).lookup("Paris").await.unwrap();
    assert_eq!(coords, PARIS);
}

#[tokio::test]
async fn missing_results_stops_before_second_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param_is_missing("date"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "INVALID_REQUEST" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(Some("UTC"))))
        .expect(0)
        .mount(&server)
        .await;

    let err = day_info(&server).fetch_two_days(PARIS).await.unwrap_err();
    assert!(matches!(err, Error::UpstreamData));
    server.verify().await;
}

#[tokio::test]
async fn http_500_on_first_day_short_circuits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(Some("UTC"))))
        .expect(0)
        .mount(&server)
        .await;

    let err = day_info(&server).fetch_two_days(PARIS).await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: 500 }));
    server.verify().await;
}

#[tokio::test]
async fn failed_second_day_discards_the_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(Some("UTC"))))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = day_info(&server).fetch_two_days(PARIS).await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: 503 }));
    server.verify().await;
}

#[tokio::test]
async fn end_to_end_paris_defaults_tomorrows_timezone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "48.8566", "lon": "2.3522" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(Some("Europe/Paris"))))
        .expect(1)
        .mount(&server)
        .await;

    // Tomorrow's response carries no timezone field at all.
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(None)))
        .expect(1)
        .mount(&server)
        .await;

    let service = SunTimesService::new(
        LocationResolver::new(geocoder(&server), Box::new(NoDeviceService)),
        day_info(&server),
    );

    let model = service
        .lookup(&LocationIntent::Text("Paris".to_string()))
        .await
        .unwrap();

    assert_eq!(model.today.coords, PARIS);
    assert_eq!(model.today.record.timezone, "Europe/Paris");
    assert_eq!(model.tomorrow.record.timezone, "Unknown");

    let tomorrow_lines = model.tomorrow.lines();
    assert_eq!(tomorrow_lines.last().unwrap(), "Time Zone: Unknown");

    server.verify().await;
}

#[tokio::test]
async fn device_error_alerts_and_clears_loading_once() {
    let server = MockServer::start().await;

    // Location already failed, so the day-info service must stay untouched.
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(Some("UTC"))))
        .expect(0)
        .mount(&server)
        .await;

    let service = SunTimesService::new(
        LocationResolver::new(geocoder(&server), Box::new(DeniedDevice)),
        day_info(&server),
    );

    let mut renderer = CountingRenderer::default();
    service
        .run(&LocationIntent::CurrentDevice, &mut renderer)
        .await;

    assert_eq!(renderer.started, 1);
    assert_eq!(renderer.finished, 1);
    assert!(renderer.rendered.is_empty());
    assert_eq!(renderer.alerts.len(), 1);
    assert!(renderer.alerts[0].contains("denied"));

    server.verify().await;
}

#[tokio::test]
async fn successful_run_renders_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": 48.8566, "lon": 2.3522 }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(Some("Europe/Paris"))))
        .mount(&server)
        .await;

    let service = SunTimesService::new(
        LocationResolver::new(geocoder(&server), Box::new(NoDeviceService)),
        day_info(&server),
    );

    let mut renderer = CountingRenderer::default();
    service
        .run(&LocationIntent::Text("Paris".to_string()), &mut renderer)
        .await;

    assert_eq!(renderer.finished, 1);
    assert!(renderer.alerts.is_empty());
    assert_eq!(renderer.rendered.len(), 1);
    // Two entries of eight lines each.
    assert_eq!(renderer.rendered[0].len(), 16);
}
