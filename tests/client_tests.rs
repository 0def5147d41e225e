//! WeatherAPI.com client and IP geolocation against a wiremock server

mod common;

use common::sample_weather;
use pretty_assertions::assert_eq;
use weather_dashboard::api::{ClientConfig, WeatherApiClient, WeatherError, WeatherProvider};
use weather_dashboard::geolocation::{GeolocationError, Geolocator, IpGeolocator};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const TEST_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> WeatherApiClient {
    WeatherApiClient::new(ClientConfig::new(Some(TEST_KEY.into())).with_base_url(server.uri()))
}

fn forecast_body(name: &str, text: &str, temp_c: f64) -> serde_json::Value {
    serde_json::to_value(sample_weather(name, text, temp_c)).expect("serialize sample")
}

async fn mount_city(server: &MockServer, name: &str, temp_c: f64) {
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", name))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body(name, "Sunny", temp_c)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_current_weather_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("key", TEST_KEY))
        .and(query_param("q", "Faisalabad"))
        .and(query_param("days", "7"))
        .and(query_param("aqi", "no"))
        .and(query_param("alerts", "no"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body("Faisalabad", "Sunny", 33.4)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server)
        .fetch_current_weather("Faisalabad")
        .await
        .expect("weather data");

    assert_eq!(data.location.name, "Faisalabad");
    assert_eq!(data.current.condition.text, "Sunny");
    assert_eq!(data.forecast.forecastday.len(), 7);
    assert_eq!(data.forecast.forecastday[0].date, "2024-06-03");
}

#[tokio::test]
async fn test_requests_disable_caching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(header("cache-control", "no-store"))
        .and(header("pragma", "no-cache"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body("Lahore", "Sunny", 36.0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_current_weather("Lahore").await;
    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn test_coordinate_query_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "31.42,73.08"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body("Faisalabad", "Clear", 24.0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server)
        .fetch_current_weather("31.42,73.08")
        .await
        .expect("weather data");
    assert_eq!(data.location.name, "Faisalabad");
}

#[tokio::test]
async fn test_provider_error_carries_status_and_body() {
    let server = MockServer::start().await;
    let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_current_weather("Atlantis").await;

    match result {
        Err(WeatherError::Provider { status, body: text }) => {
            assert_eq!(status, 400);
            assert_eq!(text, body);
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_current_weather("Lahore").await;
    assert!(matches!(result, Err(WeatherError::Parse(_))), "{result:?}");
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = WeatherApiClient::new(ClientConfig::new(None).with_base_url(server.uri()));
    let result = client.fetch_current_weather("Lahore").await;
    assert!(matches!(result, Err(WeatherError::MissingCredential)));
}

#[tokio::test]
async fn test_major_cities_preserve_order() {
    let server = MockServer::start().await;
    mount_city(&server, "Karachi", 31.0).await;
    mount_city(&server, "Lahore", 36.0).await;
    mount_city(&server, "Islamabad", 28.0).await;

    let cities = vec![
        "Islamabad".to_string(),
        "Karachi".to_string(),
        "Lahore".to_string(),
    ];
    let data = client_for(&server)
        .fetch_major_cities_weather(&cities)
        .await
        .expect("all cities");

    let names: Vec<_> = data.iter().map(|d| d.location.name.as_str()).collect();
    assert_eq!(names, vec!["Islamabad", "Karachi", "Lahore"]);
}

#[tokio::test]
async fn test_major_cities_fail_as_a_batch() {
    let server = MockServer::start().await;
    mount_city(&server, "Karachi", 31.0).await;
    mount_city(&server, "Islamabad", 28.0).await;

    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "Lahore"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let cities = vec![
        "Karachi".to_string(),
        "Lahore".to_string(),
        "Islamabad".to_string(),
    ];
    let result = client_for(&server).fetch_major_cities_weather(&cities).await;

    assert!(
        matches!(result, Err(WeatherError::Provider { status: 503, .. })),
        "{result:?}"
    );
}

#[tokio::test]
async fn test_no_major_cities_is_empty_success() {
    let server = MockServer::start().await;
    let data = client_for(&server)
        .fetch_major_cities_weather(&[])
        .await
        .expect("empty batch");
    assert!(data.is_empty());
}

#[tokio::test]
async fn test_search_locations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("key", TEST_KEY))
        .and(query_param("q", "Lon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 2801268,
                "name": "London",
                "region": "City of London, Greater London",
                "country": "United Kingdom",
                "lat": 51.52,
                "lon": -0.11,
                "url": "london-city-of-london-greater-london-united-kingdom"
            },
            {
                "id": 315398,
                "name": "Londrina",
                "region": "Parana",
                "country": "Brazil",
                "lat": -23.3,
                "lon": -51.15,
                "url": "londrina-parana-brazil"
            }
        ])))
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search_locations("Lon")
        .await
        .expect("search results");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, Some(2801268));
    assert_eq!(
        results[0].display_name(),
        "London, City of London, Greater London, United Kingdom"
    );
    assert_eq!(results[1].query(), "-23.3,-51.15");
}

#[tokio::test]
async fn test_ip_geolocation_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "lat": 31.42,
            "lon": 73.08
        })))
        .mount(&server)
        .await;

    let locator = IpGeolocator::new(format!("{}/json/", server.uri()));
    let coords = locator.locate().await.expect("coordinates");
    assert_eq!(coords.query(), "31.42,73.08");
}

#[tokio::test]
async fn test_ip_geolocation_refused() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    let locator = IpGeolocator::new(format!("{}/json/", server.uri()));
    let result = locator.locate().await;
    assert_eq!(result, Err(GeolocationError::Denied("private range".into())));
}
