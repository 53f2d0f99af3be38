//! HTTP tests against a mock server using wiremock.

use forecast_card::client::{fetch_forecast, fetch_place_name, http_client};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_forecast_decodes_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .and(query_param("forecast_days", "7"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": 12.5, "weather_code": 45 },
            "hourly": {
                "time": ["2025-06-10T00:00", "2025-06-10T01:00"],
                "temperature_2m": [10.0, 9.5]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = http_client().unwrap();
    let payload = fetch_forecast(&client, &mock_server.uri(), 45.0, 9.0).await.unwrap();

    assert_eq!(payload.snapshot().weather_code, Some(45));
    assert_eq!(payload.hourly_series().len(), 2);
    assert!(payload.daily.is_none());
}

#[tokio::test]
async fn fetch_forecast_server_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = http_client().unwrap();
    let err = fetch_forecast(&client, &mock_server.uri(), 45.0, 9.0)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("request failed"));
}

#[tokio::test]
async fn fetch_place_name_formats_address() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "display_name": "Milano, Lombardia, Italia",
            "address": { "city": "Milano", "state": "Lombardia", "country": "Italia" }
        })))
        .mount(&mock_server)
        .await;

    let client = http_client().unwrap();
    let name = fetch_place_name(&client, &mock_server.uri(), 45.46, 9.19).await;
    assert_eq!(name, "Milano, Italia");
}

#[tokio::test]
async fn fetch_place_name_falls_back_to_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = http_client().unwrap();
    let name = fetch_place_name(&client, &mock_server.uri(), 45.46, 9.19).await;
    assert_eq!(name, "45.4600, 9.1900");
}
