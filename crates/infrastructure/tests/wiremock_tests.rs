//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Weather adapter against a mocked OpenWeatherMap API
//! - Full fetch through the weather service
//! - Theme persistence round trip through the settings service

use std::sync::Arc;

use application::{ErrorKind, SettingsService, ThemeSource, WeatherPort, WeatherService};
use domain::{CityName, ConditionIcon, Theme, UvIndex};
use infrastructure::{TomlSettingsStore, WeatherAdapter};
use integration_weather::WeatherConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "integration-key";

fn adapter_for(server: &MockServer, api_key: Option<&str>) -> WeatherAdapter {
    WeatherAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        api_key: api_key.map(str::to_string),
        timeout_secs: 5,
        units: "metric".to_string(),
    })
    .expect("adapter")
}

fn paris() -> CityName {
    CityName::new("Paris").expect("valid city")
}

fn current_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Paris",
        "dt": 1_726_912_800,
        "timezone": 7200,
        "main": {"temp": 22.4, "feels_like": 21.6, "temp_min": 18, "temp_max": 24,
                 "humidity": 60, "pressure": 1024},
        "weather": [{"main": "Clear", "description": "clear sky"}],
        "clouds": {"all": 15},
        "sys": {"country": "FR", "sunrise": 1_726_893_000, "sunset": 1_726_937_100}
    })
}

fn forecast_body(days: i64) -> serde_json::Value {
    let list: Vec<_> = (0..days * 8)
        .map(|i| {
            let category = if i % 8 < 5 { "Clouds" } else { "Rain" };
            serde_json::json!({
                "dt": 1_726_876_800 + i * 10_800,
                "main": {"temp": 15.0, "temp_min": 12.0, "temp_max": 19.0},
                "weather": [{"main": category, "description": category.to_lowercase()}],
                "clouds": {"all": 60}
            })
        })
        .collect();
    serde_json::json!({
        "list": list,
        "city": {"name": "Paris", "country": "FR", "timezone": 0}
    })
}

async fn mount_success(server: &MockServer, days: i64) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(days)))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Weather Adapter Tests
// ============================================================================

mod weather_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn current_conditions_are_flattened() {
        let server = MockServer::start().await;
        mount_success(&server, 1).await;
        let adapter = adapter_for(&server, Some(API_KEY));

        let current = adapter.get_current_conditions(&paris()).await.expect("current");
        assert_eq!(current.city_name.as_deref(), Some("Paris"));
        assert_eq!(current.country.as_deref(), Some("FR"));
        assert_eq!(current.cloud_cover, Some(15.0));

        let forecast = adapter.get_forecast(&paris()).await.expect("forecast");
        assert_eq!(forecast.samples.len(), 8);
        assert_eq!(forecast.utc_offset_secs, Some(0));
    }

    #[tokio::test]
    async fn not_found_is_city_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
            )
            .mount(&server)
            .await;
        let adapter = adapter_for(&server, Some(API_KEY));

        let err = adapter.get_current_conditions(&paris()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CityNotFound);
    }

    #[tokio::test]
    async fn server_error_is_unknown_with_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"cod": 500, "message": "upstream down"})),
            )
            .mount(&server)
            .await;
        let adapter = adapter_for(&server, Some(API_KEY));

        let err = adapter.get_forecast(&paris()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.to_string().contains("upstream down"));
    }
}

// ============================================================================
// Weather Service Tests
// ============================================================================

mod weather_service_tests {
    use super::*;

    #[tokio::test]
    async fn paris_report_end_to_end() {
        let server = MockServer::start().await;
        mount_success(&server, 5).await;
        let service = WeatherService::new(Arc::new(adapter_for(&server, Some(API_KEY))));

        let report = service.fetch(&paris()).await.expect("report");

        assert_eq!(report.location, "Paris, FR");
        assert_eq!(report.date, "Saturday, September 21");
        assert_eq!(report.current.temperature, Some(22));
        assert_eq!(report.current.average_temp, Some(21.0));
        assert_eq!(report.current.uv_index_estimate.map(UvIndex::value), Some(6));
        assert_eq!(report.current.icon, ConditionIcon::Sun);

        assert_eq!(report.week.len(), 5);
        assert_eq!(report.week[0].day_name, "Saturday");
        assert_eq!(report.week[0].min_temp, Some(12));
        assert_eq!(report.week[0].max_temp, Some(19));
        assert_eq!(report.week[0].icon, ConditionIcon::PartlyCloudy);
        assert!(report.week.iter().all(|d| !d.is_placeholder()));
    }

    #[tokio::test]
    async fn short_forecast_is_padded() {
        let server = MockServer::start().await;
        mount_success(&server, 3).await;
        let service = WeatherService::new(Arc::new(adapter_for(&server, Some(API_KEY))));

        let report = service.fetch(&paris()).await.expect("report");

        assert_eq!(report.week.len(), 5);
        assert!(report.week[3].is_placeholder());
        assert_eq!(report.week[3].day_name, "Tuesday");
        assert_eq!(report.week[4].day_name, "Wednesday");
    }

    #[tokio::test]
    async fn missing_key_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let service = WeatherService::new(Arc::new(adapter_for(&server, None)));

        let err = service.fetch(&paris()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredentials);
    }

    #[tokio::test]
    async fn invalid_key_stops_before_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(5)))
            .expect(0)
            .mount(&server)
            .await;
        let service = WeatherService::new(Arc::new(adapter_for(&server, Some("bad"))));

        let err = service.fetch(&paris()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    }

    #[tokio::test]
    async fn malformed_forecast_fails_the_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;
        let service = WeatherService::new(Arc::new(adapter_for(&server, Some(API_KEY))));

        let err = service.fetch(&paris()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }
}

// ============================================================================
// Settings Persistence Tests
// ============================================================================

mod settings_tests {
    use super::*;

    #[test]
    fn theme_survives_restart() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("settings.toml");

        let first = SettingsService::initialize(
            Arc::new(TomlSettingsStore::new(&path)),
            Theme::Dark,
        );
        assert_eq!(first.source(), ThemeSource::System);
        first.set_theme(Theme::Light).expect("save");

        let second = SettingsService::initialize(
            Arc::new(TomlSettingsStore::new(&path)),
            Theme::Dark,
        );
        assert_eq!(second.theme(), Theme::Light);
        assert_eq!(second.source(), ThemeSource::Stored);

        second.reset_theme().expect("reset");
        let third = SettingsService::initialize(
            Arc::new(TomlSettingsStore::new(&path)),
            Theme::Dark,
        );
        assert_eq!(third.theme(), Theme::Dark);
    }
}
