//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::{CurrentObservation, ForecastSample, ForecastSeries, WeatherPort};
use async_trait::async_trait;
use domain::CityName;
use integration_weather::{
    CurrentResponse, ForecastItem, ForecastResponse, OpenWeatherClient, WeatherClient,
    WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("configured", &self.client.is_configured())
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create an adapter over an OpenWeatherMap client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Create an adapter over any weather client
    pub fn with_client(client: impl WeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::MissingApiKey => ApplicationError::MissingCredentials,
            WeatherError::CityNotFound(city) => ApplicationError::CityNotFound(city),
            WeatherError::InvalidApiKey => ApplicationError::InvalidCredentials,
            WeatherError::ConnectionFailed(e) => ApplicationError::NetworkUnreachable(e),
            WeatherError::RequestFailed { message, .. } => ApplicationError::Provider(message),
            WeatherError::ParseError(e) => ApplicationError::MalformedResponse(e),
        }
    }

    fn map_current(current: CurrentResponse) -> CurrentObservation {
        let primary = current.primary_weather().cloned().unwrap_or_default();
        let main = current.main.unwrap_or_default();
        let sys = current.sys.unwrap_or_default();

        CurrentObservation {
            city_name: current.name,
            country: sys.country,
            observed_at: current.dt,
            utc_offset_secs: current.timezone,
            temperature: main.temp,
            feels_like: main.feels_like,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
            humidity: main.humidity,
            pressure: main.pressure,
            cloud_cover: current.clouds.and_then(|c| c.all),
            category: primary.main,
            description: primary.description,
            sunrise: sys.sunrise,
            sunset: sys.sunset,
        }
    }

    /// Samples without a timestamp cannot be placed on a day and are skipped
    fn map_sample(item: &ForecastItem) -> Option<ForecastSample> {
        let primary = item.primary_weather().cloned().unwrap_or_default();
        let main = item.main.clone().unwrap_or_default();

        Some(ForecastSample {
            timestamp: item.dt?,
            temperature: main.temp,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
            category: primary.main,
            description: primary.description,
        })
    }

    fn map_forecast(forecast: &ForecastResponse) -> ForecastSeries {
        ForecastSeries {
            samples: forecast.samples().iter().filter_map(Self::map_sample).collect(),
            utc_offset_secs: forecast.city.as_ref().and_then(|c| c.timezone),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    #[instrument(skip(self, city), fields(city = %city))]
    async fn get_current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentObservation, ApplicationError> {
        let result = self
            .client
            .get_current(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    name = current.name.as_deref().unwrap_or("?"),
                    timezone = ?current.timezone,
                    "Retrieved current conditions"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current conditions");
            },
        }

        result.map(Self::map_current)
    }

    #[instrument(skip(self, city), fields(city = %city))]
    async fn get_forecast(&self, city: &CityName) -> Result<ForecastSeries, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(samples = forecast.samples().len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map(|f| Self::map_forecast(&f))
    }
}
