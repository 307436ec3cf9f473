//! Dashboard session
//!
//! Owns what the dashboard shows and decides which fetch result may update
//! it. Every fetch is tagged with an increasing generation; only the result
//! carrying the latest generation is applied, so a slow request that
//! resolves after a newer one is dropped instead of overwriting it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{CityName, WeatherData};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::WeatherService;
use crate::error::{ApplicationError, ErrorKind};

/// What the dashboard currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading {
        /// City being fetched
        city: CityName,
    },
    /// The latest fetch succeeded
    Ready(Arc<WeatherData>),
    /// The latest fetch failed; no data is shown
    Failed(ErrorKind),
}

impl DashboardState {
    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The displayed report, if any
    #[must_use]
    pub fn data(&self) -> Option<&WeatherData> {
        match self {
            Self::Ready(data) => Some(data.as_ref()),
            _ => None,
        }
    }
}

/// Generation tag handed out by [`DashboardSession::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The generation number
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Single-session dashboard state with request supersession
#[derive(Debug, Default)]
pub struct DashboardSession {
    generation: AtomicU64,
    state: Mutex<DashboardState>,
}

impl DashboardSession {
    /// Create an idle session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `city`, superseding any fetch in flight
    pub fn begin(&self, city: CityName) -> RequestToken {
        let mut state = self.state.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, city = %city, "Fetch started");
        *state = DashboardState::Loading { city };
        RequestToken(generation)
    }

    /// Whether `token` belongs to the most recent fetch
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Apply a fetch result if `token` is still current
    ///
    /// Returns `false` when the result was superseded and dropped. A failure
    /// replaces any previously shown data.
    pub fn complete(
        &self,
        token: RequestToken,
        result: Result<WeatherData, ApplicationError>,
    ) -> bool {
        let mut state = self.state.lock();
        if !self.is_current(token) {
            debug!(
                generation = token.0,
                latest = self.generation.load(Ordering::SeqCst),
                "Dropping superseded fetch result"
            );
            return false;
        }

        *state = match result {
            Ok(data) => DashboardState::Ready(Arc::new(data)),
            Err(err) => {
                warn!(error = %err, "Weather fetch failed");
                DashboardState::Failed(err.kind())
            },
        };
        true
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Begin, fetch and complete in one step
    ///
    /// Returns whether the result was applied.
    pub async fn run(&self, service: &WeatherService, city: CityName) -> bool {
        let token = self.begin(city.clone());
        let result = service.fetch(&city).await;
        self.complete(token, result)
    }
}
