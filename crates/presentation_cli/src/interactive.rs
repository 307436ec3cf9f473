//! Interactive dashboard
//!
//! Reads one city per line. Every search starts a fetch in the background;
//! when searches overlap only the most recent result is displayed.

use std::sync::Arc;

use application::{DashboardSession, DashboardState, SettingsService, WeatherService};
use domain::CityName;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::render::Renderer;

const HELP: &str = "Type a city name and press Enter. :theme toggles light/dark, :quit exits.";
const TOO_SHORT: &str = "Enter at least 2 characters to search.";
const TOO_LONG: &str = "City names are at most 100 characters.";

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Blank line
    Skip,
    /// Leave the dashboard
    Quit,
    /// Flip between light and dark
    ToggleTheme,
    /// Show the usage line
    Help,
    /// Too short to search
    TooShort,
    /// Too long to be a city name
    TooLong,
    /// Fetch weather for a city
    Search(CityName),
}

/// Interpret one line of input
pub fn parse_input(line: &str) -> InputAction {
    let input = line.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => InputAction::Skip,
        ":q" | ":quit" | ":exit" => InputAction::Quit,
        ":theme" | ":t" => InputAction::ToggleTheme,
        ":help" | ":h" | "?" => InputAction::Help,
        _ => match CityName::new(input) {
            Ok(city) => InputAction::Search(city),
            Err(_) if input.chars().count() > CityName::MAX_LEN => InputAction::TooLong,
            Err(_) => InputAction::TooShort,
        },
    }
}

/// Everything the dashboard loop needs
#[derive(Debug, Clone)]
pub struct Dashboard {
    service: Arc<WeatherService>,
    session: Arc<DashboardSession>,
    settings: Arc<SettingsService>,
    color: bool,
    units: String,
}

impl Dashboard {
    /// Create a dashboard over a weather service and theme settings
    pub fn new(
        service: Arc<WeatherService>,
        settings: Arc<SettingsService>,
        color: bool,
        units: impl Into<String>,
    ) -> Self {
        Self {
            service,
            session: Arc::new(DashboardSession::new()),
            settings,
            color,
            units: units.into(),
        }
    }

    fn renderer(&self) -> Renderer {
        Renderer::new(self.settings.theme(), self.color, &self.units)
    }

    /// Text for the current state, `None` while idle
    pub fn render_state(&self, state: &DashboardState) -> Option<String> {
        let renderer = self.renderer();
        match state {
            DashboardState::Idle => None,
            DashboardState::Loading { city } => Some(renderer.loading(city)),
            DashboardState::Ready(data) => Some(renderer.dashboard(data)),
            DashboardState::Failed(kind) => Some(renderer.error(*kind)),
        }
    }

    fn show(&self) {
        if let Some(text) = self.render_state(&self.session.state()) {
            println!("{text}");
        }
    }

    fn search(&self, tasks: &mut JoinSet<()>, city: CityName) {
        let token = self.session.begin(city.clone());
        self.show();

        let dashboard = self.clone();
        tasks.spawn(async move {
            let result = dashboard.service.fetch(&city).await;
            if dashboard.session.complete(token, result) {
                dashboard.show();
            } else {
                debug!(city = %city, "Result superseded by a newer search");
            }
        });
    }

    /// Run until `:quit` or end of input
    ///
    /// Pending fetches are awaited before returning so piped input still
    /// prints its last result.
    pub async fn run<R>(&self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut tasks = JoinSet::new();
        println!("{}", self.renderer().hint(HELP));

        while let Some(line) = lines.next_line().await? {
            match parse_input(&line) {
                InputAction::Skip => {},
                InputAction::Quit => break,
                InputAction::Help => println!("{}", self.renderer().hint(HELP)),
                InputAction::TooShort => println!("{}", self.renderer().hint(TOO_SHORT)),
                InputAction::TooLong => println!("{}", self.renderer().hint(TOO_LONG)),
                InputAction::ToggleTheme => match self.settings.toggle_theme() {
                    Ok(theme) => {
                        println!("🎨 Theme: {theme}");
                        self.show();
                    },
                    Err(e) => warn!(error = %e, "Failed to save theme"),
                },
                InputAction::Search(city) => self.search(&mut tasks, city),
            }

            // Reap finished fetches so the set does not grow unbounded
            while tasks.try_join_next().is_some() {}
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Fetch task failed");
            }
        }
        Ok(())
    }
}
