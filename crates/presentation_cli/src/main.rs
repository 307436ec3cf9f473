//! Skyboard CLI
//!
//! Terminal weather dashboard: current conditions, advisories and a 5-day
//! forecast for any city, backed by OpenWeatherMap.

#![allow(clippy::print_stdout)]

mod interactive;
mod render;
mod system_theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{ApplicationError, SettingsService, ThemeSource, WeatherService};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{CityName, Theme};
use infrastructure::{AppConfig, TomlSettingsStore, WeatherAdapter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::interactive::Dashboard;
use crate::render::Renderer;

/// Skyboard CLI
#[derive(Debug, Parser)]
#[command(name = "skyboard")]
#[command(author, version, about = "Terminal weather dashboard", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./skyboard.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// OpenWeatherMap API key
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the dashboard for one city and exit
    ///
    /// Example: skyboard show "New York"
    Show {
        /// City to look up
        city: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search cities interactively until :quit
    Interactive,

    /// Show or change the theme preference
    ///
    /// Example: skyboard theme light
    /// Example: skyboard theme --reset
    Theme {
        /// Theme to store
        #[arg(value_enum)]
        theme: Option<ThemeArg>,

        /// Forget the stored preference and follow the system theme
        #[arg(long, conflicts_with = "theme")]
        reset: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

/// Map verbosity level to log filter string
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so they never mix with the dashboard; `RUST_LOG` wins
/// over `-v`
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn weather_service(config: &AppConfig) -> anyhow::Result<Arc<WeatherService>> {
    let adapter = WeatherAdapter::with_config(config.weather.to_client_config())
        .context("Failed to create weather client")?;
    Ok(Arc::new(WeatherService::new(Arc::new(adapter))))
}

async fn show(
    service: &WeatherService,
    renderer: &Renderer,
    city: &str,
    json: bool,
) -> anyhow::Result<()> {
    let city = match CityName::new(city) {
        Ok(city) => city,
        Err(e) => {
            println!("❌ {e}");
            std::process::exit(2);
        },
    };

    match service.fetch(&city).await {
        Ok(data) if json => {
            let out = serde_json::json!({
                "weather": data,
                "advisories": data.advisories(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        },
        Ok(data) => println!("{}", renderer.dashboard(&data)),
        Err(e) => {
            report_failure(renderer, &e, json)?;
            std::process::exit(1);
        },
    }
    Ok(())
}

fn report_failure(renderer: &Renderer, err: &ApplicationError, json: bool) -> anyhow::Result<()> {
    tracing::debug!(error = %err, "Fetch failed");
    if json {
        let out = serde_json::json!({
            "error": err.kind(),
            "message": err.user_message(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", renderer.error(err.kind()));
    }
    Ok(())
}

fn theme(settings: &SettingsService, theme: Option<ThemeArg>, reset: bool) -> anyhow::Result<()> {
    if reset {
        let theme = settings.reset_theme().context("Failed to clear theme")?;
        println!("🎨 Theme preference cleared, following the system theme ({theme})");
    } else if let Some(theme) = theme {
        settings
            .set_theme(theme.into())
            .context("Failed to save theme")?;
        println!("🎨 Theme set to {}", settings.theme());
    } else {
        let source = match settings.source() {
            ThemeSource::Stored => "stored preference",
            ThemeSource::System => "system",
        };
        println!("🎨 Theme: {} ({source})", settings.theme());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.weather.apply_api_key_override(cli.api_key.as_deref());
    let color = config.display.color && !cli.no_color;

    let store = Arc::new(TomlSettingsStore::new(config.settings_path()));
    let settings = Arc::new(SettingsService::initialize(store, system_theme::detect()));

    match cli.command {
        Commands::Show { city, json } => {
            let service = weather_service(&config)?;
            let renderer = Renderer::new(settings.theme(), color, &config.weather.units);
            show(&service, &renderer, &city, json).await?;
        },

        Commands::Interactive => {
            let dashboard = Dashboard::new(
                weather_service(&config)?,
                Arc::clone(&settings),
                color,
                config.weather.units.clone(),
            );
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            dashboard.run(stdin).await?;
        },

        Commands::Theme { theme: arg, reset } => theme(&settings, arg, reset)?,
    }

    Ok(())
}
