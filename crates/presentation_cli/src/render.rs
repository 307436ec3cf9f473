//! Terminal rendering of the dashboard
//!
//! Produces the current-conditions panel, advisory banners, the 5-day strip
//! with trend bars, and error messages as plain strings.

use std::fmt::Write as _;

use application::ErrorKind;
use chrono::NaiveTime;
use domain::{Advisory, CityName, CurrentConditions, DayForecast, Theme, WeatherData};
use owo_colors::{OwoColorize, Style};

/// Bar height of the coldest day, in percent
pub const MIN_BAR_PERCENT: f64 = 20.0;

/// Bar height for every known day when the whole week has one temperature
pub const FLAT_BAR_PERCENT: f64 = 60.0;

/// Terminal columns of a 100% bar
const BAR_COLUMNS: f64 = 20.0;

const UNKNOWN: &str = "N/A";

/// Styles for one theme
#[derive(Debug, Clone, Copy)]
struct Palette {
    title: Style,
    muted: Style,
    value: Style,
    cold: Style,
    warn: Style,
    error: Style,
    bar: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                title: Style::new().bold().bright_cyan(),
                muted: Style::new().bright_black(),
                value: Style::new().bold().white(),
                cold: Style::new().bright_blue(),
                warn: Style::new().bold().yellow(),
                error: Style::new().bold().bright_red(),
                bar: Style::new().cyan(),
            },
            Theme::Light => Self {
                title: Style::new().bold().blue(),
                muted: Style::new().dimmed(),
                value: Style::new().bold().black(),
                cold: Style::new().blue(),
                warn: Style::new().bold().magenta(),
                error: Style::new().bold().red(),
                bar: Style::new().blue(),
            },
        }
    }
}

/// Renders dashboard pieces for one theme
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    color: bool,
    unit: &'static str,
}

impl Renderer {
    /// Create a renderer; with `color` off no escape codes are emitted
    pub fn new(theme: Theme, color: bool, units: &str) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            color,
            unit: unit_symbol(units),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn temp(&self, value: Option<i32>) -> String {
        value.map_or_else(|| UNKNOWN.to_string(), |t| format!("{t}{}", self.unit))
    }

    /// Full dashboard: panel, advisories and the 5-day strip
    pub fn dashboard(&self, data: &WeatherData) -> String {
        let mut out = self.current_panel(data);
        out.push('\n');
        out.push_str(&self.advisories(&data.advisories()));
        out.push('\n');
        out.push_str(&self.week_strip(&data.week));
        out
    }

    /// Location, date and current conditions
    pub fn current_panel(&self, data: &WeatherData) -> String {
        let p = self.palette;
        let c: &CurrentConditions = &data.current;
        let mut out = String::new();

        let _ = writeln!(out, "📍 {}", self.paint(&data.location, p.title));
        let _ = writeln!(out, "   {}", self.paint(&data.date, p.muted));
        let _ = writeln!(
            out,
            "\n   {}  {}   {}",
            c.icon.glyph(),
            self.paint(&self.temp(c.temperature), p.value),
            c.condition_text.as_deref().unwrap_or(c.icon.label())
        );
        let average = c
            .average_temp
            .map_or_else(|| UNKNOWN.to_string(), |a| format!("{a:.1}{}", self.unit));
        let _ = writeln!(
            out,
            "   Feels like {} · Average {}",
            self.temp(c.feels_like),
            average
        );
        let _ = writeln!(
            out,
            "   Sunrise {} · Sunset {}",
            format_clock(c.sunrise),
            format_clock(c.sunset)
        );
        let humidity = c
            .humidity
            .map_or_else(|| UNKNOWN.to_string(), |h| h.to_string());
        let pressure = c
            .pressure
            .map_or_else(|| UNKNOWN.to_string(), |hpa| format!("{hpa:.0} hPa"));
        let uv = c
            .uv_index_estimate
            .map_or_else(|| UNKNOWN.to_string(), |uv| uv.to_string());
        let _ = writeln!(
            out,
            "   Humidity {humidity} · Pressure {pressure} · UV {uv}"
        );
        out
    }

    /// One line per advisory
    pub fn advisories(&self, advisories: &[Advisory]) -> String {
        let p = self.palette;
        advisories
            .iter()
            .map(|advisory| {
                let style = match advisory {
                    Advisory::ColdDay { .. } => p.cold,
                    Advisory::HighUv { .. } => p.warn,
                    Advisory::NoAdvisory => p.muted,
                };
                format!("{} {}\n", advisory.glyph(), self.paint(&advisory.message(), style))
            })
            .collect()
    }

    /// The 5-day strip with one trend bar per day
    pub fn week_strip(&self, week: &[DayForecast]) -> String {
        let p = self.palette;
        let heights = bar_heights(week);
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.paint("5-day forecast", p.title));
        for (day, height) in week.iter().zip(heights) {
            let range = format!("{} / {}", self.temp(day.min_temp), self.temp(day.max_temp));
            let bar = "█".repeat(bar_columns(height));
            let _ = writeln!(
                out,
                "  {:<10} {}  {:<15} {:<20} {}",
                day.day_name,
                day.icon.glyph(),
                range,
                self.paint(&bar, p.bar),
                self.paint(day.status_label(), p.muted)
            );
        }
        out
    }

    /// Loading indicator
    pub fn loading(&self, city: &CityName) -> String {
        self.paint(&format!("⏳ Loading weather for {city}..."), self.palette.muted)
    }

    /// The fixed message for a failed fetch
    pub fn error(&self, kind: ErrorKind) -> String {
        format!("❌ {}", self.paint(kind.user_message(), self.palette.error))
    }

    /// Muted hint line
    pub fn hint(&self, text: &str) -> String {
        format!("💡 {}", self.paint(text, self.palette.muted))
    }
}

/// Temperature suffix for the provider unit system
fn unit_symbol(units: &str) -> &'static str {
    match units.trim().to_ascii_lowercase().as_str() {
        "imperial" => "°F",
        "standard" => "K",
        _ => "°C",
    }
}

/// Clock time as "6:30 AM", or N/A
pub fn format_clock(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| UNKNOWN.to_string(), |t| t.format("%-I:%M %p").to_string())
}

/// Trend bar height per day, in percent
///
/// `20 + 80 * (t - weekMin) / (weekMax - weekMin)`, where `t` is the day's
/// reference temperature and the week range spans every known low and high.
/// Days without a temperature sit at the floor; when all known lows and highs
/// are equal every known day gets [`FLAT_BAR_PERCENT`].
pub fn bar_heights(week: &[DayForecast]) -> Vec<f64> {
    let extremes = week
        .iter()
        .flat_map(|day| [day.min_temp, day.max_temp])
        .flatten();
    let (Some(min), Some(max)) = (extremes.clone().min(), extremes.max()) else {
        return vec![MIN_BAR_PERCENT; week.len()];
    };

    let flat = max == min;
    let span = f64::from(max) - f64::from(min);
    week.iter()
        .map(|day| match day.reference_temp() {
            None => MIN_BAR_PERCENT,
            Some(_) if flat => FLAT_BAR_PERCENT,
            Some(t) => {
                MIN_BAR_PERCENT + (100.0 - MIN_BAR_PERCENT) * (f64::from(t) - f64::from(min)) / span
            },
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_columns(height_percent: f64) -> usize {
    (height_percent.clamp(0.0, 100.0) / 100.0 * BAR_COLUMNS).round() as usize
}
