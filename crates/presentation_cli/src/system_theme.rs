//! System theme detection
//!
//! Terminals such as rxvt and Konsole export `COLORFGBG="fg;bg"`; background
//! colour 7 or 15 means a light background.

use domain::Theme;

/// Environment variable carrying the terminal's colour pair
pub const COLORFGBG: &str = "COLORFGBG";

/// Theme the terminal appears to use, [`Theme::Dark`] when undetectable
pub fn detect() -> Theme {
    from_colorfgbg(std::env::var(COLORFGBG).ok().as_deref())
}

/// Interpret a `COLORFGBG` value
pub fn from_colorfgbg(value: Option<&str>) -> Theme {
    value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map_or(Theme::Dark, |bg| {
            if matches!(bg, 7 | 15) {
                Theme::Light
            } else {
                Theme::Dark
            }
        })
}
