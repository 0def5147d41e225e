//! Display values derived from weather readings
//!
//! Theme and icon selection look alike but use different keyword sets: the theme
//! ignores "partly" and splits on day/night, the icon does the opposite. Keep them
//! as separate functions.

use chrono::{NaiveDate, NaiveTime, Timelike};
use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::CurrentWeather;

// ============================================================================
// Theme
// ============================================================================

/// Background variant: day/night × condition category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Theme {
    #[default]
    DayClear,
    DayCloudy,
    DayRain,
    DaySnow,
    DayFog,
    NightClear,
    NightCloudy,
    NightRain,
    NightSnow,
    NightFog,
}

/// Colors used to paint the dashboard for a theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Theme {
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::DayClear => "bg-day-clear",
            Theme::DayCloudy => "bg-day-cloudy",
            Theme::DayRain => "bg-day-rain",
            Theme::DaySnow => "bg-day-snow",
            Theme::DayFog => "bg-day-fog",
            Theme::NightClear => "bg-night-clear",
            Theme::NightCloudy => "bg-night-cloudy",
            Theme::NightRain => "bg-night-rain",
            Theme::NightSnow => "bg-night-snow",
            Theme::NightFog => "bg-night-fog",
        }
    }

    pub fn is_night(self) -> bool {
        matches!(
            self,
            Theme::NightClear
                | Theme::NightCloudy
                | Theme::NightRain
                | Theme::NightSnow
                | Theme::NightFog
        )
    }

    pub fn palette(self) -> Palette {
        let background = match self {
            Theme::DayClear => Color::Rgb(30, 110, 190),
            Theme::DayCloudy => Color::Rgb(90, 105, 125),
            Theme::DayRain => Color::Rgb(55, 75, 105),
            Theme::DaySnow => Color::Rgb(120, 140, 165),
            Theme::DayFog => Color::Rgb(110, 115, 120),
            Theme::NightClear => Color::Rgb(15, 20, 50),
            Theme::NightCloudy => Color::Rgb(35, 40, 55),
            Theme::NightRain => Color::Rgb(20, 30, 50),
            Theme::NightSnow => Color::Rgb(45, 55, 75),
            Theme::NightFog => Color::Rgb(40, 42, 48),
        };
        Palette {
            background,
            foreground: Color::White,
            accent: if self.is_night() {
                Color::Rgb(180, 190, 255)
            } else {
                Color::Rgb(255, 220, 100)
            },
            muted: Color::Rgb(190, 200, 215),
        }
    }
}

/// Background theme for the current reading.
pub fn theme_for(is_day: u8, condition_text: &str) -> Theme {
    let condition = condition_text.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| condition.contains(w));
    let day = is_day == 1;

    let (day_theme, night_theme) = if has(&["cloud", "overcast"]) {
        (Theme::DayCloudy, Theme::NightCloudy)
    } else if has(&["rain", "drizzle"]) {
        (Theme::DayRain, Theme::NightRain)
    } else if has(&["snow", "sleet"]) {
        (Theme::DaySnow, Theme::NightSnow)
    } else if has(&["fog", "mist"]) {
        (Theme::DayFog, Theme::NightFog)
    } else {
        (Theme::DayClear, Theme::NightClear)
    };

    if day { day_theme } else { night_theme }
}

// ============================================================================
// Icons
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Cloudy,
    Rain,
    Snow,
    Fog,
    PartlySunny,
    Sunny,
    Moon,
}

impl WeatherIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Cloudy => "\u{2601}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
            WeatherIcon::Fog => "\u{1f32b}\u{fe0f}",
            WeatherIcon::PartlySunny => "\u{26c5}",
            WeatherIcon::Sunny => "\u{2600}\u{fe0f}",
            WeatherIcon::Moon => "\u{1f319}",
        }
    }

    pub fn color(self) -> Color {
        match self {
            WeatherIcon::Cloudy => Color::Gray,
            WeatherIcon::Rain => Color::LightBlue,
            WeatherIcon::Snow => Color::White,
            WeatherIcon::Fog => Color::DarkGray,
            WeatherIcon::PartlySunny | WeatherIcon::Sunny => Color::Yellow,
            WeatherIcon::Moon => Color::Rgb(240, 230, 160),
        }
    }
}

/// Icon for any reading's condition text (current, forecast day, city).
///
/// "partly" is checked before "cloud" so "Partly cloudy" gets the sun-and-cloud icon.
pub fn icon_for_condition(condition_text: &str) -> WeatherIcon {
    let condition = condition_text.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| condition.contains(w));

    if has(&["partly"]) {
        WeatherIcon::PartlySunny
    } else if has(&["cloud", "overcast"]) {
        WeatherIcon::Cloudy
    } else if has(&["rain", "drizzle"]) {
        WeatherIcon::Rain
    } else if has(&["snow", "sleet"]) {
        WeatherIcon::Snow
    } else if has(&["fog", "mist"]) {
        WeatherIcon::Fog
    } else {
        WeatherIcon::Sunny
    }
}

/// Icon for the primary location's current reading.
///
/// A clear night shows the moon. The match on "Clear" is exact and case-sensitive.
pub fn current_icon(current: &CurrentWeather) -> WeatherIcon {
    if current.is_day == 0 && current.condition.text == "Clear" {
        WeatherIcon::Moon
    } else {
        icon_for_condition(&current.condition.text)
    }
}

// ============================================================================
// Numbers, dates, clock
// ============================================================================

/// Nearest whole number, rounding halves up: 21.5 → 22, -0.5 → 0, -1.5 → -1.
pub fn display_whole(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Whole degrees for display. Stored readings keep full precision.
pub fn display_temp(value: f64) -> i64 {
    display_whole(value)
}

/// Column heading for a forecast day: "Today" first, weekday names after.
pub fn forecast_label(index: usize, date: &str) -> String {
    if index == 0 {
        return "Today".to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%A").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Wall-clock text, 12-hour with seconds (e.g. "03:07:09 PM").
pub fn clock_text<T: Timelike>(now: &T) -> String {
    let (is_pm, hour) = now.hour12();
    format!(
        "{:02}:{:02}:{:02} {}",
        hour,
        now.minute(),
        now.second(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Clock text for the local time right now.
pub fn local_clock_text() -> String {
    clock_text(&chrono::Local::now().time())
}

/// Clock text shown before the first reading of the wall clock.
pub fn midnight_clock_text() -> String {
    clock_text(&NaiveTime::MIN)
}
