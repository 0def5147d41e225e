//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{LocationCandidate, WeatherData};
use crate::presentation::{self, Theme};

pub const DEFAULT_LOCATION: &str = "Faisalabad";
pub const DEFAULT_MAJOR_CITIES: [&str; 4] = ["Karachi", "Lahore", "Islamabad", "Peshawar"];

/// User-facing message for any primary fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load weather data. Please try again.";

/// Spinner timing for the loading screen
pub const SPINNER_TICK_MS: u64 = 120;
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Clock refresh period
pub const CLOCK_INTERVAL_SECS: u64 = 60;

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    /// Rounded reading in this unit. The provider reports both scales, so
    /// nothing is converted here.
    pub fn format(&self, celsius: f64, fahrenheit: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{}°C", presentation::display_temp(celsius)),
            TempUnit::Fahrenheit => format!("{}°F", presentation::display_temp(fahrenheit)),
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Location ---
    /// Active provider query: a place name or `"<lat>,<lon>"`
    #[debug(section = "Location", label = "Query")]
    pub current_location: String,

    /// Cities shown in the snapshot row
    #[debug(section = "Location", label = "Major cities", debug_fmt)]
    pub major_city_names: Vec<String>,

    // --- Weather ---
    /// Latest snapshot for `current_location`; kept across failed refetches
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: Option<WeatherData>,

    #[debug(section = "Weather", label = "Major cities", debug_fmt)]
    pub major_cities: Vec<WeatherData>,

    #[debug(section = "Weather", label = "Loading")]
    pub loading: bool,

    /// User-facing error; takes over the screen while set
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    /// Detail behind the last generic error message
    #[debug(section = "Weather", label = "Last failure", debug_fmt)]
    pub last_failure: Option<String>,

    // --- Presentation ---
    #[debug(section = "View", label = "Theme", debug_fmt)]
    pub theme: Theme,

    #[debug(section = "View", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    #[debug(section = "View", label = "Clock")]
    pub clock_text: String,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,

    // --- Search mode (skipped) ---
    /// Whether search overlay is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Pending search text
    #[debug(skip)]
    pub search_query: String,

    /// Suggestions from the provider's search endpoint
    #[debug(skip)]
    pub search_results: Vec<LocationCandidate>,

    #[debug(skip)]
    pub search_error: Option<String>,

    /// Selected index in search results
    #[debug(skip)]
    pub search_selected: usize,
}

impl AppState {
    /// Create state for the given location and snapshot cities
    pub fn new(location: impl Into<String>, major_city_names: Vec<String>) -> Self {
        Self {
            current_location: location.into(),
            major_city_names,
            weather: None,
            major_cities: Vec::new(),
            loading: false,
            error: None,
            last_failure: None,
            theme: Theme::default(),
            unit: TempUnit::default(),
            clock_text: presentation::midnight_clock_text(),
            tick_count: 0,
            search_mode: false,
            search_query: String::new(),
            search_results: Vec::new(),
            search_error: None,
            search_selected: 0,
        }
    }

    /// First load in progress: nothing to show yet
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.weather.is_none()
    }

    /// Background theme for the current snapshot
    pub fn derive_theme(&self) -> Theme {
        self.weather
            .as_ref()
            .map(|w| presentation::theme_for(w.current.is_day, &w.current.condition.text))
            .unwrap_or_default()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOCATION,
            DEFAULT_MAJOR_CITIES.iter().map(|c| c.to_string()).collect(),
        )
    }
}
