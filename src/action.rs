//! Actions, grouped by naming prefix so categories are inferred

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geolocation::{Coordinates, GeolocationError};
use crate::models::{LocationCandidate, WeatherData};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: load weather for the current location (startup and retry)
    WeatherFetch,

    /// Result: primary location loaded
    WeatherDidLoad(Box<WeatherData>),

    /// Result: primary fetch failed (detail only; the UI shows a generic message)
    WeatherDidError(String),

    // ===== Cities category =====
    /// Result: every major city loaded, in configured order
    CitiesDidLoad(Vec<WeatherData>),

    /// Result: the batch failed as a whole
    CitiesDidError(String),

    // ===== Search category =====
    /// Open city search overlay
    SearchOpen,

    /// Close search overlay (cancel)
    SearchClose,

    /// Search query text changed
    SearchQueryChange(String),

    /// Submit free text as the new location
    SearchQuerySubmit(String),

    /// Result: suggestions from the provider's search endpoint
    SearchDidLoad(Vec<LocationCandidate>),

    /// Result: suggestion lookup failed
    SearchDidError(String),

    /// Select a result in the list (by index)
    SearchSelect(usize),

    /// Confirm selection - switch to selected location
    SearchConfirm,

    // ===== Locate category =====
    /// Intent: use the host's position as the location
    LocateRequest,

    LocateDidSucceed(Coordinates),

    LocateDidFail(GeolocationError),

    // ===== Clock category =====
    ClockDidUpdate(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Spinner tick
    Tick,

    /// Exit the application
    Quit,
}
