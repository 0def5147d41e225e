//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather and forecast for a query
    FetchWeather { query: String },
    /// Fetch the snapshot cities as one all-or-nothing batch
    FetchMajorCities { cities: Vec<String> },
    /// Look up location suggestions
    SearchLocations { query: String },
    /// Resolve the host's position
    Locate,
}
