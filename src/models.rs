//! WeatherAPI.com response records
//!
//! These mirror the provider's JSON one-to-one and are never mutated after decoding;
//! the view only projects them into display values (see [`crate::presentation`]).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Place a reading applies to
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    #[serde(default)]
    pub localtime: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherCondition {
    pub text: String,
    pub icon: String,
    pub code: u32,
}

/// Point-in-time snapshot for the queried location
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub condition: WeatherCondition,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub humidity: f64,
    pub cloud: f64,
    /// 1 = day, 0 = night
    pub is_day: u8,
    pub uv: f64,
    pub vis_km: f64,
}

impl CurrentWeather {
    pub fn is_day(&self) -> bool {
        self.is_day == 1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayAggregate {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub maxwind_kph: f64,
    pub maxwind_mph: f64,
    pub totalprecip_mm: f64,
    pub totalsnow_cm: f64,
    pub avgvis_km: f64,
    pub avghumidity: f64,
    pub daily_will_it_rain: u8,
    pub daily_chance_of_rain: f64,
    pub daily_will_it_snow: u8,
    pub daily_chance_of_snow: f64,
    pub condition: WeatherCondition,
    pub uv: f64,
}

/// Sun and moon times, kept as the provider's display strings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HourlyReading {
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: WeatherCondition,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub humidity: f64,
    pub cloud: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub windchill_c: f64,
    pub windchill_f: f64,
    pub heatindex_c: f64,
    pub heatindex_f: f64,
    pub dewpoint_c: f64,
    pub dewpoint_f: f64,
    pub will_it_rain: u8,
    pub chance_of_rain: f64,
    pub will_it_snow: u8,
    pub chance_of_snow: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub gust_kph: f64,
    pub gust_mph: f64,
    pub uv: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub day: DayAggregate,
    pub astro: Astro,
    pub hour: Vec<HourlyReading>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherForecast {
    /// Chronological; index 0 is today
    pub forecastday: Vec<ForecastDay>,
}

/// Body of `forecast.json`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherData {
    pub location: WeatherLocation,
    pub current: CurrentWeather,
    pub forecast: WeatherForecast,
}

impl WeatherData {
    /// Today's forecast entry, if the provider sent any days at all.
    pub fn today(&self) -> Option<&ForecastDay> {
        self.forecast.forecastday.first()
    }
}

/// One entry of `search.json`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LocationCandidate {
    pub id: Option<u64>,
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub url: Option<String>,
}

impl LocationCandidate {
    /// Query string that pins the provider to this exact candidate.
    pub fn query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }

    pub fn display_name(&self) -> String {
        [self.name.as_str(), self.region.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_location_extras_are_optional() {
        let json = r#"{"name":"Lahore","region":"Punjab","country":"PK","lat":31.55,"lon":74.34}"#;
        let location: WeatherLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.name, "Lahore");
        assert!(location.tz_id.is_empty());
    }

    #[test]
    fn test_candidate_tolerates_partial_entries() {
        let json = r#"[{"name":"Karachi","country":"Pakistan","lat":24.87,"lon":67.05},{}]"#;
        let candidates: Vec<LocationCandidate> = serde_json::from_str(json).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].display_name(), "Karachi, Pakistan");
        assert_eq!(candidates[0].query(), "24.87,67.05");
        assert_eq!(candidates[1].display_name(), "");
    }

    #[test]
    fn test_today_is_first_forecast_day() {
        let mut data = WeatherData::default();
        assert!(data.today().is_none());

        data.forecast.forecastday = vec![
            ForecastDay {
                date: "2024-06-01".into(),
                ..Default::default()
            },
            ForecastDay {
                date: "2024-06-02".into(),
                ..Default::default()
            },
        ];
        assert_eq!(data.today().map(|d| d.date.as_str()), Some("2024-06-01"));
    }
}
