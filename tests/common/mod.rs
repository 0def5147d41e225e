//! Sample provider payloads shared by the integration tests

#![allow(dead_code)]

use weather_dashboard::models::{
    Astro, CurrentWeather, DayAggregate, ForecastDay, WeatherCondition, WeatherData,
    WeatherForecast, WeatherLocation,
};

pub const FORECAST_DATES: [&str; 7] = [
    "2024-06-03",
    "2024-06-04",
    "2024-06-05",
    "2024-06-06",
    "2024-06-07",
    "2024-06-08",
    "2024-06-09",
];

fn condition(text: &str) -> WeatherCondition {
    WeatherCondition {
        text: text.into(),
        icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".into(),
        code: 1000,
    }
}

fn forecast_day(date: &str, text: &str, min_c: f64, max_c: f64) -> ForecastDay {
    ForecastDay {
        date: date.into(),
        day: DayAggregate {
            maxtemp_c: max_c,
            maxtemp_f: max_c * 9.0 / 5.0 + 32.0,
            mintemp_c: min_c,
            mintemp_f: min_c * 9.0 / 5.0 + 32.0,
            maxwind_kph: 14.8,
            avghumidity: 38.0,
            condition: condition(text),
            ..Default::default()
        },
        astro: Astro {
            sunrise: "05:02 AM".into(),
            sunset: "07:13 PM".into(),
            ..Default::default()
        },
        hour: Vec::new(),
    }
}

/// A city with current conditions and a seven-day forecast.
pub fn sample_weather(name: &str, text: &str, temp_c: f64) -> WeatherData {
    WeatherData {
        location: WeatherLocation {
            name: name.into(),
            region: "Punjab".into(),
            country: "Pakistan".into(),
            lat: 31.42,
            lon: 73.08,
            tz_id: "Asia/Karachi".into(),
            localtime: "2024-06-03 14:15".into(),
        },
        current: CurrentWeather {
            temp_c,
            temp_f: temp_c * 9.0 / 5.0 + 32.0,
            feelslike_c: temp_c + 2.0,
            feelslike_f: (temp_c + 2.0) * 9.0 / 5.0 + 32.0,
            condition: condition(text),
            wind_kph: 11.2,
            wind_dir: "NW".into(),
            humidity: 34.0,
            is_day: 1,
            ..Default::default()
        },
        forecast: WeatherForecast {
            forecastday: FORECAST_DATES
                .iter()
                .map(|date| forecast_day(date, "Sunny", 27.0, 41.0))
                .collect(),
        },
    }
}
