//! Render tests using RenderHarness

mod common;

use common::sample_weather;
use tui_dispatch::testing::*;
use weather_dashboard::{
    action::Action,
    components::{
        CityCards, CityCardsProps, Component, DashboardView, DashboardViewProps, SearchOverlay,
        SearchOverlayProps,
    },
    models::LocationCandidate,
    presentation::Theme,
    state::{AppState, TempUnit},
};

fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = DashboardView;
    render.render_to_string_plain(|frame| {
        let props = DashboardViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn ready_state() -> AppState {
    let mut state = AppState {
        weather: Some(sample_weather("Faisalabad", "Partly cloudy", 33.4)),
        major_cities: vec![
            sample_weather("Karachi", "Mist", 31.0),
            sample_weather("Lahore", "Sunny", 36.0),
        ],
        clock_text: "02:15:00 PM".into(),
        ..Default::default()
    };
    state.theme = state.derive_theme();
    state
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        loading: true,
        ..Default::default()
    };

    let output = render_state(&state, 60, 20);
    assert!(output.contains("Loading weather data..."), "{output}");
}

#[test]
fn test_render_empty_state() {
    let output = render_state(&AppState::default(), 60, 20);
    assert!(output.contains("to fetch weather"), "{output}");
}

#[test]
fn test_render_dashboard_sections() {
    let output = render_state(&ready_state(), 140, 50);

    assert!(output.contains("Weather Dashboard"), "{output}");
    assert!(output.contains("02:15:00 PM"), "{output}");
    assert!(output.contains("Faisalabad"), "{output}");
    assert!(output.contains("Punjab, Pakistan"), "{output}");
    assert!(output.contains("Partly cloudy"), "{output}");
    assert!(output.contains("Feels like 35°C"), "{output}");
    assert!(output.contains("11.2 km/h"), "{output}");
    assert!(output.contains("05:02 AM"), "{output}");
    assert!(output.contains("7-Day Forecast"), "{output}");
    assert!(output.contains("Major Cities"), "{output}");
    assert!(output.contains("Karachi"), "{output}");
}

#[test]
fn test_render_forecast_labels() {
    let output = render_state(&ready_state(), 140, 50);

    let today = output.find("Today").expect("today label");
    let tuesday = output.find("Tuesday").expect("tuesday label");
    let sunday = output.find("Sunday").expect("sunday label");
    assert!(today < tuesday && tuesday < sunday, "{output}");
    assert!(!output.contains("Monday"), "{output}");
}

#[test]
fn test_render_without_cities_omits_section() {
    let state = AppState {
        major_cities: Vec::new(),
        ..ready_state()
    };

    let output = render_state(&state, 140, 50);
    assert!(output.contains("7-Day Forecast"), "{output}");
    assert!(!output.contains("Major Cities"), "{output}");
}

#[test]
fn test_render_help_bar() {
    let output = render_state(&ready_state(), 140, 50);

    assert!(output.contains("refresh"), "{output}");
    assert!(output.contains("search"), "{output}");
    assert!(output.contains("units"), "{output}");
    assert!(output.contains("quit"), "{output}");
}

#[test]
fn test_render_city_cards_in_fahrenheit() {
    let cities = vec![sample_weather("Islamabad", "Light rain", 25.0)];
    let mut render = RenderHarness::new(60, 10);

    let output = render.render_to_string_plain(|frame| {
        let props = CityCardsProps {
            cities: &cities,
            unit: TempUnit::Fahrenheit,
            palette: Theme::DayRain.palette(),
        };
        CityCards.render(frame, frame.area(), props);
    });

    assert!(output.contains("Islamabad"), "{output}");
    assert!(output.contains("77°F"), "{output}");
    assert!(output.contains("Light rain"), "{output}");
}

#[test]
fn test_render_search_overlay_results() {
    let results = vec![
        LocationCandidate {
            name: "London".into(),
            region: "City of London, Greater London".into(),
            country: "United Kingdom".into(),
            lat: 51.52,
            lon: -0.11,
            ..Default::default()
        },
        LocationCandidate {
            name: "Londonderry".into(),
            country: "United Kingdom".into(),
            ..Default::default()
        },
    ];
    let mut render = RenderHarness::new(100, 30);
    let mut overlay = SearchOverlay::new();

    let output = render.render_to_string_plain(|frame| {
        let props = SearchOverlayProps {
            query: "Lon",
            results: &results,
            selected: 0,
            is_focused: true,
            error: None,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
            on_select: Action::SearchSelect,
        };
        overlay.render(frame, frame.area(), props);
    });

    assert!(output.contains("London, City of London"), "{output}");
    assert!(output.contains("Londonderry, United Kingdom"), "{output}");
}

#[test]
fn test_render_search_overlay_error() {
    let mut render = RenderHarness::new(100, 30);
    let mut overlay = SearchOverlay::new();

    let output = render.render_to_string_plain(|frame| {
        let props = SearchOverlayProps {
            query: "zzz",
            results: &[],
            selected: 0,
            is_focused: true,
            error: Some("weather API error (400): no matching location"),
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
            on_select: Action::SearchSelect,
        };
        overlay.render(frame, frame.area(), props);
    });

    assert!(output.contains("no matching location"), "{output}");
}
