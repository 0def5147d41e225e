use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::city_cards::CITY_CARDS_HEIGHT;
use super::current_panel::CURRENT_PANEL_HEIGHT;
use super::forecast_strip::FORECAST_STRIP_HEIGHT;
use super::header::HEADER_HEIGHT;
use super::{
    CityCards, CityCardsProps, Component, CurrentPanel, CurrentPanelProps, DashboardHeader,
    DashboardHeaderProps, ERROR_ICON, ForecastStrip, ForecastStripProps,
};
use crate::action::Action;
use crate::models::WeatherData;
use crate::presentation::Palette;
use crate::state::AppState;

pub struct DashboardBody;

pub struct DashboardBodyProps<'a> {
    pub state: &'a AppState,
    pub palette: Palette,
}

impl Component<Action> for DashboardBody {
    type Props<'a> = DashboardBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match DashboardScreen::from_state(props.state) {
            DashboardScreen::Loading => render_loading(frame, area, props.state),
            DashboardScreen::Error(message) => render_error(frame, area, message),
            DashboardScreen::Ready(weather) => {
                render_ready(frame, area, props.state, weather, props.palette)
            }
            DashboardScreen::Empty => render_empty(frame, area),
        }
    }
}

// ============================================================================
// Screens
// ============================================================================

/// Which screen the body shows. An error wins over stale data.
enum DashboardScreen<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a WeatherData),
    Empty,
}

impl<'a> DashboardScreen<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.is_initial_loading() {
            DashboardScreen::Loading
        } else if let Some(error) = &state.error {
            DashboardScreen::Error(error)
        } else if let Some(weather) = &state.weather {
            DashboardScreen::Ready(weather)
        } else {
            DashboardScreen::Empty
        }
    }
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    weather: &WeatherData,
    palette: Palette,
) {
    let cities_height = if state.major_cities.is_empty() {
        0
    } else {
        CITY_CARDS_HEIGHT
    };
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CURRENT_PANEL_HEIGHT),
        Constraint::Length(FORECAST_STRIP_HEIGHT),
        Constraint::Length(cities_height),
    ])
    .split(area);

    DashboardHeader.render(
        frame,
        chunks[0],
        DashboardHeaderProps {
            location: &weather.location,
            clock_text: &state.clock_text,
            palette,
        },
    );

    CurrentPanel.render(
        frame,
        chunks[2],
        CurrentPanelProps {
            weather,
            unit: state.unit,
            palette,
        },
    );

    ForecastStrip.render(
        frame,
        chunks[3],
        ForecastStripProps {
            days: &weather.forecast.forecastday,
            unit: state.unit,
            palette,
        },
    );

    CityCards.render(
        frame,
        chunks[4],
        CityCardsProps {
            cities: &state.major_cities,
            unit: state.unit,
            palette,
        },
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(state.spinner_frame()).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from("Loading weather data...").centered()),
        chunks[1],
    );
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(255, 150, 150)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to try again", Style::default().fg(Color::Gray)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}
