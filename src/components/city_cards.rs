use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::models::WeatherData;
use crate::presentation::{self, Palette};
use crate::state::TempUnit;

/// Snapshot row for the configured major cities
pub struct CityCards;

pub struct CityCardsProps<'a> {
    pub cities: &'a [WeatherData],
    pub unit: TempUnit,
    pub palette: Palette,
}

pub const CITY_CARDS_HEIGHT: u16 = 9;

impl Component<Action> for CityCards {
    type Props<'a> = CityCardsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.cities.is_empty() {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).split(area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Major Cities",
                Style::default().fg(props.palette.foreground).bold(),
            ))),
            rows[0],
        );

        let count = props.cities.len() as u32;
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count); props.cities.len()])
            .split(rows[1]);

        for (city, column) in props.cities.iter().zip(columns.iter()) {
            render_city(frame, *column, city, props.unit, props.palette);
        }
    }
}

fn render_city(
    frame: &mut Frame,
    area: Rect,
    city: &WeatherData,
    unit: TempUnit,
    palette: Palette,
) {
    let block = Block::bordered()
        .border_style(Style::default().fg(palette.muted))
        .title(Span::styled(
            format!(" {} ", city.location.name),
            Style::default().fg(palette.foreground).bold(),
        ));

    let current = &city.current;
    let icon = presentation::icon_for_condition(&current.condition.text);
    let muted = Style::default().fg(palette.muted);

    let lines = vec![
        Line::from(Span::styled(city.location.region.clone(), muted)),
        Line::from(Span::styled(
            unit.format(current.temp_c, current.temp_f),
            Style::default().fg(palette.foreground).bold(),
        )),
        Line::from(Span::styled(
            format!("Feels like {}", unit.format(current.feelslike_c, current.feelslike_f)),
            muted,
        )),
        Line::from(vec![
            Span::styled(icon.glyph(), Style::default().fg(icon.color())),
            Span::raw(" "),
            Span::styled(
                current.condition.text.clone(),
                Style::default().fg(palette.foreground),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "\u{1f4a7}{}%  \u{1f32c}{} km/h",
                current.humidity,
                presentation::display_whole(current.wind_kph)
            ),
            muted,
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
