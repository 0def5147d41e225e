use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
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

/// Current conditions: icon, big temperature, and four detail cards.
pub struct CurrentPanel;

pub struct CurrentPanelProps<'a> {
    pub weather: &'a WeatherData,
    pub unit: TempUnit,
    pub palette: Palette,
}

pub const CURRENT_PANEL_HEIGHT: u16 = 12;

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

impl Component<Action> for CurrentPanel {
    type Props<'a> = CurrentPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let columns =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);

        render_conditions(frame, columns[0], &props);
        render_details(frame, columns[1], &props);
    }
}

fn render_conditions(frame: &mut Frame, area: Rect, props: &CurrentPanelProps<'_>) {
    let block = Block::bordered().border_style(Style::default().fg(props.palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = &props.weather.current;
    let chunks = Layout::vertical([
        Constraint::Length(1), // Icon
        Constraint::Fill(1),   // FIGlet temperature
        Constraint::Length(1), // Feels like
        Constraint::Length(1), // Condition
    ])
    .split(inner);

    let icon = presentation::current_icon(current);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(icon.glyph(), Style::default().fg(icon.color()))).centered(),
        ),
        chunks[0],
    );

    let temp_text = props.unit.format(current.temp_c, current.temp_f);
    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(current.temp_c));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[1]);

    let feels = Line::from(Span::styled(
        format!(
            "Feels like {}",
            props.unit.format(current.feelslike_c, current.feelslike_f)
        ),
        Style::default().fg(props.palette.muted),
    ))
    .centered();
    frame.render_widget(Paragraph::new(feels), chunks[2]);

    let condition = Line::from(Span::styled(
        current.condition.text.clone(),
        Style::default().fg(props.palette.foreground).bold(),
    ))
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[3]);
}

fn render_details(frame: &mut Frame, area: Rect, props: &CurrentPanelProps<'_>) {
    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
    let top = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[0]);
    let bottom =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[1]);

    let current = &props.weather.current;

    detail_card(
        frame,
        top[0],
        props.palette,
        "\u{1f32c} Wind",
        format!("{} km/h", current.wind_kph),
        Some(current.wind_dir.clone()),
    );
    detail_card(
        frame,
        top[1],
        props.palette,
        "\u{1f4a7} Humidity",
        format!("{}%", current.humidity),
        None,
    );

    // Today-derived cards are skipped if the provider sent no forecast days
    if let Some(today) = props.weather.today() {
        detail_card(
            frame,
            bottom[0],
            props.palette,
            "\u{1f321} Min / Max",
            format!(
                "{} / {}",
                props.unit.format(today.day.mintemp_c, today.day.mintemp_f),
                props.unit.format(today.day.maxtemp_c, today.day.maxtemp_f)
            ),
            None,
        );
        detail_card(
            frame,
            bottom[1],
            props.palette,
            "\u{1f305} Sunrise / Sunset",
            format!("{} / {}", today.astro.sunrise, today.astro.sunset),
            None,
        );
    }
}

fn detail_card(
    frame: &mut Frame,
    area: Rect,
    palette: Palette,
    title: &str,
    value: String,
    caption: Option<String>,
) {
    let block = Block::bordered()
        .border_style(Style::default().fg(palette.muted))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.foreground).bold(),
        ));
    let mut lines = vec![Line::from(Span::styled(
        value,
        Style::default().fg(palette.foreground).bold(),
    ))];
    if let Some(caption) = caption {
        lines.push(Line::from(Span::styled(
            caption,
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
