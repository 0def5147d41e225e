use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::models::ForecastDay;
use crate::presentation::{self, Palette};
use crate::state::TempUnit;

/// One column per forecast day, in provider order.
pub struct ForecastStrip;

pub struct ForecastStripProps<'a> {
    pub days: &'a [ForecastDay],
    pub unit: TempUnit,
    pub palette: Palette,
}

/// Title row + bordered day cards
pub const FORECAST_STRIP_HEIGHT: u16 = 8;

impl Component<Action> for ForecastStrip {
    type Props<'a> = ForecastStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).split(area);

        let title = Line::from(Span::styled(
            format!("{}-Day Forecast", props.days.len()),
            Style::default().fg(props.palette.foreground).bold(),
        ));
        frame.render_widget(Paragraph::new(title), rows[0]);

        if props.days.is_empty() {
            return;
        }

        let count = props.days.len() as u32;
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, count); props.days.len()]).split(rows[1]);

        for (index, (day, column)) in props.days.iter().zip(columns.iter()).enumerate() {
            render_day(frame, *column, index, day, props.unit, props.palette);
        }
    }
}

fn render_day(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    day: &ForecastDay,
    unit: TempUnit,
    palette: Palette,
) {
    let label = presentation::forecast_label(index, &day.date);
    let block = Block::bordered()
        .border_style(Style::default().fg(palette.muted))
        .title(
            Line::from(Span::styled(
                label,
                Style::default().fg(palette.foreground).bold(),
            ))
            .centered(),
        );

    let aggregate = &day.day;
    let icon = presentation::icon_for_condition(&aggregate.condition.text);
    let muted = Style::default().fg(palette.muted);
    let value = Style::default().fg(palette.foreground);

    let lines = vec![
        Line::from(Span::styled(icon.glyph(), Style::default().fg(icon.color()))).centered(),
        Line::from(Span::styled(aggregate.condition.text.clone(), value)).centered(),
        Line::from(vec![
            Span::styled("Min ", muted),
            Span::styled(unit.format(aggregate.mintemp_c, aggregate.mintemp_f), value),
        ]),
        Line::from(vec![
            Span::styled("Max ", muted),
            Span::styled(unit.format(aggregate.maxtemp_c, aggregate.maxtemp_f), value),
        ]),
        Line::from(vec![
            Span::styled(format!("\u{1f4a7}{}% ", aggregate.avghumidity), muted),
            Span::styled(
                format!("{} km/h", presentation::display_whole(aggregate.maxwind_kph)),
                muted,
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Theme;
    use tui_dispatch::testing::*;

    fn day(date: &str, text: &str) -> ForecastDay {
        let mut day = ForecastDay {
            date: date.into(),
            ..Default::default()
        };
        day.day.condition.text = text.into();
        day
    }

    #[test]
    fn test_render_labels_in_order() {
        let days = vec![
            day("2024-06-03", "Sunny"),
            day("2024-06-04", "Rain"),
            day("2024-06-05", "Mist"),
        ];
        let mut render = RenderHarness::new(90, 10);
        let mut component = ForecastStrip;

        let output = render.render_to_string_plain(|frame| {
            let props = ForecastStripProps {
                days: &days,
                unit: TempUnit::Celsius,
                palette: Theme::DayClear.palette(),
            };
            component.render(frame, frame.area(), props);
        });

        let today = output.find("Today").expect("today label");
        let tuesday = output.find("Tuesday").expect("tuesday label");
        let wednesday = output.find("Wednesday").expect("wednesday label");
        assert!(today < tuesday && tuesday < wednesday, "{output}");
        assert!(output.contains("3-Day Forecast"));
        assert!(!output.contains("Monday"), "index 0 is always Today");
    }
}
