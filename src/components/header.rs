use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::models::WeatherLocation;
use crate::presentation::Palette;

pub const HEADER_HEIGHT: u16 = 3;

pub struct DashboardHeader;

pub struct DashboardHeaderProps<'a> {
    pub location: &'a WeatherLocation,
    pub clock_text: &'a str,
    pub palette: Palette,
}

impl Component<Action> for DashboardHeader {
    type Props<'a> = DashboardHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([
            Constraint::Length(1), // Title + clock
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Location
        ])
        .split(area);

        let top = Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).split(rows[0]);

        let title = Line::from(Span::styled(
            "Weather Dashboard",
            Style::default().fg(props.palette.foreground).bold(),
        ));
        frame.render_widget(Paragraph::new(title), top[0]);

        let clock = Line::from(vec![
            Span::styled("\u{23f0} ", Style::default().fg(props.palette.muted)),
            Span::styled(props.clock_text, Style::default().fg(props.palette.foreground)),
        ])
        .right_aligned();
        frame.render_widget(Paragraph::new(clock), top[1]);

        let location = Line::from(vec![
            Span::styled("\u{1f4cd} ", Style::default().fg(props.palette.accent)),
            Span::styled(
                props.location.name.clone(),
                Style::default().fg(props.palette.foreground).bold(),
            ),
            Span::styled(
                format!("  {}, {}", props.location.region, props.location.country),
                Style::default().fg(props.palette.muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(location), rows[2]);
    }
}
