use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, DashboardBody, DashboardBodyProps};
use crate::action::Action;
use crate::presentation::{Palette, Theme};
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for DashboardView - read-only view of state
pub struct DashboardViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main dashboard component
#[derive(Default)]
pub struct DashboardView;

impl DashboardView {
    /// Loading and error screens use the night-clear backdrop; the dashboard
    /// follows the weather.
    fn palette(state: &AppState) -> Palette {
        if state.weather.is_some() && state.error.is_none() {
            state.theme.palette()
        } else {
            Theme::NightClear.palette()
        }
    }
}

impl Component<Action> for DashboardView {
    type Props<'a> = DashboardViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('l') => Some(Action::LocateRequest),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardViewProps<'_>) {
        let palette = Self::palette(props.state);
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
            area,
        );

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut body = DashboardBody;
        body.render(
            frame,
            chunks[0],
            DashboardBodyProps {
                state: props.state,
                palette,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("l", "my location"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
