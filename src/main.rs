//! Weather dashboard - current conditions, a 7-day forecast and a major-city snapshot

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{info, warn};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_dashboard::action::Action;
use weather_dashboard::api::{ClientConfig, DEFAULT_BASE_URL, WeatherApiClient, WeatherProvider};
use weather_dashboard::components::{
    Component, DashboardView, DashboardViewProps, SearchOverlay, SearchOverlayProps,
};
use weather_dashboard::effect::Effect;
use weather_dashboard::geolocation::{DisabledGeolocator, Geolocator, IpGeolocator};
use weather_dashboard::logging;
use weather_dashboard::presentation::local_clock_text;
use weather_dashboard::reducer::reducer;
use weather_dashboard::state::{
    AppState, CLOCK_INTERVAL_SECS, DEFAULT_LOCATION, DEFAULT_MAJOR_CITIES, SPINNER_TICK_MS,
};

const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Weather dashboard backed by WeatherAPI.com
#[derive(Parser, Debug)]
#[command(name = "weather-dashboard")]
#[command(about = "Current weather, 7-day forecast and major cities in the terminal")]
struct Args {
    /// Location shown at startup (place name or "lat,lon")
    #[arg(long, short, default_value = DEFAULT_LOCATION)]
    city: String,

    /// Comma-separated snapshot cities
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_MAJOR_CITIES.map(String::from))]
    cities: Vec<String>,

    /// WeatherAPI.com key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Disable the "my location" lookup
    #[arg(long)]
    no_geolocation: bool,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DashboardComponentId {
    Dashboard,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DashboardContext {
    Main,
    Search,
}

impl EventRoutingState<DashboardComponentId, DashboardContext> for AppState {
    fn focused(&self) -> Option<DashboardComponentId> {
        if self.search_mode {
            Some(DashboardComponentId::Search)
        } else {
            Some(DashboardComponentId::Dashboard)
        }
    }

    fn modal(&self) -> Option<DashboardComponentId> {
        self.search_mode.then_some(DashboardComponentId::Search)
    }

    fn binding_context(&self, id: DashboardComponentId) -> DashboardContext {
        match id {
            DashboardComponentId::Dashboard => DashboardContext::Main,
            DashboardComponentId::Search => DashboardContext::Search,
        }
    }

    fn default_context(&self) -> DashboardContext {
        DashboardContext::Main
    }
}

/// Services the effect handler needs
#[derive(Clone)]
struct Services {
    weather: Arc<dyn WeatherProvider>,
    geolocator: Arc<dyn Geolocator>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        cities,
        api_key,
        base_url,
        no_geolocation,
        log_file,
        debug: debug_args,
    } = Args::parse();

    logging::init(log_file.as_deref())?;

    let cities: Vec<String> = cities
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    info!(%city, ?cities, no_geolocation, "starting weather dashboard");

    let config = ClientConfig::new(api_key).with_base_url(base_url);
    let services = Services {
        weather: Arc::new(WeatherApiClient::new(config)),
        geolocator: if no_geolocation {
            Arc::new(DisabledGeolocator)
        } else {
            Arc::new(IpGeolocator::default())
        },
    };

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let mut state = AppState::new(city, cities);
            state.clock_text = local_clock_text();
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut terminal = enter_terminal(use_alt_screen)?;
    let result = run_app(&mut terminal, &debug, store, services, replay_actions).await;
    leave_terminal(&mut terminal, use_alt_screen)?;

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct DashboardUi {
    dashboard: DashboardView,
    search: SearchOverlay,
}

impl DashboardUi {
    fn new() -> Self {
        Self {
            dashboard: DashboardView,
            search: SearchOverlay::new(),
        }
    }

    fn search_props<'a>(state: &'a AppState, is_focused: bool) -> SearchOverlayProps<'a> {
        SearchOverlayProps {
            query: &state.search_query,
            results: &state.search_results,
            selected: state.search_selected,
            is_focused,
            error: state.search_error.as_deref(),
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
            on_select: Action::SearchSelect,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DashboardComponentId>,
    ) {
        event_ctx.set_component_area(DashboardComponentId::Dashboard, area);

        let props = DashboardViewProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.dashboard.render(frame, area, props);

        self.search.set_open(state.search_mode);
        if state.search_mode {
            let modal_area = centered_rect(60, 12, area);
            event_ctx.set_component_area(DashboardComponentId::Search, modal_area);
            let props = Self::search_props(state, render_ctx.is_focused());
            self.search.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&DashboardComponentId::Search);
        }
    }

    /// Route a terminal event to one component. The search overlay is modal, so
    /// it consumes every event while open.
    fn handle_event(
        &mut self,
        id: DashboardComponentId,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions: Vec<Action> = match id {
            DashboardComponentId::Dashboard => {
                let props = DashboardViewProps {
                    state,
                    is_focused: true,
                };
                self.dashboard.handle_event(event, props).into_iter().collect()
            }
            DashboardComponentId::Search => {
                self.search.set_open(state.search_mode);
                let props = Self::search_props(state, true);
                self.search.handle_event(event, props).into_iter().collect()
            }
        };

        let consumed = id == DashboardComponentId::Search || !actions.is_empty();
        if !consumed {
            return HandlerResponse::ignored();
        }
        HandlerResponse {
            actions,
            consumed,
            needs_render: false,
        }
    }
}

type DashboardTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn enter_terminal(use_alt_screen: bool) -> io::Result<DashboardTerminal> {
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_terminal(terminal: &mut DashboardTerminal, use_alt_screen: bool) -> io::Result<()> {
    if !use_alt_screen {
        return Ok(());
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    services: Services,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DashboardUi::new()));
    let mut bus: EventBus<AppState, Action, DashboardComponentId, DashboardContext> =
        EventBus::new();
    let keybindings: Keybindings<DashboardContext> = Keybindings::new();

    for id in [DashboardComponentId::Dashboard, DashboardComponentId::Search] {
        let ui = Rc::clone(&ui);
        bus.register(id, move |event, state| {
            ui.borrow_mut().handle_event(id, &event.kind, state)
        });
    }

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );

                runtime.subscriptions().interval(
                    "clock",
                    Duration::from_secs(CLOCK_INTERVAL_SECS),
                    || Action::ClockDidUpdate(local_clock_text()),
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&services, effect, ctx),
        )
        .await
}

/// Handle effects by spawning keyed tasks; a newer task under the same key
/// replaces the older one.
fn handle_effect(services: &Services, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchWeather { query } => {
            let weather = Arc::clone(&services.weather);
            ctx.tasks().spawn("weather", async move {
                match weather.fetch_current_weather(&query).await {
                    Ok(data) => Action::WeatherDidLoad(Box::new(data)),
                    Err(e) => {
                        warn!(error = %e, %query, "weather fetch failed");
                        Action::WeatherDidError(e.to_string())
                    }
                }
            });
        }
        Effect::FetchMajorCities { cities } => {
            let weather = Arc::clone(&services.weather);
            ctx.tasks().spawn("major_cities", async move {
                match weather.fetch_major_cities_weather(&cities).await {
                    Ok(data) => Action::CitiesDidLoad(data),
                    Err(e) => Action::CitiesDidError(e.to_string()),
                }
            });
        }
        Effect::SearchLocations { query } => {
            let query = query.trim().to_string();
            if query.is_empty() {
                ctx.tasks().cancel(&TaskKey::new("location_search"));
                return;
            }
            let weather = Arc::clone(&services.weather);
            ctx.tasks().debounce(
                "location_search",
                Duration::from_millis(SEARCH_DEBOUNCE_MS),
                async move {
                    match weather.search_locations(&query).await {
                        Ok(results) => Action::SearchDidLoad(results),
                        Err(e) => Action::SearchDidError(e.to_string()),
                    }
                },
            );
        }
        Effect::Locate => {
            let geolocator = Arc::clone(&services.geolocator);
            ctx.tasks().spawn("locate", async move {
                match geolocator.locate().await {
                    Ok(coords) => Action::LocateDidSucceed(coords),
                    Err(e) => {
                        warn!(error = %e, "geolocation failed");
                        Action::LocateDidFail(e)
                    }
                }
            });
        }
    }
}
