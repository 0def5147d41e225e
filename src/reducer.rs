//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::models::LocationCandidate;
use crate::state::{AppState, FETCH_ERROR_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => begin_fetch(state),

        Action::WeatherDidLoad(data) => {
            state.weather = Some(*data);
            state.theme = state.derive_theme();
            state.last_failure = None;
            // Stays loading until the cities batch settles
            DispatchResult::changed_with(Effect::FetchMajorCities {
                cities: state.major_city_names.clone(),
            })
        }

        Action::WeatherDidError(detail) => {
            state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            state.last_failure = Some(detail);
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== Cities actions =====
        Action::CitiesDidLoad(cities) => {
            state.major_cities = cities;
            state.loading = false;
            DispatchResult::changed()
        }

        Action::CitiesDidError(_) => {
            state.major_cities.clear();
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            reset_search(state);
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            reset_search(state);
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query;
            // Suggestions belong to the previous text until the new lookup lands
            state.search_results.clear();
            state.search_selected = 0;
            state.search_error = None;
            DispatchResult::changed_with(Effect::SearchLocations {
                query: state.search_query.clone(),
            })
        }

        Action::SearchQuerySubmit(query) => {
            let query = query.trim();
            if query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.current_location = query.to_string();
            state.search_mode = false;
            reset_search(state);
            begin_fetch(state)
        }

        Action::SearchDidLoad(results) => {
            state.search_results = results;
            state.search_error = None;
            state.search_selected = 0;
            DispatchResult::changed()
        }

        Action::SearchDidError(msg) => {
            state.search_results.clear();
            state.search_error = Some(msg);
            state.search_selected = 0;
            DispatchResult::changed()
        }

        Action::SearchSelect(index) => {
            if index < state.search_results.len() && index != state.search_selected {
                state.search_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::SearchConfirm => {
            let Some(query) = state
                .search_results
                .get(state.search_selected)
                .map(LocationCandidate::query)
            else {
                return DispatchResult::unchanged();
            };

            state.current_location = query;
            state.search_mode = false;
            reset_search(state);
            begin_fetch(state)
        }

        // ===== Locate actions =====
        Action::LocateRequest => DispatchResult::changed_with(Effect::Locate),

        Action::LocateDidSucceed(coords) => {
            state.current_location = coords.query();
            begin_fetch(state)
        }

        Action::LocateDidFail(err) => {
            state.error = Some(err.advisory().to_string());
            state.last_failure = Some(err.to_string());
            DispatchResult::changed()
        }

        // ===== Clock actions =====
        Action::ClockDidUpdate(text) => {
            if state.clock_text == text {
                return DispatchResult::unchanged();
            }
            state.clock_text = text;
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_initial_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn begin_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    state.loading = true;
    state.error = None;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        query: state.current_location.clone(),
    })
}

fn reset_search(state: &mut AppState) {
    state.search_query.clear();
    state.search_results.clear();
    state.search_error = None;
    state.search_selected = 0;
}
