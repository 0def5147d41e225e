//! Weather dashboard - a tui-dispatch terminal app over WeatherAPI.com
//!
//! The library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod geolocation;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod reducer;
pub mod state;
