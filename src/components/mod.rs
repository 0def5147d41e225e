pub mod city_cards;
pub mod current_panel;
pub mod dashboard;
pub mod dashboard_body;
pub mod forecast_strip;
pub mod header;
pub mod search_overlay;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_cards::{CityCards, CityCardsProps};
pub use current_panel::{CurrentPanel, CurrentPanelProps};
pub use dashboard::{DashboardView, DashboardViewProps, ERROR_ICON};
pub use dashboard_body::{DashboardBody, DashboardBodyProps};
pub use forecast_strip::{ForecastStrip, ForecastStripProps};
pub use header::{DashboardHeader, DashboardHeaderProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
