//! Reusable Dioxus RSX components for household survey chart apps.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod selection_summary;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use selection_summary::SelectionSummary;
