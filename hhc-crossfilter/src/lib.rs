//! Linked household survey charts: aggregation, panels and brush cross-filtering.
//!
//! A [`Dashboard`] loads every [`BarPanel`] and the [`TimeSeriesPanel`] from
//! one shared [`hhc_survey::Dataset`]. Dragging the time brush produces a
//! [`hhc_survey::SelectionRange`]; the [`CrossFilterCoordinator`] re-aggregates
//! each bar chart over the records inside it. Drawing happens behind the
//! [`ChartRenderer`] trait so all of this runs (and is tested) without a DOM.

pub mod bar_panel;
pub mod brush;
pub mod category_aggregator;
pub mod config;
pub mod coordinator;
pub mod dashboard;
pub mod render;
pub mod scale;
pub mod scene;
pub mod time_series_panel;

pub use bar_panel::BarPanel;
pub use brush::{BrushState, PixelExtent};
pub use category_aggregator::{aggregate_by_date, aggregate_by_field, AggregatedGroup};
pub use config::{ChartLayout, DashboardConfig, Margin, PanelConfig};
pub use coordinator::CrossFilterCoordinator;
pub use dashboard::Dashboard;
pub use render::ChartRenderer;
pub use hhc_survey::SelectionRange;
pub use time_series_panel::TimeSeriesPanel;
