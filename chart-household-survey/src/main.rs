//! Household Characteristics Survey
//!
//! Four bar charts (ownership, electricity, latrine, household-head religion)
//! linked to an area chart of surveys per day. Dragging a brush on the area
//! chart re-counts every bar chart over the surveys in the brushed dates.
//!
//! Data flow:
//! 1. `build.rs` copies `household_characteristics.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into a `Dataset`.
//! 4. Once the chart containers exist, a `Dashboard` builds every panel and
//!    renders it through the D3.js bridge in `hhc-chart-ui`.
//! 5. D3 brush events call back into Rust, which updates the selection and
//!    re-renders the bar charts.

use dioxus::prelude::*;
use hhc_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SelectionSummary,
};
use hhc_chart_ui::js_bridge;
use hhc_chart_ui::renderer::D3Renderer;
use hhc_chart_ui::state::{AppState, PageError, PageStage};
use hhc_crossfilter::{Dashboard, DashboardConfig, PixelExtent};
use hhc_survey::Dataset;
use std::cell::RefCell;
use std::rc::Rc;

/// Name of the embedded data file, shown while loading and on errors.
const SURVEY_SOURCE: &str = "household_characteristics.csv";

/// Household survey records, one row per household.
const SURVEY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/household_characteristics.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(DashboardConfig::default);

    // Parse the survey CSV on mount
    use_effect(move || {
        match Dataset::from_csv(SURVEY_CSV) {
            Ok(dataset) => {
                state.working_set_len.set(dataset.len());
                state.dataset.set(Some(Rc::new(dataset)));
            }
            Err(e) => {
                log::error!("Failed to load survey data: {:#}", e);
                state.error.set(Some(PageError::new(PageStage::LoadSurvey, &e)));
            }
        }
        state.loading.set(false);
    });

    // Build the charts once their mount points are in the document
    let effect_config = config.clone();
    use_effect(move || {
        if (state.loading)() || state.error.read().is_some() {
            return;
        }
        if state.dashboard.peek().is_some() {
            return;
        }
        let dataset = match &*state.dataset.read() {
            Some(dataset) => dataset.clone(),
            None => return,
        };

        if let Err(e) = js_bridge::init_charts() {
            log::error!("Failed to initialize chart scripts: {:#}", e);
            state.error.set(Some(PageError::new(PageStage::StartCharts, &e)));
            return;
        }

        let dashboard = Rc::new(RefCell::new(Dashboard::new(
            dataset.clone(),
            &effect_config,
            Rc::new(D3Renderer),
        )));

        let mut selection = state.selection;
        let mut working_set_len = state.working_set_len;
        dashboard.borrow_mut().on_selection_change(move |range| {
            working_set_len.set(dataset.working_set(range.as_ref()).len());
            selection.set(range);
        });

        let on_brush = {
            let dashboard = dashboard.clone();
            move |x0: f64, x1: f64| match dashboard.try_borrow_mut() {
                Ok(mut dashboard) => dashboard.brush(PixelExtent::new(x0, x1)),
                Err(_) => log::warn!("brush event while the dashboard is busy, dropped"),
            }
        };
        let on_clear = {
            let dashboard = dashboard.clone();
            move || match dashboard.try_borrow_mut() {
                Ok(mut dashboard) => dashboard.clear_brush(),
                Err(_) => log::warn!("brush clear while the dashboard is busy, dropped"),
            }
        };
        if let Err(e) = js_bridge::install_brush_callbacks(on_brush, on_clear) {
            log::error!("Failed to install brush callbacks: {:#}", e);
        }

        state.dashboard.set(Some(dashboard));
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Household Characteristics Survey".to_string(),
                description: "Drag across the area chart to count only the households surveyed on those days.".to_string(),
            }

            if let Some(error) = (state.error)() {
                ErrorDisplay { error, source: SURVEY_SOURCE.to_string() }
            } else if (state.loading)() {
                LoadingSpinner {
                    message: "Loading survey data...".to_string(),
                    detail: SURVEY_SOURCE.to_string(),
                }
            } else {
                SelectionSummary { area_mount: config.area_mount.clone() }
                div {
                    style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: flex-start;",
                    ChartContainer {
                        id: config.bar_mount.clone(),
                        heading: "Household characteristics".to_string(),
                        min_height: 600,
                    }
                    ChartContainer {
                        id: config.area_mount.clone(),
                        heading: "Surveys per day".to_string(),
                        min_height: 400,
                    }
                }
            }
        }
    }
}
