//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hhc_crossfilter::Dashboard;
use hhc_survey::{Dataset, SelectionRange};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Where page start-up stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStage {
    /// Parsing the embedded survey CSV.
    LoadSurvey,
    /// Evaluating the chart scripts and building the panels.
    StartCharts,
}

impl fmt::Display for PageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStage::LoadSurvey => write!(f, "load the survey data"),
            PageStage::StartCharts => write!(f, "start the charts"),
        }
    }
}

/// A start-up failure shown in place of the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct PageError {
    pub stage: PageStage,
    pub detail: String,
}

impl PageError {
    pub fn new(stage: PageStage, err: &anyhow::Error) -> Self {
        Self {
            stage,
            detail: format!("{:#}", err),
        }
    }

    /// One-line heading, e.g. "Could not load the survey data".
    pub fn headline(&self) -> String {
        format!("Could not {}", self.stage)
    }
}

/// Shared application state for household survey chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed survey data (None until loaded)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Panels and cross-filter wiring (None until the charts are mounted)
    pub dashboard: Signal<Option<Rc<RefCell<Dashboard>>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Start-up failure, if any
    pub error: Signal<Option<PageError>>,
    /// Current time brush selection
    pub selection: Signal<Option<SelectionRange>>,
    /// Records in the current working set
    pub working_set_len: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error: Signal::new(None),
            selection: Signal::new(None),
            working_set_len: Signal::new(0),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
