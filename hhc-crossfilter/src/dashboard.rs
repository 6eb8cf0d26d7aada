//! Application state: the dataset, every panel and the wiring between them.

use crate::bar_panel::BarPanel;
use crate::brush::PixelExtent;
use crate::config::DashboardConfig;
use crate::coordinator::CrossFilterCoordinator;
use crate::render::ChartRenderer;
use crate::time_series_panel::TimeSeriesPanel;
use hhc_survey::{Dataset, SelectionRange};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Owns the dataset, the time-series panel and (through the coordinator)
/// the bar panels.
///
/// `Rc<RefCell<_>>` because the time-series listener and the page both need
/// the coordinator, all on the single UI thread.
pub struct Dashboard {
    dataset: Rc<Dataset>,
    time_series: TimeSeriesPanel,
    coordinator: Rc<RefCell<CrossFilterCoordinator>>,
}

impl Dashboard {
    /// Build and render every panel, then subscribe the coordinator to the brush.
    pub fn new(
        dataset: Rc<Dataset>,
        config: &DashboardConfig,
        renderer: Rc<dyn ChartRenderer>,
    ) -> Self {
        let bar_panels = config
            .panels
            .iter()
            .cloned()
            .enumerate()
            .map(|(slot, panel)| {
                BarPanel::initialize(slot, panel, dataset.clone(), renderer.clone(), config)
            })
            .collect();
        let coordinator = Rc::new(RefCell::new(CrossFilterCoordinator::new(bar_panels)));

        let mut time_series = TimeSeriesPanel::initialize(dataset.clone(), renderer, config);
        let listener = coordinator.clone();
        time_series.on_selection_change(move |selection| {
            listener.borrow_mut().selection_changed(selection);
        });
        if time_series.is_calibrated() {
            coordinator.borrow_mut().mark_ready();
        }
        log::info!(
            "dashboard: {} bar charts over {} records",
            config.panels.len(),
            dataset.len()
        );

        Self {
            dataset,
            time_series,
            coordinator,
        }
    }

    pub fn brush(&mut self, extent: PixelExtent) {
        self.time_series.brush_moved(extent);
    }

    pub fn clear_brush(&mut self) {
        self.time_series.brush_cleared();
    }

    /// Extra selection listener (e.g. a status line), run after the coordinator.
    pub fn on_selection_change(&mut self, listener: impl FnMut(Option<SelectionRange>) + 'static) {
        self.time_series.on_selection_change(listener);
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        self.time_series.state().selection()
    }

    /// Size of the working set for the current selection.
    pub fn working_set_len(&self) -> usize {
        self.dataset.working_set(self.selection().as_ref()).len()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn time_series(&self) -> &TimeSeriesPanel {
        &self.time_series
    }

    pub fn coordinator(&self) -> Ref<'_, CrossFilterCoordinator> {
        self.coordinator.borrow()
    }
}
