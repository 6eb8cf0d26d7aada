//! Cross-filtering from the time brush to the bar charts.

use crate::bar_panel::BarPanel;
use hhc_survey::SelectionRange;

/// Applies time-brush selections to every bar chart.
///
/// Each notification runs one full pass over the panels, in order, with no
/// batching. Notifications that arrive before [`mark_ready`](Self::mark_ready)
/// are dropped.
pub struct CrossFilterCoordinator {
    bar_panels: Vec<BarPanel>,
    ready: bool,
    passes: usize,
}

impl CrossFilterCoordinator {
    pub fn new(bar_panels: Vec<BarPanel>) -> Self {
        Self {
            bar_panels,
            ready: false,
            passes: 0,
        }
    }

    /// The time axis is calibrated; start forwarding selections.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn selection_changed(&mut self, selection: Option<SelectionRange>) {
        if !self.ready {
            log::debug!("coordinator: selection before the time axis is ready, ignored");
            return;
        }
        for panel in self.bar_panels.iter_mut() {
            panel.apply_selection(selection);
        }
        self.passes += 1;
    }

    pub fn bar_panels(&self) -> &[BarPanel] {
        &self.bar_panels
    }

    /// Completed re-render passes.
    pub fn passes(&self) -> usize {
        self.passes
    }
}
