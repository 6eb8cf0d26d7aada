//! One categorical bar chart.

use crate::category_aggregator::{aggregate_by_field, AggregatedGroup};
use crate::config::{ChartLayout, DashboardConfig, PanelConfig};
use crate::render::ChartRenderer;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{keyed_join, BarMark, BarScene, JoinSummary};
use hhc_survey::{Dataset, SelectionRange};
use std::rc::Rc;

/// A bar chart bound to one survey field.
///
/// Holds the aggregation for the current working set and the marks of the
/// last render. Only ever touches its own chart.
pub struct BarPanel {
    config: PanelConfig,
    dataset: Rc<Dataset>,
    renderer: Rc<dyn ChartRenderer>,
    mount: String,
    chart_id: String,
    settings: BarSettings,
    groups: Vec<AggregatedGroup<String>>,
    marks: Vec<BarMark>,
    last_join: JoinSummary,
    render_count: usize,
    render_failures: usize,
}

/// The slice of [`DashboardConfig`] a bar panel needs.
#[derive(Debug, Clone)]
struct BarSettings {
    layout: ChartLayout,
    padding_inner: f64,
    label_offset: f64,
    transition_ms: u32,
    fill: String,
}

impl BarPanel {
    /// Bind a panel to `config.field`, aggregate the full dataset and render.
    ///
    /// `slot` is the panel's position under the bar mount. It is part of the
    /// chart id, so panels sharing a field still draw into separate charts.
    pub fn initialize(
        slot: usize,
        config: PanelConfig,
        dataset: Rc<Dataset>,
        renderer: Rc<dyn ChartRenderer>,
        dashboard: &DashboardConfig,
    ) -> Self {
        let chart_id = format!("{}-{}-{}", dashboard.bar_mount, slot, config.field.column());
        let mut panel = Self {
            config,
            dataset,
            renderer,
            mount: dashboard.bar_mount.clone(),
            chart_id,
            settings: BarSettings {
                layout: dashboard.bar_layout,
                padding_inner: dashboard.bar_padding_inner,
                label_offset: dashboard.bar_label_offset,
                transition_ms: dashboard.transition_ms,
                fill: dashboard.fill.clone(),
            },
            groups: Vec::new(),
            marks: Vec::new(),
            last_join: JoinSummary::default(),
            render_count: 0,
            render_failures: 0,
        };
        panel.apply_selection(None);
        panel
    }

    /// Re-aggregate over the records in `range` (all records for `None`) and re-render.
    pub fn apply_selection(&mut self, range: Option<SelectionRange>) {
        let working = self.dataset.working_set(range.as_ref());
        self.groups = aggregate_by_field(working, self.config.field);
        self.render();
    }

    fn render(&mut self) {
        let marks = self.layout_marks();
        let scene = BarScene {
            title: self.config.title.clone(),
            layout: self.settings.layout,
            fill: self.settings.fill.clone(),
            transition_ms: self.settings.transition_ms,
            bars: marks.clone(),
        };
        self.last_join = keyed_join(&self.marks, &marks);
        self.marks = marks;
        self.render_count += 1;
        if let Err(e) = self.renderer.render_bars(&self.mount, &self.chart_id, &scene) {
            self.render_failures += 1;
            log::error!("bar chart '{}' failed to render: {:#}", self.config.title, e);
        }
    }

    fn layout_marks(&self) -> Vec<BarMark> {
        let layout = &self.settings.layout;
        let keys = self.groups.iter().map(|g| g.key.clone()).collect();
        let y = BandScale::new(keys, (0.0, layout.inner_height()), self.settings.padding_inner);
        let max = self.groups.iter().map(|g| g.count).max().unwrap_or(0);
        let x = LinearScale::new(max as f64, layout.inner_width());
        self.groups
            .iter()
            .map(|group| {
                let top = y.position(&group.key).unwrap_or(0.0);
                let width = x.apply(group.count as f64);
                BarMark {
                    key: group.key.clone(),
                    count: group.count,
                    y: top,
                    width,
                    height: y.bandwidth(),
                    label_x: width + self.settings.label_offset,
                    label_y: top + y.bandwidth() / 2.0,
                }
            })
            .collect()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn chart_id(&self) -> &str {
        &self.chart_id
    }

    /// Aggregation behind the bars currently shown.
    pub fn groups(&self) -> &[AggregatedGroup<String>] {
        &self.groups
    }

    pub fn marks(&self) -> &[BarMark] {
        &self.marks
    }

    /// Key join between the previous render and the current one.
    pub fn last_join(&self) -> &JoinSummary {
        &self.last_join
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn render_failures(&self) -> usize {
        self.render_failures
    }
}
