//! The surveys-per-day area chart and its time brush.

use crate::brush::{selection_from_extent, BrushState, PixelExtent};
use crate::category_aggregator::{aggregate_by_date, AggregatedGroup};
use crate::config::{ChartLayout, DashboardConfig};
use crate::render::ChartRenderer;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{AreaPoint, AreaScene};
use chrono::NaiveDate;
use hhc_survey::{Dataset, SelectionRange};
use hhc_utils::dates::format_date;
use std::rc::Rc;

type SelectionListener = Box<dyn FnMut(Option<SelectionRange>)>;

/// Area chart of surveys per day with a horizontal brush.
///
/// The x axis is calibrated from the dated records on `initialize`; with no
/// dated records it stays uncalibrated and brush input is ignored.
pub struct TimeSeriesPanel {
    dataset: Rc<Dataset>,
    renderer: Rc<dyn ChartRenderer>,
    mount: String,
    layout: ChartLayout,
    label: String,
    fill: String,
    x_ticks: usize,
    groups: Vec<AggregatedGroup<NaiveDate>>,
    x: Option<TimeScale>,
    state: BrushState,
    listeners: Vec<SelectionListener>,
    render_failures: usize,
}

impl TimeSeriesPanel {
    /// Aggregate the full dataset by date, calibrate the axis and render.
    pub fn initialize(
        dataset: Rc<Dataset>,
        renderer: Rc<dyn ChartRenderer>,
        config: &DashboardConfig,
    ) -> Self {
        let mut panel = Self {
            dataset,
            renderer,
            mount: config.area_mount.clone(),
            layout: config.area_layout,
            label: config.area_label.clone(),
            fill: config.fill.clone(),
            x_ticks: config.x_ticks,
            groups: Vec::new(),
            x: None,
            state: BrushState::Unselected,
            listeners: Vec::new(),
            render_failures: 0,
        };
        panel.groups = aggregate_by_date(panel.dataset.records());
        panel.x = match panel.dataset.date_extent() {
            Some(extent) => Some(TimeScale::new(extent, (0.0, panel.layout.inner_width()))),
            None => {
                log::warn!("time series: no dated records, brush disabled");
                None
            }
        };
        panel.render();
        panel
    }

    fn render(&mut self) {
        let scene = self.scene();
        if let Err(e) = self.renderer.render_area(&self.mount, &scene) {
            self.render_failures += 1;
            log::error!("area chart failed to render: {:#}", e);
        }
    }

    fn scene(&self) -> AreaScene {
        let y_max = self.groups.iter().map(|g| g.count).max().unwrap_or(0);
        let height = self.layout.inner_height();
        let y = LinearScale::new(y_max as f64, height);
        let points = match &self.x {
            Some(x) => self
                .groups
                .iter()
                .map(|g| AreaPoint {
                    date: format_date(&g.key),
                    count: g.count,
                    x: x.apply(&g.key),
                    y: height - y.apply(g.count as f64),
                })
                .collect(),
            None => Vec::new(),
        };
        AreaScene {
            label: self.label.clone(),
            layout: self.layout,
            fill: self.fill.clone(),
            x_ticks: self.x_ticks,
            x_domain: self
                .x
                .map(|x| (format_date(&x.domain().0), format_date(&x.domain().1))),
            y_max,
            points,
        }
    }

    /// Register a listener for selection changes. Listeners run in
    /// registration order, synchronously, on every notification.
    pub fn on_selection_change(&mut self, listener: impl FnMut(Option<SelectionRange>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Map a brush extent to a date range using the calibrated axis.
    /// `None` while uncalibrated or for a zero-width extent.
    pub fn selection_for(&self, extent: PixelExtent) -> Option<SelectionRange> {
        self.x.as_ref().and_then(|x| selection_from_extent(x, extent))
    }

    /// Brush created or dragged to `extent`.
    pub fn brush_moved(&mut self, extent: PixelExtent) {
        if self.x.is_none() {
            log::warn!("time series: brush input before the axis is calibrated, ignored");
            return;
        }
        match self.selection_for(extent) {
            Some(range) => {
                self.state = BrushState::Selected(range);
                self.notify(Some(range));
            }
            None => self.brush_cleared(),
        }
    }

    /// Brush removed. Only a transition out of `Selected` notifies.
    pub fn brush_cleared(&mut self) {
        if let BrushState::Selected(_) = self.state {
            self.state = BrushState::Unselected;
            self.notify(None);
        }
    }

    fn notify(&mut self, selection: Option<SelectionRange>) {
        match &selection {
            Some(range) => log::debug!("time series: selection {}", range),
            None => log::debug!("time series: selection cleared"),
        }
        for listener in self.listeners.iter_mut() {
            listener(selection);
        }
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    pub fn is_calibrated(&self) -> bool {
        self.x.is_some()
    }

    pub fn x_scale(&self) -> Option<&TimeScale> {
        self.x.as_ref()
    }

    pub fn groups(&self) -> &[AggregatedGroup<NaiveDate>] {
        &self.groups
    }

    pub fn render_failures(&self) -> usize {
        self.render_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::BarScene;
    use hhc_survey::SurveyRecord;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        areas: RefCell<Vec<AreaScene>>,
    }

    impl ChartRenderer for Recorder {
        fn render_bars(&self, _: &str, _: &str, _: &BarScene) -> anyhow::Result<()> {
            Ok(())
        }

        fn render_area(&self, _mount: &str, scene: &AreaScene) -> anyhow::Result<()> {
            self.areas.borrow_mut().push(scene.clone());
            Ok(())
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 7, day).unwrap()
    }

    fn dated(days: &[u32]) -> Rc<Dataset> {
        Rc::new(Dataset::new(
            days.iter()
                .map(|day| SurveyRecord {
                    survey: Some(d(*day)),
                    ..SurveyRecord::default()
                })
                .collect(),
        ))
    }

    fn panel(dataset: Rc<Dataset>, recorder: Rc<Recorder>) -> TimeSeriesPanel {
        TimeSeriesPanel::initialize(dataset, recorder, &DashboardConfig::default())
    }

    #[test]
    fn test_initialize_calibrates_from_date_extent() {
        let recorder = Rc::new(Recorder::default());
        let panel = panel(dated(&[11, 1, 6, 6]), recorder.clone());
        assert!(panel.is_calibrated());
        assert_eq!(panel.x_scale().unwrap().domain(), (d(1), d(11)));
        assert_eq!(panel.groups().len(), 3);

        let areas = recorder.areas.borrow();
        let scene = &areas[0];
        assert_eq!(scene.y_max, 2);
        assert_eq!(scene.x_domain, Some(("2016-07-01".to_string(), "2016-07-11".to_string())));
        let xs: Vec<f64> = scene.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, [0.0, 230.0, 460.0]);
        // tallest day touches the top of the plot
        assert_eq!(scene.points[1].y, 0.0);
        assert_eq!(scene.points[0].y, 170.0);
    }

    #[test]
    fn test_brush_transitions_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut panel = panel(dated(&[1, 11]), Rc::new(Recorder::default()));
        let sink = seen.clone();
        panel.on_selection_change(move |sel| sink.borrow_mut().push(sel));

        assert_eq!(panel.state(), BrushState::Unselected);
        panel.brush_moved(PixelExtent::new(46.0, 138.0));
        assert_eq!(panel.state(), BrushState::Selected(SelectionRange::new(d(2), d(4))));
        panel.brush_moved(PixelExtent::new(46.0, 138.0));
        panel.brush_moved(PixelExtent::new(0.0, 46.0));
        assert_eq!(panel.state(), BrushState::Selected(SelectionRange::new(d(1), d(2))));
        panel.brush_cleared();
        assert_eq!(panel.state(), BrushState::Unselected);
        panel.brush_cleared();

        assert_eq!(
            *seen.borrow(),
            vec![
                Some(SelectionRange::new(d(2), d(4))),
                Some(SelectionRange::new(d(2), d(4))),
                Some(SelectionRange::new(d(1), d(2))),
                None,
            ]
        );
    }

    #[test]
    fn test_zero_width_brush_clears() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut panel = panel(dated(&[1, 11]), Rc::new(Recorder::default()));
        let sink = seen.clone();
        panel.on_selection_change(move |sel| sink.borrow_mut().push(sel));
        panel.brush_moved(PixelExtent::new(46.0, 138.0));
        panel.brush_moved(PixelExtent::new(90.0, 90.0));
        assert_eq!(panel.state(), BrushState::Unselected);
        assert_eq!(seen.borrow().last(), Some(&None));
    }

    struct Broken;

    impl ChartRenderer for Broken {
        fn render_bars(&self, _: &str, _: &str, _: &BarScene) -> anyhow::Result<()> {
            Ok(())
        }

        fn render_area(&self, _: &str, _: &AreaScene) -> anyhow::Result<()> {
            anyhow::bail!("mount point #area-chart is not in the document")
        }
    }

    #[test]
    fn test_area_render_error_is_contained() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut panel = TimeSeriesPanel::initialize(
            dated(&[1, 11]),
            Rc::new(Broken),
            &DashboardConfig::default(),
        );
        assert_eq!(panel.render_failures(), 1);
        // the axis is still calibrated and the brush still works
        assert!(panel.is_calibrated());
        let sink = seen.clone();
        panel.on_selection_change(move |sel| sink.borrow_mut().push(sel));
        panel.brush_moved(PixelExtent::new(46.0, 138.0));
        assert_eq!(*seen.borrow(), vec![Some(SelectionRange::new(d(2), d(4)))]);
    }

    #[test]
    fn test_uncalibrated_panel_ignores_brush() {
        let seen = Rc::new(RefCell::new(0));
        let recorder = Rc::new(Recorder::default());
        let mut panel = panel(Rc::new(Dataset::new(vec![SurveyRecord::default()])), recorder.clone());
        let sink = seen.clone();
        panel.on_selection_change(move |_| *sink.borrow_mut() += 1);
        assert!(!panel.is_calibrated());
        assert_eq!(panel.selection_for(PixelExtent::new(0.0, 100.0)), None);
        panel.brush_moved(PixelExtent::new(0.0, 100.0));
        assert_eq!(*seen.borrow(), 0);
        assert_eq!(panel.state(), BrushState::Unselected);
        // still renders an empty chart
        assert!(recorder.areas.borrow()[0].points.is_empty());
        assert_eq!(recorder.areas.borrow()[0].x_domain, None);
    }
}
