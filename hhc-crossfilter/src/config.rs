//! Static dashboard configuration.
//!
//! `DashboardConfig::default()` reproduces the household survey page: four
//! bar charts (ownership, electricity, latrine, religion) stacked in the
//! `bar-chart` mount and one area chart of surveys per day in `area-chart`.
//! Any field can be overridden from JSON.

use hhc_survey::SurveyField;
use serde::{Deserialize, Serialize};

/// Which field a bar chart groups by and the title it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub field: SurveyField,
    pub title: String,
}

impl PanelConfig {
    pub fn new(field: SurveyField, title: impl Into<String>) -> Self {
        Self {
            field,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer SVG size and the margin around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartLayout {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Layout of one bar chart.
    pub fn bar_default() -> Self {
        Self {
            width: 400.0,
            height: 140.0,
            margin: Margin {
                top: 40.0,
                right: 50.0,
                bottom: 10.0,
                left: 100.0,
            },
        }
    }

    /// Layout of the surveys-per-day area chart.
    pub fn area_default() -> Self {
        Self {
            width: 500.0,
            height: 400.0,
            margin: Margin {
                top: 40.0,
                right: 0.0,
                bottom: 20.0,
                left: 40.0,
            },
        }
    }
}

/// Everything the dashboard needs besides the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// DOM id the bar charts are appended to.
    pub bar_mount: String,
    /// DOM id the area chart is appended to.
    pub area_mount: String,
    pub panels: Vec<PanelConfig>,
    pub bar_layout: ChartLayout,
    pub area_layout: ChartLayout,
    pub bar_padding_inner: f64,
    /// Gap between a bar's end and its count label.
    pub bar_label_offset: f64,
    pub area_label: String,
    pub x_ticks: usize,
    pub transition_ms: u32,
    pub fill: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bar_mount: "bar-chart".to_string(),
            area_mount: "area-chart".to_string(),
            panels: vec![
                PanelConfig::new(SurveyField::OwnRent, "Own or Rent"),
                PanelConfig::new(SurveyField::Electricity, "Electricity"),
                PanelConfig::new(SurveyField::Latrine, "Latrine"),
                PanelConfig::new(SurveyField::Religion, "Religion"),
            ],
            bar_layout: ChartLayout::bar_default(),
            area_layout: ChartLayout::area_default(),
            bar_padding_inner: 0.2,
            bar_label_offset: 30.0,
            area_label: "Surveys".to_string(),
            x_ticks: 5,
            transition_ms: 200,
            fill: "rgb(4, 129, 71)".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse a (possibly partial) JSON config; missing keys keep their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panels() {
        let config = DashboardConfig::default();
        let fields: Vec<SurveyField> = config.panels.iter().map(|p| p.field).collect();
        assert_eq!(fields, SurveyField::ALL.to_vec());
        assert_eq!(config.panels[0].title, "Own or Rent");
    }

    #[test]
    fn test_inner_sizes() {
        let bar = ChartLayout::bar_default();
        assert_eq!(bar.inner_width(), 250.0);
        assert_eq!(bar.inner_height(), 90.0);
        let area = ChartLayout::area_default();
        assert_eq!(area.inner_width(), 460.0);
        assert_eq!(area.inner_height(), 340.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"panels": [{"field": "hohreligion", "title": "Religion of head"}], "transition_ms": 0}"#,
        )
        .unwrap();
        assert_eq!(config.panels, vec![PanelConfig::new(SurveyField::Religion, "Religion of head")]);
        assert_eq!(config.transition_ms, 0);
        assert_eq!(config.bar_mount, "bar-chart");
        assert_eq!(config.area_layout, ChartLayout::area_default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = DashboardConfig::from_json(r#"{"panels": [{"field": "roof", "title": "Roof"}]}"#);
        assert!(result.is_err());
    }
}
