//! Render-ready chart descriptions handed to a [`crate::render::ChartRenderer`].
//!
//! All geometry is in plot-area pixels (inside the layout margin). Scenes are
//! serialized to camelCase JSON for the D3 chart scripts.

use crate::config::ChartLayout;
use serde::Serialize;

/// One bar of a categorical chart, keyed by its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarMark {
    pub key: String,
    pub count: usize,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarScene {
    pub title: String,
    pub layout: ChartLayout,
    pub fill: String,
    pub transition_ms: u32,
    pub bars: Vec<BarMark>,
}

/// One day on the area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaScene {
    pub label: String,
    pub layout: ChartLayout,
    pub fill: String,
    pub x_ticks: usize,
    /// `[start, end]` as `YYYY-MM-DD`, absent when no record has a date.
    pub x_domain: Option<(String, String)>,
    pub y_max: usize,
    pub points: Vec<AreaPoint>,
}

/// How the keys of two consecutive renders relate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSummary {
    /// Keys new in this render.
    pub entered: Vec<String>,
    /// Keys present before and now, updated in place.
    pub updated: Vec<String>,
    /// Keys that were removed.
    pub exited: Vec<String>,
}

/// Key-based data join between the previous and next marks.
pub fn keyed_join(previous: &[BarMark], next: &[BarMark]) -> JoinSummary {
    let mut summary = JoinSummary::default();
    for mark in next {
        if previous.iter().any(|p| p.key == mark.key) {
            summary.updated.push(mark.key.clone());
        } else {
            summary.entered.push(mark.key.clone());
        }
    }
    summary.exited = previous
        .iter()
        .filter(|p| !next.iter().any(|n| n.key == p.key))
        .map(|p| p.key.clone())
        .collect();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(key: &str) -> BarMark {
        BarMark {
            key: key.to_string(),
            count: 1,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            label_x: 0.0,
            label_y: 0.0,
        }
    }

    #[test]
    fn test_keyed_join() {
        let previous = vec![mark("Own"), mark("Rent"), mark("Other")];
        let next = vec![mark("Rent"), mark("Own"), mark("unknown")];
        let summary = keyed_join(&previous, &next);
        assert_eq!(summary.entered, ["unknown"]);
        assert_eq!(summary.updated, ["Rent", "Own"]);
        assert_eq!(summary.exited, ["Other"]);
    }

    #[test]
    fn test_join_into_empty_exits_everything() {
        let previous = vec![mark("Own"), mark("Rent")];
        let summary = keyed_join(&previous, &[]);
        assert!(summary.entered.is_empty());
        assert!(summary.updated.is_empty());
        assert_eq!(summary.exited, ["Own", "Rent"]);
    }

    #[test]
    fn test_bar_mark_json_is_camel_case() {
        let json = serde_json::to_value(mark("Own")).unwrap();
        assert!(json.get("labelX").is_some());
        assert!(json.get("label_x").is_none());
    }
}
