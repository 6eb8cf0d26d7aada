//! Brush extents and the selection state of the time-series chart.

use crate::scale::TimeScale;
use hhc_survey::SelectionRange;
use hhc_utils::dates::ceil_to_date;
use serde::{Deserialize, Serialize};

/// Extents narrower than this many pixels count as a cleared brush.
pub const MIN_BRUSH_WIDTH: f64 = 0.5;

/// A horizontal brush extent in plot-area pixels, as reported by the D3 brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelExtent {
    pub x0: f64,
    pub x1: f64,
}

impl PixelExtent {
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    /// Ordered and clamped to `range`.
    pub fn normalized(&self, range: (f64, f64)) -> Self {
        let lo = range.0.min(range.1);
        let hi = range.0.max(range.1);
        let a = self.x0.min(self.x1).clamp(lo, hi);
        let b = self.x0.max(self.x1).clamp(lo, hi);
        Self { x0: a, x1: b }
    }

    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }
}

/// Selection state of the time-series chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushState {
    #[default]
    Unselected,
    Selected(SelectionRange),
}

impl BrushState {
    pub fn selection(&self) -> Option<SelectionRange> {
        match self {
            BrushState::Unselected => None,
            BrushState::Selected(range) => Some(*range),
        }
    }
}

/// Map a brush extent to the dates it covers on `scale`.
///
/// Returns `None` for a (near) zero-width extent. The range runs from the first
/// midnight at or after the left edge to the date of the right edge, so it
/// holds exactly the days whose midnight lies under the brush. A brush that
/// covers no midnight gives a range with `start > end`.
pub fn selection_from_extent(scale: &TimeScale, extent: PixelExtent) -> Option<SelectionRange> {
    let extent = extent.normalized(scale.range());
    if extent.width() < MIN_BRUSH_WIDTH {
        return None;
    }
    let start = ceil_to_date(&scale.invert(extent.x0));
    let end = scale.invert(extent.x1).date();
    Some(SelectionRange::new(start, end))
}
