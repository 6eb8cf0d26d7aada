//! The seam between chart panels and whatever draws them.

use crate::scene::{AreaScene, BarScene};

/// Draws panel scenes into the host document.
///
/// `mount` is the DOM id of the container the chart lives under; `chart_id`
/// identifies one bar chart within a shared mount. Implementations must treat
/// every call as a full replacement of that chart's marks, joined by key.
pub trait ChartRenderer {
    fn render_bars(&self, mount: &str, chart_id: &str, scene: &BarScene) -> anyhow::Result<()>;
    fn render_area(&self, mount: &str, scene: &AreaScene) -> anyhow::Result<()>;
}
