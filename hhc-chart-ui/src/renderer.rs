//! Browser implementation of [`ChartRenderer`] backed by the D3 chart scripts.

use crate::js_bridge;
use anyhow::{bail, Context};
use hhc_crossfilter::scene::{AreaScene, BarScene};
use hhc_crossfilter::ChartRenderer;

/// Serializes scenes to JSON and hands them to `renderBarChart` / `renderAreaChart`.
#[derive(Debug, Default, Clone, Copy)]
pub struct D3Renderer;

impl D3Renderer {
    fn check_mount(mount: &str) -> anyhow::Result<()> {
        if !js_bridge::element_exists(mount) {
            bail!("mount point #{} is not in the document", mount);
        }
        Ok(())
    }
}

impl ChartRenderer for D3Renderer {
    fn render_bars(&self, mount: &str, chart_id: &str, scene: &BarScene) -> anyhow::Result<()> {
        Self::check_mount(mount)?;
        let json = serde_json::to_string(scene).context("serializing bar scene")?;
        js_bridge::render_bar_chart(mount, chart_id, &json)
    }

    fn render_area(&self, mount: &str, scene: &AreaScene) -> anyhow::Result<()> {
        Self::check_mount(mount)?;
        let json = serde_json::to_string(scene).context("serializing area scene")?;
        js_bridge::render_area_chart(mount, &json)
    }
}
