//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are evaluated as globals
//! (no ES modules) once D3 has loaded. Arguments are passed as JSON string
//! literals and parsed on the JS side.

use wasm_bindgen::prelude::*;

// Embed all D3 chart JS files at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");

/// Global the area chart calls with `(x0, x1)` while the brush is dragged.
pub const BRUSHED_CALLBACK: &str = "hhcBrushed";
/// Global the area chart calls when the brush is removed.
pub const BRUSH_CLEARED_CALLBACK: &str = "hhcBrushCleared";

/// Execute JS, wrapping it in try/catch so runtime errors are logged in the
/// console instead of aborting. Only a syntax error makes this fail.
pub fn call_js(code: &str) -> anyhow::Result<()> {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HHC JS call failed:', e); }}",
        code
    );
    js_sys::eval(&wrapped)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("JS eval failed: {:?}", e))
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string(s)?)
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope (indirect eval) once D3 is
/// ready, and their entry points promoted to `window.*`. Render calls made
/// before that are queued by their own polling loop.
pub fn init_charts() -> anyhow::Result<()> {
    let all_js = [BAR_CHART_JS, AREA_CHART_JS].join("\n");
    call_js(&format!("window.__hhcChartScripts = {};", js_string(&all_js)?))?;

    let init_js = r#"
        (function() {
            if (window.__hhcChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__hhcChartScripts);
                    delete window.__hhcChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    if (typeof clearAreaBrush !== 'undefined') window.clearAreaBrush = clearAreaBrush;
                    window.__hhcChartsReady = true;
                    console.log('HHC charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js)
}

/// Run `call` now if the chart scripts are ready, otherwise poll until they are.
fn when_ready(call: &str) -> anyhow::Result<()> {
    call_js(&format!(
        r#"
        (function() {{
            var run = function() {{ {call} }};
            if (window.__hhcChartsReady) {{ run(); return; }}
            var poll = setInterval(function() {{
                if (window.__hhcChartsReady) {{
                    clearInterval(poll);
                    try {{ run(); }} catch(e) {{ console.error('[HHC] deferred chart call failed:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ))
}

/// Render (or update) one bar chart inside `mount_id`.
pub fn render_bar_chart(mount_id: &str, chart_id: &str, scene_json: &str) -> anyhow::Result<()> {
    when_ready(&format!(
        "window.renderBarChart({}, {}, {});",
        js_string(mount_id)?,
        js_string(chart_id)?,
        js_string(scene_json)?
    ))
}

/// Render (or update) the area chart inside `mount_id`.
pub fn render_area_chart(mount_id: &str, scene_json: &str) -> anyhow::Result<()> {
    when_ready(&format!(
        "window.renderAreaChart({}, {});",
        js_string(mount_id)?,
        js_string(scene_json)?
    ))
}

/// Remove the brush from the area chart. D3 reports the removal through
/// the cleared callback like any user clear.
pub fn clear_brush(mount_id: &str) -> anyhow::Result<()> {
    when_ready(&format!("window.clearAreaBrush({});", js_string(mount_id)?))
}

/// Register the brush callbacks as JS globals. They live for the page session.
pub fn install_brush_callbacks<B, C>(on_brush: B, on_clear: C) -> anyhow::Result<()>
where
    B: FnMut(f64, f64) + 'static,
    C: FnMut() + 'static,
{
    let global = js_sys::global();
    let brushed = Closure::<dyn FnMut(f64, f64)>::new(on_brush);
    let cleared = Closure::<dyn FnMut()>::new(on_clear);
    js_sys::Reflect::set(&global, &JsValue::from_str(BRUSHED_CALLBACK), brushed.as_ref())
        .map_err(|e| anyhow::anyhow!("registering {}: {:?}", BRUSHED_CALLBACK, e))?;
    js_sys::Reflect::set(&global, &JsValue::from_str(BRUSH_CLEARED_CALLBACK), cleared.as_ref())
        .map_err(|e| anyhow::anyhow!("registering {}: {:?}", BRUSH_CLEARED_CALLBACK, e))?;
    brushed.forget();
    cleared.forget();
    Ok(())
}

/// True when the document has an element with this id.
pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

