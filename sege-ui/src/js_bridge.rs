//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet draws the choropleth and D3.js draws the analysis charts. The
//! render functions live in `assets/js/*.js`, are evaluated as globals (no ES
//! modules) and exposed via `window.*`. This module provides safe Rust
//! wrappers that serialize data and call those globals, plus the reverse
//! channel that delivers map clicks back into Rust.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

// Embed the map and chart JS files at compile time
static CHOROPLETH_JS: &str = include_str!("../assets/js/choropleth-map.js");
static BOX_PLOT_JS: &str = include_str!("../assets/js/box-plot.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SEGE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Leaflet and D3 `<script>`/`<link>` tags when the hosting page
/// does not already provide them. `init_scripts()` polls for both globals,
/// so the injected tags may finish loading after this returns.
pub fn ensure_vendor_libraries() {
    call_js(
        r#"
        if (typeof L === 'undefined' && !document.getElementById('sege-leaflet-js')) {
            var css = document.createElement('link');
            css.rel = 'stylesheet';
            css.href = 'https://unpkg.com/leaflet@1.9.4/dist/leaflet.css';
            document.head.appendChild(css);
            var js = document.createElement('script');
            js.id = 'sege-leaflet-js';
            js.src = 'https://unpkg.com/leaflet@1.9.4/dist/leaflet.js';
            document.head.appendChild(js);
        }
        if (typeof d3 === 'undefined' && !document.getElementById('sege-d3-js')) {
            var d3js = document.createElement('script');
            d3js.id = 'sege-d3-js';
            d3js.src = 'https://d3js.org/d3.v7.min.js';
            document.head.appendChild(d3js);
        }
        "#,
    );
}

/// Initialize the map/chart scripts with a wait-for-libraries polling loop.
///
/// The JS files define functions like `renderChoroplethMap(...)` via
/// `function` declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect eval once both Leaflet and D3 are ready, then
/// each function is explicitly promoted to `window.*`.
pub fn init_scripts() {
    let all_js = [CHOROPLETH_JS, BOX_PLOT_JS, BAR_CHART_JS, HEATMAP_JS].join("\n");

    let store_js = format!(
        "window.__segeScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__segeScriptsReady) { return; }
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof d3 !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__segeScripts);
                    delete window.__segeScripts;
                    if (typeof renderChoroplethMap !== 'undefined') window.renderChoroplethMap = renderChoroplethMap;
                    if (typeof destroyChoroplethMap !== 'undefined') window.destroyChoroplethMap = destroyChoroplethMap;
                    if (typeof renderBoxPlot !== 'undefined') window.renderBoxPlot = renderBoxPlot;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderHeatmap !== 'undefined') window.renderHeatmap = renderHeatmap;
                    window.__segeScriptsReady = true;
                    console.log('SEGE map/chart scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn render_with_poll(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__segeScriptsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SEGE] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render (or re-render) the interactive choropleth map.
///
/// `data_json` is the styled FeatureCollection from the map view model,
/// `config_json` carries center/zoom and the legend definition.
pub fn render_choropleth(container_id: &str, data_json: &str, config_json: &str) {
    render_with_poll("renderChoroplethMap", container_id, data_json, config_json);
}

/// Render the per-region box distribution chart.
pub fn render_box_plot(container_id: &str, data_json: &str, config_json: &str) {
    render_with_poll("renderBoxPlot", container_id, data_json, config_json);
}

/// Render the tier counts bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_with_poll("renderBarChart", container_id, data_json, config_json);
}

/// Render the annotated correlation heatmap.
pub fn render_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    render_with_poll("renderHeatmap", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Register the map click callback. The choropleth script calls
/// `window.__segeOnMapClick(lat, lng)` for every map click; the provided
/// closure runs on the single UI thread and typically updates the selected
/// province signal. Leaked intentionally: one handler per session.
pub fn set_map_click_handler(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64)>::new(handler);
    let set = js_sys::Reflect::set(
        &js_sys::global(),
        &wasm_bindgen::JsValue::from_str("__segeOnMapClick"),
        closure.as_ref().unchecked_ref(),
    );
    if set.is_err() {
        log::warn!("failed to register map click handler");
    }
    closure.forget();
}
