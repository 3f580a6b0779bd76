use wasm_bindgen::prelude::*;

use super::coordinator::ChartingCapability;
use super::spec::ChartSpec;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Charting backend bound to the Plotly global loaded by the capability
/// loader. `newPlot` replaces any prior plot on the same mount, so a second
/// render pass on the same id is clean (guarded upstream anyway).
pub struct PlotlyCapability;

impl ChartingCapability for PlotlyCapability {
    fn has_mount(&self, mount_id: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(mount_id))
            .is_some()
    }

    fn render(&self, mount_id: &str, spec: &ChartSpec) {
        new_plot(
            mount_id,
            serde_wasm_bindgen::to_value(&spec.traces).unwrap(),
            serde_wasm_bindgen::to_value(&spec.layout).unwrap(),
            serde_wasm_bindgen::to_value(&spec.config).unwrap(),
        );
    }
}
