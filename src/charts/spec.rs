use serde_json::{json, Value};

use super::defs::{ChartDef, ChartKind};
use super::theme::ChartTheme;

/// Plotly payload for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub traces: Value,
    pub layout: Value,
    pub config: Value,
}

/// Build the render payload for one chart definition.
pub fn build_spec(def: &ChartDef, theme: &ChartTheme, animate: bool) -> ChartSpec {
    let traces = match def.kind {
        ChartKind::Bar => json!([{
            "type": "bar",
            "x": def.labels,
            "y": def.values,
            "marker": {
                "color": theme.bar_fill,
                "line": { "color": theme.accent, "width": 1 }
            }
        }]),
        ChartKind::Area => json!([{
            "type": "scatter",
            "mode": "lines+markers",
            "x": def.labels,
            "y": def.values,
            "line": { "color": theme.accent_alt, "width": 3 },
            "marker": { "color": theme.accent, "size": 6 },
            "fill": "tozeroy",
            "fillcolor": theme.area_fill
        }]),
        ChartKind::Donut => json!([{
            "type": "pie",
            "labels": def.labels,
            "values": def.values,
            "hole": 0.58,
            "textinfo": "label+percent",
            "textposition": "inside",
            "marker": { "colors": theme.donut_segments }
        }]),
    };

    ChartSpec {
        traces,
        layout: build_layout(def.kind, theme, animate),
        config: json!({ "displayModeBar": false, "responsive": true }),
    }
}

fn build_layout(kind: ChartKind, theme: &ChartTheme, animate: bool) -> Value {
    let mut layout = match kind {
        ChartKind::Bar => json!({
            "margin": { "t": 8, "r": 8, "b": 40, "l": 42 },
            "xaxis": { "tickfont": { "color": theme.muted }, "automargin": true },
            "yaxis": {
                "range": [0, 100],
                "tickfont": { "color": theme.muted },
                "gridcolor": theme.grid
            }
        }),
        ChartKind::Area => json!({
            "margin": { "t": 8, "r": 8, "b": 40, "l": 42 },
            "xaxis": { "tickfont": { "color": theme.muted } },
            "yaxis": {
                "range": [0, 100],
                "tickfont": { "color": theme.muted },
                "gridcolor": theme.grid
            }
        }),
        ChartKind::Donut => json!({
            "margin": { "t": 8, "r": 8, "b": 8, "l": 8 },
            "showlegend": false
        }),
    };

    let base = layout.as_object_mut().expect("layout is an object");
    base.insert("paper_bgcolor".to_string(), json!("transparent"));
    base.insert("plot_bgcolor".to_string(), json!("transparent"));
    base.insert("font".to_string(), json!({ "color": theme.text }));
    if animate {
        base.insert(
            "transition".to_string(),
            json!({ "duration": 800, "easing": "cubic-in-out" }),
        );
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight() -> ChartTheme {
        ChartTheme::preset(crate::charts::theme::ThemePreset::Midnight)
    }

    #[test]
    fn test_bar_spec_fixed_axis_and_input_order() {
        let def = ChartDef {
            mount_id: "chart-improvement",
            kind: ChartKind::Bar,
            labels: &["A", "B", "C"],
            values: &[78.0, 72.0, 68.0],
        };
        let spec = build_spec(&def, &midnight(), true);

        let trace = &spec.traces[0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"], json!(["A", "B", "C"]));
        assert_eq!(trace["y"], json!([78.0, 72.0, 68.0]));
        assert_eq!(spec.layout["yaxis"]["range"], json!([0, 100]));
    }

    #[test]
    fn test_area_spec_fills_under_curve() {
        let def = ChartDef {
            mount_id: "chart-maturity",
            kind: ChartKind::Area,
            labels: &["W1", "W2"],
            values: &[35.0, 52.0],
        };
        let spec = build_spec(&def, &midnight(), true);

        let trace = &spec.traces[0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "lines+markers");
        assert_eq!(trace["fill"], "tozeroy");
        assert_eq!(spec.layout["yaxis"]["range"], json!([0, 100]));
    }

    #[test]
    fn test_donut_spec_labels_segments_with_percent() {
        let def = ChartDef {
            mount_id: "chart-time",
            kind: ChartKind::Donut,
            labels: &["a", "b", "c", "d", "e"],
            values: &[20.0, 35.0, 20.0, 15.0, 10.0],
        };
        let spec = build_spec(&def, &midnight(), true);

        let trace = &spec.traces[0];
        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["hole"], json!(0.58));
        assert_eq!(trace["textinfo"], "label+percent");
        assert_eq!(spec.layout["showlegend"], json!(false));
    }

    #[test]
    fn test_shared_layout_and_config() {
        let def = portfolio_bar();
        let spec = build_spec(&def, &midnight(), true);
        assert_eq!(spec.layout["paper_bgcolor"], "transparent");
        assert_eq!(spec.layout["plot_bgcolor"], "transparent");
        assert_eq!(spec.config["displayModeBar"], json!(false));
        assert_eq!(spec.config["responsive"], json!(true));
    }

    #[test]
    fn test_reduced_motion_drops_transition() {
        let def = portfolio_bar();
        let animated = build_spec(&def, &midnight(), true);
        let still = build_spec(&def, &midnight(), false);
        assert!(animated.layout.get("transition").is_some());
        assert!(still.layout.get("transition").is_none());
    }

    fn portfolio_bar() -> ChartDef {
        crate::charts::defs::portfolio_charts()
            .into_iter()
            .find(|d| d.kind == ChartKind::Bar)
            .unwrap()
    }
}
