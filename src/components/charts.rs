use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::charts::coordinator::RenderCoordinator;
use crate::charts::defs::portfolio_charts;
use crate::charts::loader::plotly_loader;
use crate::charts::plotly::PlotlyCapability;
use crate::charts::theme::{ChartTheme, ThemePreset};
use crate::observe::{observation_supported, observe_once, ObserveOptions};
use crate::settings::get_settings;

#[derive(Properties, PartialEq)]
pub struct ChartsSectionProps {
    #[prop_or_default]
    pub preset: ThemePreset,
}

/// The lazy chart section: three mount points plus the visibility trigger
/// that loads the charting library on first scroll into view. Without
/// observer support the load starts immediately so charts always show.
#[function_component(ChartsSection)]
pub fn charts_section(props: &ChartsSectionProps) -> Html {
    let section = use_node_ref();

    {
        let section = section.clone();
        let preset = props.preset;
        use_effect_with((), move |_| {
            let settings = get_settings();
            let coordinator = Rc::new(RenderCoordinator::new(
                plotly_loader(settings.chart_cdn_url.clone()),
                PlotlyCapability,
                portfolio_charts(),
                ChartTheme::from_document(preset),
                settings.chart_animation_allowed(),
            ));

            let trigger = move || {
                let coordinator = coordinator.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    coordinator.ensure().await;
                });
            };

            let mut handle = None;
            if !observation_supported() {
                log::debug!("no IntersectionObserver, rendering charts eagerly");
                trigger();
            } else if let Some(element) = section.cast::<Element>() {
                let options = ObserveOptions {
                    root_margin: Some(settings.charts_root_margin.clone()),
                    threshold: None,
                };
                match observe_once(&element, &options, trigger.clone()) {
                    Ok(h) => handle = Some(h),
                    Err(err) => {
                        log::warn!("charts observer failed, rendering eagerly: {err:?}");
                        trigger();
                    }
                }
            } else {
                trigger();
            }

            move || drop(handle)
        });
    }

    html! {
        <section ref={section} data-charts="" class="charts">
            <div class="chart-grid">
                <figure class="chart-card">
                    <div id="chart-improvement" class="chart-container"></div>
                    <figcaption>{"Efficiency gain per process (%)"}</figcaption>
                </figure>
                <figure class="chart-card">
                    <div id="chart-maturity" class="chart-container"></div>
                    <figcaption>{"Automation maturity over rollout"}</figcaption>
                </figure>
                <figure class="chart-card">
                    <div id="chart-time" class="chart-container"></div>
                    <figcaption>{"Where project time goes"}</figcaption>
                </figure>
            </div>
        </section>
    }
}
