use web_sys::Element;
use yew::prelude::*;

use crate::observe::{observation_supported, observe_once, ObserveOptions};
use crate::settings::get_settings;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps children in a `data-reveal` container that gains `is-visible` on
/// first scroll into view. With reduced motion (or no observer support)
/// the class is applied immediately and nothing is observed.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let settings = get_settings();
            let mut handle = None;

            if settings.reduced_motion || !observation_supported() {
                visible.set(true);
            } else if let Some(element) = node.cast::<Element>() {
                let options = ObserveOptions {
                    threshold: Some(settings.reveal_threshold),
                    root_margin: None,
                };
                let on_visible = {
                    let visible = visible.clone();
                    move || visible.set(true)
                };
                match observe_once(&element, &options, on_visible) {
                    Ok(h) => handle = Some(h),
                    Err(err) => {
                        log::warn!("reveal observer failed: {err:?}");
                        visible.set(true);
                    }
                }
            } else {
                visible.set(true);
            }

            move || drop(handle)
        });
    }

    html! {
        <div
            ref={node}
            data-reveal=""
            class={classes!("reveal", (*visible).then_some("is-visible"), props.class.clone())}
        >
            {props.children.clone()}
        </div>
    }
}
