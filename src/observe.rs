use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Whether the browser exposes IntersectionObserver. When it does not,
/// callers invoke their trigger immediately instead of observing.
pub fn observation_supported() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, Default)]
pub struct ObserveOptions {
    /// Pre-trigger margin, e.g. `0px 0px -15% 0px` to fire slightly before
    /// the target is fully in view.
    pub root_margin: Option<String>,
    /// Fraction of the target that must be visible before firing.
    pub threshold: Option<f64>,
}

/// Keeps the observer and its JS closure alive; dropping disconnects.
pub struct ObserveHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserveHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `target` and invoke `callback` exactly once, on the first event
/// where the target intersects the viewport, then disconnect. Repeated
/// intersection events after the first never re-fire.
pub fn observe_once<F>(
    target: &Element,
    options: &ObserveOptions,
    callback: F,
) -> Result<ObserveHandle, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Rc::new(RefCell::new(Some(callback)));

    let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|e| e.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if !intersecting {
                return;
            }
            if let Some(callback) = callback.borrow_mut().take() {
                observer.disconnect();
                callback();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }

    let observer =
        IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(ObserveHandle {
        observer,
        _callback: on_entries,
    })
}
