use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// One attempt at loading the charting capability.
pub type LoadFuture = LocalBoxFuture<'static, Result<(), CapabilityError>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("charting script failed to load: {0}")]
    ScriptLoad(String),
    #[error("document unavailable: {0}")]
    Dom(String),
}

/// Source of the charting capability, injected into the coordinator.
#[allow(async_fn_in_trait)]
pub trait CapabilityLoader {
    async fn ensure_loaded(&self) -> Result<(), CapabilityError>;
}

/// Shares one in-flight load among all callers.
///
/// A resolved success stays cached, so later calls complete immediately.
/// A failure clears the slot, so a later call runs the factory again and
/// one transient network error never disables charts for the session.
pub struct SharedLoader<F> {
    factory: F,
    inflight: RefCell<Option<Shared<LoadFuture>>>,
}

impl<F> SharedLoader<F>
where
    F: Fn() -> LoadFuture,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            inflight: RefCell::new(None),
        }
    }
}

impl<F> CapabilityLoader for SharedLoader<F>
where
    F: Fn() -> LoadFuture,
{
    async fn ensure_loaded(&self) -> Result<(), CapabilityError> {
        let shared = {
            let mut slot = self.inflight.borrow_mut();
            match slot.as_ref() {
                Some(pending) => pending.clone(),
                None => {
                    log::debug!("starting charting capability load");
                    let pending = (self.factory)().shared();
                    *slot = Some(pending.clone());
                    pending
                }
            }
        };

        let result = shared.clone().await;
        if result.is_err() {
            // Only clear the slot when it still holds the attempt that
            // failed. A waiter waking late must not erase a newer load
            // another caller has already started.
            let mut slot = self.inflight.borrow_mut();
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&shared)) {
                slot.take();
            }
        }
        result
    }
}

/// Production loader: resolves immediately when `window.Plotly` already
/// exists, otherwise injects the CDN script into `<head>`.
pub fn plotly_loader(cdn_url: String) -> SharedLoader<impl Fn() -> LoadFuture> {
    SharedLoader::new(move || {
        if capability_present() {
            log::trace!("charting capability already present, skipping fetch");
            return futures::future::ready(Ok(())).boxed_local();
        }
        inject_script(cdn_url.clone()).boxed_local()
    })
}

/// Whether `window.Plotly` is already defined.
pub fn capability_present() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("Plotly")).unwrap_or(false))
        .unwrap_or(false)
}

async fn inject_script(url: String) -> Result<(), CapabilityError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CapabilityError::Dom("no document".to_string()))?;
    let head = document
        .head()
        .ok_or_else(|| CapabilityError::Dom("no <head>".to_string()))?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| CapabilityError::Dom(format!("{e:?}")))?
        .dyn_into()
        .map_err(|e| CapabilityError::Dom(format!("{e:?}")))?;
    script.set_src(&url);
    script.set_async(true);

    let (tx, rx) = futures::channel::oneshot::channel::<Result<(), CapabilityError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        })
    };
    let onerror = {
        let tx = tx.clone();
        let url = url.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(CapabilityError::ScriptLoad(url.clone())));
            }
        })
    };
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    head.append_child(&script)
        .map_err(|e| CapabilityError::Dom(format!("{e:?}")))?;
    log::debug!("charting script injected: {url}");

    let result = rx
        .await
        .unwrap_or_else(|_| Err(CapabilityError::ScriptLoad(url)));
    script.set_onload(None);
    script.set_onerror(None);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn counting_loader(
        calls: Rc<Cell<usize>>,
        results: Vec<Result<(), CapabilityError>>,
    ) -> SharedLoader<impl Fn() -> LoadFuture> {
        let results = Rc::new(results);
        SharedLoader::new(move || {
            let attempt = calls.get();
            calls.set(attempt + 1);
            let result = results[attempt.min(results.len() - 1)].clone();
            futures::future::ready(result).boxed_local()
        })
    }

    #[test]
    fn test_concurrent_callers_share_one_load() {
        let calls = Rc::new(Cell::new(0usize));
        let (tx, rx) = oneshot::channel::<()>();
        let rx = Rc::new(RefCell::new(Some(rx)));

        let loader = SharedLoader::new({
            let calls = calls.clone();
            let rx = rx.clone();
            move || {
                calls.set(calls.get() + 1);
                let rx = rx.borrow_mut().take().expect("factory invoked twice");
                async move {
                    rx.await.expect("load signal dropped");
                    Ok(())
                }
                .boxed_local()
            }
        });

        block_on(async {
            let (first, second, _) = futures::join!(
                loader.ensure_loaded(),
                loader.ensure_loaded(),
                async move { tx.send(()).expect("no receiver") }
            );
            assert_eq!(first, Ok(()));
            assert_eq!(second, Ok(()));
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_resolved_load_is_cached() {
        let calls = Rc::new(Cell::new(0usize));
        let loader = counting_loader(calls.clone(), vec![Ok(())]);

        block_on(async {
            assert_eq!(loader.ensure_loaded().await, Ok(()));
            assert_eq!(loader.ensure_loaded().await, Ok(()));
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_stale_failure_wakeup_keeps_retry_shared() {
        use futures::task::noop_waker;
        use std::collections::VecDeque;
        use std::future::Future;
        use std::task::{Context, Poll};

        let calls = Rc::new(Cell::new(0usize));
        let (tx_first, rx_first) = oneshot::channel::<Result<(), CapabilityError>>();
        let (tx_second, rx_second) = oneshot::channel::<Result<(), CapabilityError>>();
        let attempts = Rc::new(RefCell::new(VecDeque::from([rx_first, rx_second])));

        let loader = SharedLoader::new({
            let calls = calls.clone();
            let attempts = attempts.clone();
            move || {
                calls.set(calls.get() + 1);
                let rx = attempts
                    .borrow_mut()
                    .pop_front()
                    .expect("more than two load attempts");
                async move { rx.await.expect("attempt signal dropped") }.boxed_local()
            }
        });

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        // Two waiters join the first attempt.
        let mut first = Box::pin(loader.ensure_loaded());
        let mut second = Box::pin(loader.ensure_loaded());
        assert!(first.as_mut().poll(&mut cx).is_pending());
        assert!(second.as_mut().poll(&mut cx).is_pending());
        assert_eq!(calls.get(), 1);

        // The attempt fails; the first waiter observes it and clears the slot.
        tx_first.send(Err(CapabilityError::ScriptLoad("cdn.example/plotly.js".to_string())))
            .expect("no receiver");
        assert!(matches!(first.as_mut().poll(&mut cx), Poll::Ready(Err(_))));

        // A retry starts before the second waiter wakes up.
        let mut retry = Box::pin(loader.ensure_loaded());
        assert!(retry.as_mut().poll(&mut cx).is_pending());
        assert_eq!(calls.get(), 2);

        // The late waiter sees the old failure but must not cancel the retry.
        assert!(matches!(second.as_mut().poll(&mut cx), Poll::Ready(Err(_))));

        // A fresh caller joins the pending retry instead of fetching again.
        let mut joined = Box::pin(loader.ensure_loaded());
        assert!(joined.as_mut().poll(&mut cx).is_pending());
        assert_eq!(calls.get(), 2);

        tx_second.send(Ok(())).expect("no receiver");
        assert!(matches!(retry.as_mut().poll(&mut cx), Poll::Ready(Ok(()))));
        assert!(matches!(joined.as_mut().poll(&mut cx), Poll::Ready(Ok(()))));
    }

    #[test]
    fn test_failure_allows_retry() {
        let calls = Rc::new(Cell::new(0usize));
        let loader = counting_loader(
            calls.clone(),
            vec![
                Err(CapabilityError::ScriptLoad("cdn.example/plotly.js".to_string())),
                Ok(()),
            ],
        );

        block_on(async {
            assert!(loader.ensure_loaded().await.is_err());
            assert_eq!(loader.ensure_loaded().await, Ok(()));
        });
        assert_eq!(calls.get(), 2);
    }
}
