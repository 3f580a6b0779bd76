use std::cell::Cell;

use super::defs::ChartDef;
use super::loader::CapabilityLoader;
use super::spec::{build_spec, ChartSpec};
use super::theme::ChartTheme;

/// Rendering backend, injected at construction so tests run without DOM.
pub trait ChartingCapability {
    /// Whether the mount point exists on the current page variant.
    fn has_mount(&self, mount_id: &str) -> bool;
    /// Issue one render call against a present mount point.
    fn render(&self, mount_id: &str, spec: &ChartSpec);
}

/// Lifecycle of one chart section within a page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Requested,
    Loading,
    Rendered,
}

/// Drives the chart section: one load, then one render pass.
///
/// Owns the per-session render state, so a coordinator instance can be
/// triggered any number of times but loads the capability and renders at
/// most once. A failed load returns the state to `Idle`, keeping a later
/// trigger able to retry. `Rendered` is terminal.
pub struct RenderCoordinator<L, C> {
    loader: L,
    capability: C,
    defs: Vec<ChartDef>,
    theme: ChartTheme,
    animate: bool,
    state: Cell<RenderState>,
}

impl<L, C> RenderCoordinator<L, C>
where
    L: CapabilityLoader,
    C: ChartingCapability,
{
    pub fn new(loader: L, capability: C, defs: Vec<ChartDef>, theme: ChartTheme, animate: bool) -> Self {
        Self {
            loader,
            capability,
            defs,
            theme,
            animate,
            state: Cell::new(RenderState::Idle),
        }
    }

    pub fn state(&self) -> RenderState {
        self.state.get()
    }

    /// Handle one qualifying trigger: load the capability, then render.
    ///
    /// The `Requested` flag is set synchronously before the first await,
    /// which is the sole re-entrancy guard in this single-threaded model.
    pub async fn ensure(&self) {
        if self.state.get() != RenderState::Idle {
            log::trace!("charts already {:?}, ignoring trigger", self.state.get());
            return;
        }
        self.state.set(RenderState::Requested);
        log::debug!("chart render requested");

        self.state.set(RenderState::Loading);
        match self.loader.ensure_loaded().await {
            Ok(()) => {
                self.render_all();
                self.state.set(RenderState::Rendered);
            }
            Err(err) => {
                // Silent for the user; the section simply stays empty
                // until a later trigger retries.
                log::warn!("charting capability unavailable: {err}");
                self.state.set(RenderState::Idle);
            }
        }
    }

    /// Render every definition whose mount point is present.
    ///
    /// Absent mounts are an intentional partial-page configuration, not an
    /// error. Render order between the charts is unspecified.
    pub fn render_all(&self) {
        for def in &self.defs {
            if !self.capability.has_mount(def.mount_id) {
                log::debug!("mount '{}' absent, skipping", def.mount_id);
                continue;
            }
            let spec = build_spec(def, &self.theme, self.animate);
            self.capability.render(def.mount_id, &spec);
            log::trace!("rendered {:?} chart on '{}'", def.kind, def.mount_id);
        }
    }
}
