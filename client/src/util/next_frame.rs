//! Single pending `requestAnimationFrame` callback.
//!
//! Repeated requests before the frame fires coalesce into one callback;
//! callers keep the latest work elsewhere (the fitter's frame slot). Frame
//! work may request the following frame; each request owns its closure.

#[cfg(test)]
#[path = "next_frame_test.rs"]
mod next_frame_test;

use std::cell::Cell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Pending-frame flag shared by a scheduler and its callbacks.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    /// Claim the next frame. `false` when one is already pending.
    pub fn try_claim(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Give the claim back without running anything.
    pub fn release(&self) {
        self.pending.set(false);
    }

    /// Frame fired: clear the claim, then run `work`, which may claim again.
    pub fn fire(&self, work: impl FnOnce()) {
        self.pending.set(false);
        work();
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(feature = "hydrate")]
type FrameCallback = Closure<dyn FnMut(f64)>;

/// Owner of at most one scheduled animation frame.
#[cfg(feature = "hydrate")]
#[derive(Clone, Default)]
pub struct NextFrame {
    gate: FrameGate,
}

#[cfg(feature = "hydrate")]
impl NextFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` on the next frame unless a frame is already pending.
    ///
    /// Runs `work` immediately when no window is available or the request
    /// is rejected.
    pub fn request(&self, work: impl FnOnce() + 'static) {
        if !self.gate.try_claim() {
            return;
        }

        let Some(window) = web_sys::window() else {
            self.gate.fire(work);
            return;
        };

        let work: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(work))));
        let gate = self.gate.clone();
        let work_for_cb = Rc::clone(&work);
        let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            // Detach this request's closure first; the work may schedule the next frame.
            let _own = holder_for_cb.borrow_mut().take();
            let task = work_for_cb.borrow_mut().take();
            if let Some(task) = task {
                gate.fire(task);
            } else {
                gate.release();
            }
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        } else {
            log::warn!("requestAnimationFrame rejected; running frame work inline");
            let task = work.borrow_mut().take();
            match task {
                Some(task) => self.gate.fire(task),
                None => self.gate.release(),
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }
}
