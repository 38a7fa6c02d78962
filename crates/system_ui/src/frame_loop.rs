//! Self-rescheduling animation-frame loop with explicit cancellation.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::{leptos_dom::helpers::AnimationFrameRequestHandle, logging};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Returned by a frame callback to decide whether another frame should be requested.
pub enum FrameControl {
    /// Request another frame.
    Continue,
    /// Stop the loop after this frame.
    Stop,
}

struct FrameLoopInner {
    stopped: Cell<bool>,
    pending: Cell<Option<AnimationFrameRequestHandle>>,
    tick: RefCell<Box<dyn FnMut() -> FrameControl>>,
}

#[derive(Clone)]
/// Handle to a running animation-frame loop.
///
/// The loop keeps scheduling itself until the callback returns [`FrameControl::Stop`] or
/// [`FrameLoop::stop`] is called. Owners must call `stop` when their view unmounts.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    /// Starts a loop that calls `tick` once per display frame.
    pub fn start(tick: impl FnMut() -> FrameControl + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            stopped: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule(&inner);
        Self { inner }
    }

    /// Cancels the pending frame request and prevents any further frames.
    pub fn stop(&self) {
        self.inner.stopped.set(true);
        if let Some(handle) = self.inner.pending.take() {
            handle.cancel();
        }
    }
}

fn schedule(inner: &Rc<FrameLoopInner>) {
    if inner.stopped.get() {
        return;
    }
    let next = Rc::clone(inner);
    match leptos::request_animation_frame_with_handle(move || run_frame(next)) {
        Ok(handle) => inner.pending.set(Some(handle)),
        Err(err) => {
            logging::warn!("animation frame request failed: {err:?}");
            inner.stopped.set(true);
        }
    }
}

fn run_frame(inner: Rc<FrameLoopInner>) {
    inner.pending.set(None);
    if inner.stopped.get() {
        return;
    }
    let control = {
        let mut tick = inner.tick.borrow_mut();
        tick()
    };
    match control {
        FrameControl::Continue => schedule(&inner),
        FrameControl::Stop => inner.stopped.set(true),
    }
}
