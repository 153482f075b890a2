use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use leptos::prelude::{request_animation_frame_with_handle, AnimationFrameRequestHandle};

use super::{Phase, ScrambleReveal};

/// Something that can call back once per rendered frame.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    /// Schedules `callback` for the next frame, or returns `None` if no frame
    /// can be requested.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// `requestAnimationFrame` on the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = AnimationFrameRequestHandle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<Self::Handle> {
        match request_animation_frame_with_handle(callback) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("couldn't request animation frame: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

struct RunState<H> {
    reveal: ScrambleReveal,
    pending: Option<H>,
    // bumped on every start/stop so callbacks from an older run become no-ops
    generation: u64,
}

impl<H> RunState<H> {
    fn cancel_pending<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}

type Sink = Rc<dyn Fn(String)>;

/// Drives a [`ScrambleReveal`] with a frame scheduler and publishes every
/// frame to `sink`. At most one frame is pending at any time, and nothing is
/// published after [`ScrambleRun::stop`] or once the run is dropped.
pub struct ScrambleRun<S: FrameScheduler> {
    scheduler: Rc<S>,
    state: Rc<RefCell<RunState<S::Handle>>>,
    sink: Sink,
}

impl<S: FrameScheduler> ScrambleRun<S> {
    pub fn new(scheduler: S, sink: impl Fn(String) + 'static) -> Self {
        Self::with_reveal(scheduler, ScrambleReveal::new(""), sink)
    }

    pub fn with_reveal(
        scheduler: S,
        reveal: ScrambleReveal,
        sink: impl Fn(String) + 'static,
    ) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            state: Rc::new(RefCell::new(RunState {
                reveal,
                pending: None,
                generation: 0,
            })),
            sink: Rc::new(sink),
        }
    }

    /// Begins revealing `text`. A different target discards the current run
    /// entirely; the same target picks up where it left off.
    pub fn start(&self, text: &str) {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.cancel_pending(self.scheduler.as_ref());
            state.generation += 1;
            state.reveal.retarget(text);
            if state.reveal.is_revealed() {
                let display = state.reveal.display().to_string();
                drop(state);
                (self.sink)(display);
                return;
            }
            state.generation
        };
        schedule(&self.scheduler, &self.state, &self.sink, generation);
    }

    /// Cancels the pending frame. Nothing is published until the next `start`.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.cancel_pending(self.scheduler.as_ref());
        state.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().reveal.phase()
    }

    pub fn display(&self) -> String {
        self.state.borrow().reveal.display().to_string()
    }
}

impl<S: FrameScheduler> Drop for ScrambleRun<S> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.cancel_pending(self.scheduler.as_ref());
            state.generation += 1;
        }
    }
}

fn schedule<S: FrameScheduler>(
    scheduler: &Rc<S>,
    state: &Rc<RefCell<RunState<S::Handle>>>,
    sink: &Sink,
    generation: u64,
) {
    let weak: Weak<RefCell<RunState<S::Handle>>> = Rc::downgrade(state);
    let frame_scheduler = Rc::clone(scheduler);
    let frame_sink = Rc::clone(sink);
    let handle = scheduler.request(Box::new(move || {
        if let Some(state) = weak.upgrade() {
            on_frame(&frame_scheduler, &state, &frame_sink, generation);
        }
    }));
    state.borrow_mut().pending = handle;
}

fn on_frame<S: FrameScheduler>(
    scheduler: &Rc<S>,
    state: &Rc<RefCell<RunState<S::Handle>>>,
    sink: &Sink,
    generation: u64,
) {
    let (display, revealing) = {
        let mut state = state.borrow_mut();
        if state.generation != generation {
            return;
        }
        state.pending = None;
        let display = state.reveal.tick().to_string();
        (display, !state.reveal.is_revealed())
    };
    sink(display);
    // the sink may have restarted or stopped the run
    if revealing && state.borrow().generation == generation {
        schedule(scheduler, state, sink, generation);
    }
}
