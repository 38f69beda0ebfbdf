use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::runner::CanvasRunner;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Self-rescheduling `requestAnimationFrame` loop with explicit start/stop.
///
/// The callback refers to itself only through a `Weak`, so dropping the
/// loop frees the closure. `stop` cancels the pending request before the
/// closure is released, so the browser never calls into a dropped closure.
pub struct FrameLoop {
    window: Window,
    runner: Rc<RefCell<CanvasRunner>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(window: Window, runner: Rc<RefCell<CanvasRunner>>) -> Self {
        Self {
            window,
            runner,
            callback: Rc::new(RefCell::new(None)),
            request_id: Rc::new(Cell::new(None)),
        }
    }

    /// True while a frame request is outstanding.
    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some() && self.request_id.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        self.runner.borrow_mut().start();

        let runner = self.runner.clone();
        let window = self.window.clone();
        let request_id = self.request_id.clone();
        let this: Weak<RefCell<Option<FrameCallback>>> = Rc::downgrade(&self.callback);

        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            request_id.set(None);
            runner.borrow_mut().frame(timestamp);
            if let Some(cell) = this.upgrade() {
                if let Some(cb) = cell.borrow().as_ref() {
                    request_id.set(schedule(&window, cb));
                }
            }
        });

        if arm(schedule(&self.window, &closure), &self.request_id) {
            *self.callback.borrow_mut() = Some(closure);
        } else {
            self.runner.borrow_mut().stop();
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.request_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("spiderweb: cancelAnimationFrame failed: {:?}", err);
            }
        }
        if self.callback.borrow_mut().take().is_some() {
            self.runner.borrow_mut().stop();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Record a fresh request id. Returns false when the request failed, in
/// which case the loop must not be considered running.
fn arm(request: Option<i32>, request_id: &Cell<Option<i32>>) -> bool {
    request_id.set(request);
    request.is_some()
}

fn schedule(window: &Window, cb: &FrameCallback) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::error!("spiderweb: requestAnimationFrame failed: {:?}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_request_leaves_loop_unarmed() {
        let id = Cell::new(Some(3));
        assert!(!arm(None, &id));
        assert_eq!(id.get(), None);
    }

    #[test]
    fn successful_request_is_recorded() {
        let id = Cell::new(None);
        assert!(arm(Some(7), &id));
        assert_eq!(id.get(), Some(7));
    }
}
