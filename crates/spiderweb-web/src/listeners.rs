use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent, Window};

use crate::runner::{viewport_size, CanvasRunner};

/// A DOM listener that unregisters itself on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self { target, kind, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Pointer-move and resize listeners feeding a [`CanvasRunner`].
pub struct InputListeners {
    _listeners: Vec<Listener>,
}

impl InputListeners {
    /// Listen for `mousemove` on the document and `resize` on the window.
    pub fn attach(window: &Window, runner: Rc<RefCell<CanvasRunner>>) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let pointer_runner = runner.clone();
        let mouse = Listener::attach(document.into(), "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                pointer_runner
                    .borrow_mut()
                    .pointer_move(event.client_x() as f64, event.client_y() as f64);
            }
        })?;

        let resize_window = window.clone();
        let resize = Listener::attach(window.clone().into(), "resize", move |_| {
            let (width, height) = viewport_size(&resize_window);
            runner.borrow_mut().viewport_resized(width, height);
        })?;

        Ok(Self {
            _listeners: vec![mouse, resize],
        })
    }
}
