//! WASM bridge for spiderweb.
//!
//! Mounts the particle field on a `<canvas>`, wires pointer and resize
//! events, and drives the frame loop from `requestAnimationFrame`.
//!
//! ```ignore
//! import init, { spiderweb_init } from "./pkg/spiderweb_web.js";
//! await init();
//! spiderweb_init("canvas-container");
//! ```

pub mod frame_loop;
pub mod listeners;
pub mod runner;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use spiderweb::{FieldConfig, InitError};
use wasm_bindgen::prelude::*;

pub use frame_loop::FrameLoop;
pub use listeners::InputListeners;
pub use runner::CanvasRunner;
pub use surface::CanvasSurface;

/// Element id the portfolio page uses for the background canvas.
pub const DEFAULT_CANVAS_ID: &str = "canvas-container";

/// Everything kept alive for a mounted canvas.
pub struct MountedField {
    runner: Rc<RefCell<CanvasRunner>>,
    frame_loop: FrameLoop,
    _listeners: InputListeners,
}

impl MountedField {
    pub fn mount(canvas_id: &str, config: FieldConfig) -> Result<Self, InitError> {
        let window = web_sys::window().ok_or_else(|| InitError::Environment("no window".into()))?;
        let runner = Rc::new(RefCell::new(CanvasRunner::mount(&window, canvas_id, config)?));
        let listeners = InputListeners::attach(&window, runner.clone())
            .map_err(|err| InitError::Environment(format!("event listeners: {:?}", err)))?;
        let frame_loop = FrameLoop::new(window, runner.clone());
        Ok(Self {
            runner,
            frame_loop,
            _listeners: listeners,
        })
    }
}

thread_local! {
    static FIELD: RefCell<Option<MountedField>> = RefCell::new(None);
}

/// Run `f` against the mounted field. `None` if nothing is mounted.
fn with_field<R>(f: impl FnOnce(&MountedField) -> R) -> Option<R> {
    FIELD.with(|cell| cell.borrow().as_ref().map(f))
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn mount_and_start(canvas_id: &str, config: FieldConfig) {
    // Remount replaces (and tears down) any previous field.
    FIELD.with(|cell| cell.borrow_mut().take());

    match MountedField::mount(canvas_id, config) {
        Ok(field) => {
            field.frame_loop.start();
            let nodes = field.runner.borrow().node_count();
            FIELD.with(|cell| *cell.borrow_mut() = Some(field));
            log::info!("spiderweb: initialized ({} nodes)", nodes);
        }
        Err(err) => log::error!("spiderweb: {}", err),
    }
}

/// Mount on `canvas_id` with the default field settings and start animating.
/// A missing canvas is logged and leaves the page untouched.
#[wasm_bindgen]
pub fn spiderweb_init(canvas_id: &str) {
    init_logging();
    mount_and_start(canvas_id, FieldConfig::default());
}

/// Like [`spiderweb_init`], with a JSON object overriding `FieldConfig` fields.
#[wasm_bindgen]
pub fn spiderweb_init_with_config(canvas_id: &str, json: &str) {
    init_logging();
    match FieldConfig::from_json(json) {
        Ok(config) => mount_and_start(canvas_id, config),
        Err(err) => log::error!("spiderweb: {}", InitError::from(err)),
    }
}

#[wasm_bindgen]
pub fn spiderweb_start() {
    with_field(|f| f.frame_loop.start());
}

#[wasm_bindgen]
pub fn spiderweb_stop() {
    with_field(|f| f.frame_loop.stop());
}

#[wasm_bindgen]
pub fn spiderweb_is_running() -> bool {
    with_field(|f| f.frame_loop.is_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn spiderweb_node_count() -> u32 {
    with_field(|f| f.runner.borrow().node_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn spiderweb_spark_count() -> u32 {
    with_field(|f| f.runner.borrow().spark_count()).unwrap_or(0)
}
