use spiderweb::{Animator, FieldConfig, InitError, InputEvent};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::surface::CanvasSurface;

/// Couples the headless [`Animator`] with the canvas it draws on.
///
/// Shared between the animation-frame callback and the DOM event listeners
/// through `Rc<RefCell<_>>`; every access happens on the main thread and
/// none of them overlap.
pub struct CanvasRunner {
    animator: Animator,
    surface: CanvasSurface,
}

impl CanvasRunner {
    /// Look up `canvas_id`, size it to the viewport and build the field.
    pub fn mount(window: &Window, canvas_id: &str, config: FieldConfig) -> Result<Self, InitError> {
        let (canvas, ctx) = lookup_canvas(window, canvas_id)?;
        let (width, height) = viewport_size(window);

        let surface = CanvasSurface::new(canvas, ctx);
        surface.resize(width, height);

        let seed = seed_from_unit(js_sys::Math::random());
        let animator = Animator::new(width, height, config, seed);

        Ok(Self { animator, surface })
    }

    /// Called from `requestAnimationFrame`. Returns true if a frame was drawn.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        self.animator.tick(timestamp_ms, &mut self.surface)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.animator.push_input(InputEvent::PointerMove { x, y });
    }

    /// Resize the canvas right away; the field is rebuilt on the next tick.
    pub fn viewport_resized(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.animator.push_input(InputEvent::Resize { width, height });
    }

    pub fn start(&mut self) {
        self.animator.start();
    }

    pub fn stop(&mut self) {
        self.animator.stop();
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    pub fn node_count(&self) -> u32 {
        self.animator.nodes().len() as u32
    }

    pub fn spark_count(&self) -> u32 {
        self.animator.sparks().len() as u32
    }
}

fn lookup_canvas(
    window: &Window,
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), InitError> {
    let not_found = || InitError::CanvasNotFound(canvas_id.to_string());
    let canvas = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .ok_or_else(not_found)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| not_found())?;

    let unavailable = || InitError::ContextUnavailable(canvas_id.to_string());
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or_else(unavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| unavailable())?;

    Ok((canvas, ctx))
}

/// Current `innerWidth` x `innerHeight`, or zero if the browser won't say.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Map `Math.random()` output in [0, 1) to a non-zero 64-bit seed.
pub fn seed_from_unit(r: f64) -> u64 {
    let bits = (r.clamp(0.0, 1.0) * (1u64 << 53) as f64) as u64;
    // Spread the 53 bits over the full word; never zero.
    bits.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1
}
