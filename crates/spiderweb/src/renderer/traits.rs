//! Drawing surface abstraction.
//!
//! The simulation only ever emits three kinds of draw calls. The WASM bridge
//! maps them onto `CanvasRenderingContext2d`; tests record them.

use glam::DVec2;

use crate::api::types::NodeColor;

/// Immediate-mode 2D draw sink.
pub trait Surface {
    /// Drawable extent in pixels, as (width, height).
    fn size(&self) -> (f64, f64);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Stroke a straight line from `a` to `b`.
    fn stroke_line(&mut self, a: DVec2, b: DVec2, color: NodeColor, alpha: f64, width: f64);

    /// Fill a circle centred on `center`.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: NodeColor, alpha: f64);
}
