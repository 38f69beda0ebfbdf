use std::f64::consts::TAU;

use glam::DVec2;
use spiderweb::{NodeColor, Surface};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` backed by a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Match the canvas backing store to the viewport. Clears its contents.
    pub fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn stroke_line(&mut self, a: DVec2, b: DVec2, color: NodeColor, alpha: f64, width: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color.hex());
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_line_width(width);
        self.ctx.move_to(a.x, a.y);
        self.ctx.line_to(b.x, b.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: NodeColor, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color.hex());
        self.ctx.set_global_alpha(alpha);
        // Only fails for a negative radius.
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }
}
