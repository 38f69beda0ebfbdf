use glam::DVec2;

use super::traits::Surface;
use crate::api::types::NodeColor;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        a: DVec2,
        b: DVec2,
        color: NodeColor,
        alpha: f64,
        width: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: NodeColor,
        alpha: f64,
    },
}

/// Surface that stores every draw call instead of rasterizing.
/// Used by tests and headless tooling.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub width: f64,
    pub height: f64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, a: DVec2, b: DVec2, color: NodeColor, alpha: f64, width: f64) {
        self.commands.push(DrawCommand::Line { a, b, color, alpha, width });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: NodeColor, alpha: f64) {
        self.commands.push(DrawCommand::Circle { center, radius, color, alpha });
    }
}
