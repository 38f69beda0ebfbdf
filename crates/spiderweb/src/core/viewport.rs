use crate::api::config::FieldConfig;

/// Drawing surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Simulation parameters derived from the viewport. Recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub viewport: Viewport,
    pub node_count: usize,
    pub connection_distance: f64,
}

impl FieldParams {
    pub fn from_viewport(viewport: Viewport, config: &FieldConfig) -> Self {
        let node_count = if config.area_per_node > 0.0 {
            (viewport.area() / config.area_per_node).floor() as usize
        } else {
            0
        };
        let connection_distance = if config.connection_divisor > 0.0 {
            viewport.width.min(viewport.height) / config.connection_divisor
        } else {
            0.0
        };
        Self {
            viewport,
            node_count,
            connection_distance,
        }
    }

    pub fn width(&self) -> f64 {
        self.viewport.width
    }

    pub fn height(&self) -> f64 {
        self.viewport.height
    }
}
