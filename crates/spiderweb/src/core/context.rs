use glam::DVec2;

use super::viewport::FieldParams;

/// Per-frame inputs to the simulation: the latest pointer position and the
/// viewport-derived parameters. Written by input handling, read by the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimContext {
    pub params: FieldParams,
    pub pointer: DVec2,
}

impl SimContext {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            pointer: DVec2::ZERO,
        }
    }
}
