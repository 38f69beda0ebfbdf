use glam::DVec2;

use crate::api::config::FieldConfig;
use crate::core::context::SimContext;
use crate::core::rng::Rng;
use crate::core::time::FrameThrottle;
use crate::core::viewport::{FieldParams, Viewport};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::Surface;
use crate::systems::connections::connect_and_advance;
use crate::systems::nodes::{create_nodes, draw_nodes, Node};
use crate::systems::sparks::{advance_sparks, Spark};

/// Owns the whole particle field and runs one frame per accepted tick.
///
/// The host (the WASM bridge, or a test) calls [`Animator::tick`] from its
/// animation callback and pushes input through [`Animator::push_input`].
/// The animator itself never schedules anything; `start`/`stop` only gate
/// whether `tick` does work.
pub struct Animator {
    config: FieldConfig,
    ctx: SimContext,
    nodes: Vec<Node>,
    sparks: Vec<Spark>,
    rng: Rng,
    throttle: FrameThrottle,
    input: InputQueue,
    running: bool,
}

impl Animator {
    /// Build a field for a `width` x `height` viewport. The animator starts
    /// stopped.
    pub fn new(width: f64, height: f64, config: FieldConfig, seed: u64) -> Self {
        let params = FieldParams::from_viewport(Viewport::new(width, height), &config);
        let mut rng = Rng::new(config.seed.unwrap_or(seed));
        let nodes = create_nodes(&params, &config, &mut rng);
        let throttle = FrameThrottle::new(config.frame_interval_ms);
        let sparks = Vec::with_capacity(config.max_sparks);
        log::debug!(
            "field created: {}x{} -> {} nodes, connection distance {:.1}",
            width,
            height,
            params.node_count,
            params.connection_distance
        );
        Self {
            config,
            ctx: SimContext::new(params),
            nodes,
            sparks,
            rng,
            throttle,
            input: InputQueue::new(),
            running: false,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.throttle.reset();
            log::info!("spiderweb: animation started");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("spiderweb: animation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue an input event for the next tick. While stopped nothing ticks,
    /// so the event is applied immediately instead.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.running {
            self.input.push(event);
        } else {
            self.apply(event);
        }
    }

    /// Apply pending input, then render a frame if the throttle allows it.
    /// Returns true when a frame was drawn.
    pub fn tick(&mut self, timestamp_ms: f64, surface: &mut dyn Surface) -> bool {
        self.apply_input();
        if !self.running || !self.throttle.accept(timestamp_ms) {
            return false;
        }
        self.render_frame(surface);
        true
    }

    /// Run one full frame unconditionally: clear, connection pass with
    /// per-node advancement, nodes, sparks.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        connect_and_advance(
            &mut self.nodes,
            &mut self.sparks,
            &self.ctx,
            &self.config,
            &mut self.rng,
            surface,
        );
        draw_nodes(&self.nodes, surface, &self.config);
        advance_sparks(&mut self.sparks, surface, &self.config);
    }

    fn apply_input(&mut self) {
        for event in self.input.drain() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.set_pointer(x, y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.ctx.pointer = DVec2::new(x, y);
    }

    /// Recompute viewport parameters and rebuild the node field from scratch.
    pub fn resize(&mut self, width: f64, height: f64) {
        let params = FieldParams::from_viewport(Viewport::new(width, height), &self.config);
        self.ctx.params = params;
        self.nodes = create_nodes(&params, &self.config, &mut self.rng);
        log::debug!(
            "resize {}x{}: {} nodes, connection distance {:.1}",
            width,
            height,
            params.node_count,
            params.connection_distance
        );
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn params(&self) -> &FieldParams {
        &self.ctx.params
    }

    pub fn pointer(&self) -> DVec2 {
        self.ctx.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn frames_rendered(&self) -> u64 {
        self.throttle.accepted_frames()
    }
}
