//! Node field: creation and per-frame kinematics.

use glam::DVec2;

use crate::api::config::FieldConfig;
use crate::api::types::NodeColor;
use crate::core::context::SimContext;
use crate::core::rng::Rng;
use crate::core::viewport::FieldParams;
use crate::renderer::traits::Surface;

/// A drifting point in the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: NodeColor,
}

impl Node {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: NodeColor) -> Self {
        Self { pos, vel, radius, color }
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Build a fresh field sized to `params.node_count`.
pub fn create_nodes(params: &FieldParams, config: &FieldConfig, rng: &mut Rng) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(params.node_count);
    let v = config.initial_speed;
    for _ in 0..params.node_count {
        let pos = DVec2::new(
            rng.next_f64() * params.width(),
            rng.next_f64() * params.height(),
        );
        let radius = rng.range(config.radius_min, config.radius_max);
        let vel = DVec2::new(rng.range(-v, v), rng.range(-v, v));
        nodes.push(Node::new(pos, vel, radius, NodeColor::random(rng)));
    }
    nodes
}

/// Advance one node by a single frame: move, bounce, pointer repulsion,
/// speed cap.
pub fn advance_node(node: &mut Node, ctx: &SimContext, config: &FieldConfig) {
    node.pos += node.vel;

    // Reflect velocity only; the node may sit outside the bounds for a frame.
    if node.pos.x < 0.0 || node.pos.x > ctx.params.width() {
        node.vel.x = -node.vel.x;
    }
    if node.pos.y < 0.0 || node.pos.y > ctx.params.height() {
        node.vel.y = -node.vel.y;
    }

    node.vel += repulsion(node.pos, ctx.pointer, config);

    let speed = node.vel.length();
    if speed > config.max_speed {
        node.vel = node.vel / speed * config.max_speed;
    }
}

/// Impulse pushing a node at `pos` away from `pointer`.
/// Zero outside the repulsion radius, and zero when the two coincide since
/// the direction is undefined there.
pub fn repulsion(pos: DVec2, pointer: DVec2, config: &FieldConfig) -> DVec2 {
    let offset = pos - pointer;
    let distance = offset.length();
    if distance >= config.repulsion_radius || distance == 0.0 {
        return DVec2::ZERO;
    }
    let force = (config.repulsion_radius - distance) / config.repulsion_divisor;
    let angle = offset.y.atan2(offset.x);
    DVec2::new(angle.cos(), angle.sin()) * force
}

pub fn draw_nodes(nodes: &[Node], surface: &mut dyn Surface, config: &FieldConfig) {
    for node in nodes {
        surface.fill_circle(node.pos, node.radius, node.color, config.node_alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::Viewport;

    const EPS: f64 = 1e-9;

    fn ctx(w: f64, h: f64, pointer: DVec2) -> SimContext {
        let params = FieldParams::from_viewport(Viewport::new(w, h), &FieldConfig::default());
        SimContext { params, pointer }
    }

    fn far_pointer() -> DVec2 {
        DVec2::new(-10_000.0, -10_000.0)
    }

    #[test]
    fn create_nodes_respects_ranges() {
        let config = FieldConfig::default();
        let params = FieldParams::from_viewport(Viewport::new(1200.0, 800.0), &config);
        let mut rng = Rng::new(42);
        let nodes = create_nodes(&params, &config, &mut rng);
        assert_eq!(nodes.len(), 48);
        for n in &nodes {
            assert!(n.pos.x >= 0.0 && n.pos.x < 1200.0);
            assert!(n.pos.y >= 0.0 && n.pos.y < 800.0);
            assert!(n.vel.x >= -0.25 && n.vel.x < 0.25);
            assert!(n.vel.y >= -0.25 && n.vel.y < 0.25);
            assert!(n.radius >= 1.0 && n.radius < 2.5);
        }
    }

    #[test]
    fn integrates_velocity() {
        let config = FieldConfig::default();
        let mut n = Node::new(DVec2::new(100.0, 100.0), DVec2::new(0.2, -0.1), 1.0, NodeColor::Blue);
        advance_node(&mut n, &ctx(500.0, 500.0, far_pointer()), &config);
        assert!((n.pos.x - 100.2).abs() < EPS);
        assert!((n.pos.y - 99.9).abs() < EPS);
        assert_eq!(n.vel, DVec2::new(0.2, -0.1));
    }

    #[test]
    fn bounce_flips_only_crossing_axis() {
        let config = FieldConfig::default();
        let mut n = Node::new(DVec2::new(499.9, 250.0), DVec2::new(0.2, 0.1), 1.0, NodeColor::Blue);
        advance_node(&mut n, &ctx(500.0, 500.0, far_pointer()), &config);
        assert_eq!(n.vel, DVec2::new(-0.2, 0.1));
        // Reflected, not clamped back inside
        assert!(n.pos.x > 500.0);
    }

    #[test]
    fn bounce_on_both_axes_at_corner() {
        let config = FieldConfig::default();
        let mut n = Node::new(DVec2::new(0.05, 0.05), DVec2::new(-0.1, -0.1), 1.0, NodeColor::Green);
        advance_node(&mut n, &ctx(500.0, 500.0, far_pointer()), &config);
        assert_eq!(n.vel, DVec2::new(0.1, 0.1));
    }

    #[test]
    fn repulsion_pushes_away_from_pointer() {
        let config = FieldConfig::default();
        // Pointer 40 units to the left, node at rest
        let impulse = repulsion(DVec2::new(140.0, 100.0), DVec2::new(100.0, 100.0), &config);
        assert!((impulse.x - 40.0 / 2000.0).abs() < EPS);
        assert!(impulse.y.abs() < EPS);
    }

    #[test]
    fn repulsion_zero_outside_radius() {
        let config = FieldConfig::default();
        let impulse = repulsion(DVec2::new(180.0, 100.0), DVec2::new(100.0, 100.0), &config);
        assert_eq!(impulse, DVec2::ZERO);
    }

    #[test]
    fn coincident_pointer_gives_finite_velocity() {
        let config = FieldConfig::default();
        let mut n = Node::new(DVec2::new(100.0, 100.0), DVec2::ZERO, 1.0, NodeColor::Purple);
        advance_node(&mut n, &ctx(500.0, 500.0, DVec2::new(100.0, 100.0)), &config);
        assert!(n.vel.is_finite());
        assert!(n.pos.is_finite());
        assert_eq!(n.vel, DVec2::ZERO);
    }

    #[test]
    fn speed_is_capped() {
        let config = FieldConfig::default();
        let mut n = Node::new(DVec2::new(250.0, 250.0), DVec2::new(3.0, 4.0), 1.0, NodeColor::Blue);
        advance_node(&mut n, &ctx(500.0, 500.0, far_pointer()), &config);
        assert!((n.speed() - 2.0).abs() < EPS);
        // Direction preserved
        assert!((n.vel.x - 1.2).abs() < EPS);
        assert!((n.vel.y - 1.6).abs() < EPS);
    }

    #[test]
    fn speed_never_exceeds_cap_under_pointer_pressure() {
        let config = FieldConfig::default();
        let params = FieldParams::from_viewport(Viewport::new(800.0, 600.0), &config);
        let mut rng = Rng::new(9);
        let mut nodes = create_nodes(&params, &config, &mut rng);
        let mut c = SimContext::new(params);
        for frame in 0..2_000 {
            c.pointer = DVec2::new((frame % 800) as f64, 300.0);
            for n in nodes.iter_mut() {
                advance_node(n, &c, &config);
                assert!(n.speed() <= config.max_speed + 1e-9);
            }
        }
    }

    #[test]
    fn draw_nodes_fills_one_circle_each() {
        use crate::renderer::recording::RecordingSurface;
        let config = FieldConfig::default();
        let nodes = vec![
            Node::new(DVec2::ZERO, DVec2::ZERO, 1.5, NodeColor::Blue),
            Node::new(DVec2::ONE, DVec2::ZERO, 2.0, NodeColor::Green),
        ];
        let mut surface = RecordingSurface::new();
        draw_nodes(&nodes, &mut surface, &config);
        assert_eq!(surface.circles().count(), 2);
    }
}
