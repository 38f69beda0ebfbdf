//! Connection pass: draws fading edges between nearby nodes, emits sparks
//! near the pointer, and advances each node once its edges are drawn.

use glam::DVec2;

use super::nodes::{advance_node, Node};
use super::sparks::Spark;
use crate::api::config::FieldConfig;
use crate::core::context::SimContext;
use crate::core::rng::Rng;
use crate::renderer::traits::Surface;

/// Line opacity for a pair `distance` apart. Linear falloff from
/// `max_alpha` at zero to 0 at `threshold`.
pub fn connection_opacity(distance: f64, threshold: f64, max_alpha: f64) -> f64 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    max_alpha * (1.0 - distance / threshold)
}

/// Run the pairwise pass over `nodes`.
///
/// Node `i` is advanced right after all pairs (i, j > i) are drawn. Neither
/// end of a pair has moved yet when it is drawn, so every line uses
/// pre-advance positions. Sparks spawned here are appended to `sparks` while
/// it holds fewer than `config.max_sparks`.
pub fn connect_and_advance(
    nodes: &mut [Node],
    sparks: &mut Vec<Spark>,
    ctx: &SimContext,
    config: &FieldConfig,
    rng: &mut Rng,
    surface: &mut dyn Surface,
) {
    let threshold = ctx.params.connection_distance;
    for i in 0..nodes.len() {
        let (head, tail) = nodes.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter() {
            let distance = a.pos.distance(b.pos);
            if distance >= threshold {
                continue;
            }

            let alpha = connection_opacity(distance, threshold, config.connection_max_alpha);
            surface.stroke_line(a.pos, b.pos, a.color, alpha, config.line_width);

            if near_pointer(a.pos, b.pos, ctx.pointer, config)
                && rng.chance(config.spark_chance)
                && sparks.len() < config.max_sparks
            {
                sparks.push(Spark::spawn(a, b, rng, config));
            }
        }

        advance_node(a, ctx, config);
    }
}

fn near_pointer(a: DVec2, b: DVec2, pointer: DVec2, config: &FieldConfig) -> bool {
    let midpoint = (a + b) * 0.5;
    midpoint.distance(pointer) < config.spark_trigger_radius
}
