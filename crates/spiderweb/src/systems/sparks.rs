//! Sparks: short-lived particles travelling along a connection.

use glam::DVec2;

use super::nodes::Node;
use crate::api::config::FieldConfig;
use crate::api::types::NodeColor;
use crate::core::rng::Rng;
use crate::renderer::traits::Surface;

/// A particle moving in a straight line from a source snapshot to a target
/// snapshot at constant speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub origin: DVec2,
    pub pos: DVec2,
    pub target: DVec2,
    pub speed: f64,
    pub color: NodeColor,
    pub progress: f64,
    pub distance: f64,
}

impl Spark {
    /// Create a spark at `source` heading for `target`. Positions are copied,
    /// so the spark does not follow the nodes afterwards.
    pub fn spawn(source: &Node, target: &Node, rng: &mut Rng, config: &FieldConfig) -> Self {
        Self::between(
            source.pos,
            target.pos,
            rng.range(config.spark_speed_min, config.spark_speed_max),
            source.color,
        )
    }

    pub fn between(from: DVec2, to: DVec2, speed: f64, color: NodeColor) -> Self {
        Self {
            origin: from,
            pos: from,
            target: to,
            speed,
            color,
            progress: 0.0,
            distance: from.distance(to),
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        if self.distance <= 0.0 {
            // Already there.
            self.progress = 1.0;
            return;
        }
        self.progress += self.speed / self.distance;
        self.pos = self.origin.lerp(self.target, self.progress.min(1.0));
    }

    pub fn arrived(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Advance and draw every spark, then retire the ones that arrived this frame.
pub fn advance_sparks(sparks: &mut Vec<Spark>, surface: &mut dyn Surface, config: &FieldConfig) {
    for spark in sparks.iter_mut() {
        spark.tick();
        surface.fill_circle(spark.pos, config.spark_radius, spark.color, config.spark_alpha);
    }
    sparks.retain(|s| !s.arrived());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::RecordingSurface;

    #[test]
    fn spawn_snapshots_source() {
        let config = FieldConfig::default();
        let mut rng = Rng::new(1);
        let a = Node::new(DVec2::new(0.0, 0.0), DVec2::ZERO, 1.0, NodeColor::Purple);
        let b = Node::new(DVec2::new(30.0, 40.0), DVec2::ZERO, 1.0, NodeColor::Green);
        let s = Spark::spawn(&a, &b, &mut rng, &config);
        assert_eq!(s.pos, a.pos);
        assert_eq!(s.target, b.pos);
        assert_eq!(s.distance, 50.0);
        assert_eq!(s.color, NodeColor::Purple);
        assert_eq!(s.progress, 0.0);
        assert!(s.speed >= 1.0 && s.speed < 2.0);
    }

    #[test]
    fn arrives_after_ceil_distance_over_speed_frames() {
        let config = FieldConfig::default();
        let mut sparks = vec![Spark::between(DVec2::ZERO, DVec2::new(40.0, 0.0), 1.5, NodeColor::Blue)];
        let mut surface = RecordingSurface::new();
        let mut frames = 0;
        let mut last_progress = 0.0;
        while !sparks.is_empty() {
            let before = sparks[0].progress;
            assert!(before >= last_progress);
            last_progress = before;
            advance_sparks(&mut sparks, &mut surface, &config);
            frames += 1;
            assert!(frames <= 100, "spark never arrived");
        }
        assert_eq!(frames, 27);
        match surface.circles().last() {
            Some(crate::renderer::recording::DrawCommand::Circle { center, .. }) => {
                assert_eq!(*center, DVec2::new(40.0, 0.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
        // Final frame still rendered
        assert_eq!(surface.circles().count(), 27);
    }

    #[test]
    fn moves_at_constant_step() {
        let mut s = Spark::between(DVec2::ZERO, DVec2::new(100.0, 0.0), 2.0, NodeColor::Blue);
        s.tick();
        assert!((s.pos.x - 2.0).abs() < 1e-9);
        s.tick();
        assert!((s.pos.x - 4.0).abs() < 1e-9);
        assert!((s.progress - 0.04).abs() < 1e-12);
    }

    #[test]
    fn zero_distance_retires_without_nan() {
        let config = FieldConfig::default();
        let p = DVec2::new(5.0, 5.0);
        let mut sparks = vec![Spark::between(p, p, 1.5, NodeColor::Green)];
        let mut surface = RecordingSurface::new();
        advance_sparks(&mut sparks, &mut surface, &config);
        assert!(sparks.is_empty());
        match &surface.commands[0] {
            crate::renderer::recording::DrawCommand::Circle { center, .. } => {
                assert_eq!(*center, p);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
