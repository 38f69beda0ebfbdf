use serde::{Deserialize, Serialize};

/// Tunable constants for the particle field.
///
/// Every field has a default, so a JSON override only needs to list the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Viewport pixels per node (node count = floor(area / this)).
    pub area_per_node: f64,
    /// Connection threshold = min(width, height) / this.
    pub connection_divisor: f64,
    /// Maximum opacity of a connection at zero distance.
    pub connection_max_alpha: f64,
    /// Stroke width for connections.
    pub line_width: f64,

    /// Initial velocity components are drawn from [-v, v].
    pub initial_speed: f64,
    /// Node radius range [min, max].
    pub radius_min: f64,
    pub radius_max: f64,
    /// Hard cap on node speed, in units per frame.
    pub max_speed: f64,
    /// Alpha used when filling nodes.
    pub node_alpha: f64,

    /// Nodes closer than this to the pointer are pushed away.
    pub repulsion_radius: f64,
    /// Impulse = (radius - distance) / divisor.
    pub repulsion_divisor: f64,

    /// Maximum number of live sparks.
    pub max_sparks: usize,
    /// Connections whose midpoint is closer than this to the pointer may emit.
    pub spark_trigger_radius: f64,
    /// Per-connection, per-frame emission probability.
    pub spark_chance: f64,
    /// Spark speed range [min, max).
    pub spark_speed_min: f64,
    pub spark_speed_max: f64,
    pub spark_radius: f64,
    pub spark_alpha: f64,

    /// Minimum time between rendered frames, in milliseconds.
    pub frame_interval_ms: f64,
    /// Fixed RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_node: 20000.0,
            connection_divisor: 4.0,
            connection_max_alpha: 0.5,
            line_width: 0.7,
            initial_speed: 0.25,
            radius_min: 1.0,
            radius_max: 2.5,
            max_speed: 2.0,
            node_alpha: 0.7,
            repulsion_radius: 80.0,
            repulsion_divisor: 2000.0,
            max_sparks: 20,
            spark_trigger_radius: 100.0,
            spark_chance: 0.02,
            spark_speed_min: 1.0,
            spark_speed_max: 2.0,
            spark_radius: 1.5,
            spark_alpha: 0.8,
            frame_interval_ms: 16.67,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{ "max_sparks": 5, "seed": 1234 }"#;
        let config = FieldConfig::from_json(json).unwrap();
        assert_eq!(config.max_sparks, 5);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.area_per_node, 20000.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{ max_sparks: }").is_err());
    }
}
