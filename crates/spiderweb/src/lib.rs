//! Headless core of the spider-web canvas background: a small 2D particle
//! field of drifting nodes, fading connections and pointer-driven sparks.
//!
//! Rendering goes through the [`Surface`] trait so the simulation runs
//! without a browser. The `spiderweb-web` crate provides the canvas backend
//! and the animation loop.

pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::animator::Animator;
pub use api::config::FieldConfig;
pub use api::error::InitError;
pub use api::types::NodeColor;
pub use core::context::SimContext;
pub use core::rng::Rng;
pub use core::time::FrameThrottle;
pub use core::viewport::{FieldParams, Viewport};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::{DrawCommand, RecordingSurface, Surface};
pub use systems::connections::{connect_and_advance, connection_opacity};
pub use systems::nodes::{advance_node, create_nodes, draw_nodes, repulsion, Node};
pub use systems::sparks::{advance_sparks, Spark};
