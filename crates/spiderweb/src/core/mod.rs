pub mod context;
pub mod rng;
pub mod time;
pub mod viewport;
