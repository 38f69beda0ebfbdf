pub mod connections;
pub mod nodes;
pub mod sparks;
