pub mod animator;
pub mod config;
pub mod error;
pub mod types;
