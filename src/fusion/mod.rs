//! Fusion pipeline: concurrent channel fan-out, ranking, and synthesis.

pub mod engine;
pub mod ranking;
pub mod synthesis;

pub use engine::FusionEngine;
