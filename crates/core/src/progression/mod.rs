//! Experience, tier, and achievement computation.
//!
//! Translates financial state into a gamified score. Stateless free
//! functions: everything is derived per call from the figures passed in.

pub mod engine;
pub mod types;

pub use engine::{achievements, evaluate, experience};
pub use types::{Badge, Progression, Tier};
