//! Domain layer: pure, synchronous types and rules.

pub mod error;
pub mod model;
pub mod platform;
pub mod traits;
