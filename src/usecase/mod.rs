//! Usecase layer: flattening and the per-profile listing workflow.

pub mod flatten;
pub mod list;
pub mod stats;
