//! Conformance validators.

pub mod engine;
pub mod output;
