//! Built-in source documents used by the engine conformance checks.

pub mod fixtures;
