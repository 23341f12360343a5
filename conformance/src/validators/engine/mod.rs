//! Engine self-checks against the built-in fixtures.

pub mod fixtures;
