//! Validators for a generated output directory.

pub mod clauses;
pub mod partitions;
pub mod prolog;
