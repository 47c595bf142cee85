//! CLI command implementations

pub mod estimate;
