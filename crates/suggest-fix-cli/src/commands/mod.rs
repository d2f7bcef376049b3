//! CLI command implementations.

pub mod batch;
pub mod fix;
pub mod rules;
