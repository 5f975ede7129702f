//! CLI command implementations

pub mod branches;
pub mod generate;
pub mod programs;
pub mod scales;
