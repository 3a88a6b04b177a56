//! Small helpers shared across modules

pub mod file;
pub mod parsing;
