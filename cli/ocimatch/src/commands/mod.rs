//! CLI command implementations.

pub mod check;
pub mod host;
pub mod parse;
