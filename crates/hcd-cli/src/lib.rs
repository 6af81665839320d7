//! CLI library components for the directory search tool.

pub mod logging;
pub mod session;
