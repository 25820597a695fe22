//! CLI library components for the trade mapper.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
