#![deny(unsafe_code)]

//! Mapping execution: raw record + mapping config -> record in target field names.

pub mod engine;
pub mod report;

pub use engine::{execute, execute_with_report};
pub use report::ExecutionReport;
