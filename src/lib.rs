pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod output;
pub mod similarity;

pub use error::{QualMetricsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
