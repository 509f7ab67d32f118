//! Shared utilities: environment parsing, logger setup and identifier checks.

pub mod config;
pub mod ids;
pub mod logger;
