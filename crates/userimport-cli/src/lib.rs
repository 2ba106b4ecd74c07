//! CLI library components for the user import preparation tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod prompt;
pub mod summary;
