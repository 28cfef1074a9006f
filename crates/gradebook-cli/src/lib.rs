//! Library components for the gradebook CLI.

pub mod config;
pub mod logging;
