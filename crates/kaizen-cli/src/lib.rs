//! Command-line shell for the productivity & Kaizen metrics engine.

pub mod cli;
pub mod commands;
pub mod logging;
