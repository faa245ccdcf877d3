//! CLI command handlers

pub mod commands;

pub use commands::{reformat_file, serve, sheets};
