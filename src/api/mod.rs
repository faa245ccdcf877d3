//! Roster API server module
//!
//! HTTP REST surface over the sheet reformatter.
//! Run with `rosterfmt serve`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
