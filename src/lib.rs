// ABOUTME: Library root for slipway - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod notify;
pub mod output;
pub mod release;
pub mod remote;
pub mod types;
