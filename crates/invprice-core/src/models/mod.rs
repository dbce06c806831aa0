//! Data models shared across the library and CLI.

pub mod config;
pub mod report;
