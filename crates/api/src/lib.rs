//! Data models shared between the analysis core, the protocol adapter and the CLI.

pub mod models;

pub use models::*;
