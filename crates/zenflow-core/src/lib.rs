//! zenflow-core
//!
//! Pure domain types, REST path conventions and record statistics.
//! No I/O. This is the shared vocabulary of the ZenFlow client.

pub mod endpoints;
pub mod error;
pub mod models;
pub mod stats;
