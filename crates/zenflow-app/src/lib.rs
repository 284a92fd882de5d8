//! zenflow-app library root.
//!
//! Session context, navigation rules and screen controllers. The `zenflow`
//! binary drives these from the terminal; integration tests drive them
//! directly against fake backends.

pub mod config;
pub mod controllers;
pub mod error;
pub mod navigation;
pub mod render;
pub mod scope;
pub mod session;
pub mod terminal;
