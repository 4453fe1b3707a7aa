//! Utility functions for the command-line layer.
//!
//! ## Modules
//!
//! - [`app_data`] - Config file location and loading
//! - [`logging`] - `tracing` subscriber setup

pub mod app_data;
pub mod logging;

pub use app_data::*;
