//! Integration layer
//!
//! This module wires the Elm core to the terminal and the API:
//! - Runtime (message queues, update cycle, command execution)
//! - Render coalescing
//! - The main loop

pub mod app_runner;
pub mod coalescer;
pub mod runtime;
