//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering the feed screen
//! - Screen layout shared with mouse hit-testing
//! - Reusable widgets
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
