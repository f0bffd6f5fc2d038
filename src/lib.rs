//! # Postfeed - Post analytics feed TUI
//!
//! A terminal client for a post analytics server, built with Rust and Ratatui.
//! Posts are paged in as the list scrolls, sorted by any counter column and
//! narrowed with range filters; a debounced search box suggests topics and posts.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (HTTP requests, timers, rendering)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use postfeed::{
//!     core::{msg::{feed::FeedMsg, Msg}, state::AppState, update::update, cmd::Cmd},
//!     infrastructure::config::Config,
//! };
//!
//! let state = AppState::new_with_config(Config::default());
//!
//! // The first page is requested with offset 0
//! let (state, commands) = update(Msg::Feed(FeedMsg::FetchNextPage), state);
//! assert!(state.feed.is_loading());
//! assert!(matches!(&commands[0], Cmd::FetchPosts { query, .. } if query.offset == 0));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Posts, queries and text helpers
//! - [`infrastructure`] - HTTP API, configuration, CLI and terminal
//! - [`integration`] - Runtime and the main loop
//! - [`presentation`] - Layout, components and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

#[cfg(test)]
mod test_helpers;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
