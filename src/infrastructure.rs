//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - HTTP client for the posts API
//! - Asynchronous request processing (ApiService)
//! - CLI argument processing
//! - Configuration loading
//! - TUI foundation

pub mod api;
pub mod api_service;
pub mod cli;
pub mod config;
pub mod tui;
