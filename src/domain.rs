//! Domain logic
//!
//! This module contains domain types shared by every layer:
//! - Posts and search suggestions as returned by the API
//! - Feed query building (sort, filters, offset/limit paging)
//! - Viewport geometry for infinite scrolling
//! - Text processing utilities

pub mod post;
pub mod query;
pub mod text;
pub mod viewport;
