//! Reusable UI widgets
//!
//! Building blocks rendered by the components.

pub mod post_item;
pub mod post_stats;
