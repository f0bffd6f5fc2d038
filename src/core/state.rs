pub mod feed;
pub mod filter;
pub mod search;
pub mod system;

use crate::{domain::post::Post, infrastructure::config::Config};

pub use feed::FeedState;
pub use filter::FilterPanelState;
pub use search::SearchState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub feed: FeedState,
    pub filter: FilterPanelState,
    pub search: SearchState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the feed and search sized from config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            feed: FeedState::new(config.feed.page_size, config.feed.scroll_threshold),
            search: SearchState::new(config.search.debounce_ms),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Get the selected post in the feed
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.selected_post()
    }

    /// Absolute URL of a post on the configured site
    pub fn post_url(&self, post: &Post) -> String {
        format!(
            "{}{}",
            self.config.config.api.base_url.trim_end_matches('/'),
            post.link()
        )
    }
}
