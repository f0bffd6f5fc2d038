use serde::{Deserialize, Serialize};

pub mod feed;
pub mod filter;
pub mod search;
pub mod system;

use feed::FeedMsg;
use filter::FilterMsg;
use search::SearchMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Feed paging, sorting and scrolling (delegated to FeedState)
    Feed(FeedMsg),

    // Filter panel (coordinated between FilterPanelState and FeedState)
    Filter(FilterMsg),

    // Search box and suggestion dropdown (delegated to SearchState)
    Search(SearchMsg),

    // Show the link of the selected post in the status bar
    OpenSelectedPost,
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Feed(feed_msg) => feed_msg.is_frequent(),
            _ => false,
        }
    }
}
