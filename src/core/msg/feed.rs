use serde::{Deserialize, Serialize};

use crate::domain::{
    post::Post,
    query::{Filters, SortColumn},
};

/// Messages specific to FeedState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedMsg {
    // Unconditional page load (initial load)
    FetchNextPage,

    // Scroll operations; each one may trigger the next page near the bottom
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,

    // Query changes restart paging from offset 0
    Sort(SortColumn),
    ApplyFilters(Filters),

    // Fetch completions, tagged with the generation they were issued in
    PostsLoaded { generation: u64, posts: Vec<Post> },
    PostsFailed { generation: u64, error: String },

    // Height of the list area, in the same units as the scroll threshold
    SetViewportHeight(usize),
}

impl FeedMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            FeedMsg::ScrollUp | FeedMsg::ScrollDown | FeedMsg::SetViewportHeight(_)
        )
    }
}
