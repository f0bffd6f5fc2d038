use serde::{Deserialize, Serialize};

use crate::domain::query::PostsQuery;

/// Elm-like command definitions
/// Represents side effects (network requests, timers, rendering, logging).
/// Cmd captures application intent; `ApiOperation` in the infrastructure layer
/// captures how the request is carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Feed-related commands
    FetchPosts {
        query: PostsQuery,
        generation: u64,
    },

    // Search-related commands
    ScheduleSuggestions {
        generation: u64,
        delay_ms: u64,
    },
    FetchSuggestions {
        query: String,
        generation: u64,
    },

    /// Request a render; delivered via render_req_sender and coalesced by AppRunner
    RequestRender,

    /// Failures the user is not interrupted for
    LogError { message: String },
}

impl Cmd {
    /// Whether the command talks to the API service
    pub fn is_network(&self) -> bool {
        matches!(self, Cmd::FetchPosts { .. } | Cmd::FetchSuggestions { .. })
    }
}
