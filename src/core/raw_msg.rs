use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

use crate::domain::post::{Post, Suggestions};

/// Raw messages from external sources (input, network, timers, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Init,
    Tick,
    Resize(u16, u16),
    Quit,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),

    // Posts endpoint completions
    PostsLoaded {
        generation: u64,
        posts: Vec<Post>,
    },
    PostsFailed {
        generation: u64,
        error: String,
    },

    // Search suggestions: debounce timer and endpoint completions
    SuggestionsDue(u64),
    SuggestionsLoaded {
        generation: u64,
        suggestions: Suggestions,
    },
    SuggestionsFailed {
        generation: u64,
        error: String,
    },

    // Update cycle failures reported by the runner
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick)
    }
}
