use serde::{Deserialize, Serialize};

use crate::domain::post::Suggestions;

/// Messages specific to SearchState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchMsg {
    // Focus
    Activate,
    Deactivate,

    // Editing
    Input(char),
    Backspace,

    // Debounce timer fired for the given edit generation
    Due(u64),

    // Fetch completions
    Loaded {
        generation: u64,
        suggestions: Suggestions,
    },
    Failed {
        generation: u64,
        error: String,
    },

    // Dropdown navigation
    SelectNext,
    SelectPrev,
    Select(usize),
    OpenSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_msg_serialization() -> serde_json::Result<()> {
        let msg = SearchMsg::Loaded {
            generation: 2,
            suggestions: Suggestions::default(),
        };
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SearchMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
