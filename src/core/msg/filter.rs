use serde::{Deserialize, Serialize};

use crate::domain::query::FilterKey;

/// Messages specific to the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMsg {
    // Visibility
    TogglePanel,
    ClosePanel,

    // Field focus
    Focus(FilterKey),
    FocusNext,
    FocusPrev,

    // Editing the focused field
    Input(char),
    Backspace,

    // Form actions
    Submit,
    Clear,
}
