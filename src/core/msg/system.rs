use serde::{Deserialize, Serialize};

/// Terminal lifecycle and status line messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    /// New terminal size in columns and rows
    Resize(u16, u16),

    UpdateStatusMessage(String),
    ClearStatusMessage,
    /// Logged, and shown in the status line prefixed with "Error: "
    ShowError(String),
}
