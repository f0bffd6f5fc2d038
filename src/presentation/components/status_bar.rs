//! Status bar component
//!
//! Shows the last status message, or a summary of the feed when there is none.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let line = Paragraph::new(self.text(state)).style(Style::default().bg(Color::Black));
        frame.render_widget(line, area);
    }

    /// Pure function computing the status line for `state`
    pub fn text(&self, state: &AppState) -> String {
        if let Some(message) = state.system.status_message() {
            return message.clone();
        }

        let feed = &state.feed;
        let sort = feed.sort();
        let mut summary = format!(
            "{} posts | sorted by {} {}",
            feed.len(),
            sort.column.label(),
            sort.order.arrow()
        );
        if !feed.filters().is_empty() {
            summary.push_str(&format!(" | {} filters", feed.filters().len()));
        }
        if feed.is_loading() {
            summary.push_str(" | loading...");
        }
        summary
    }
}
