use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::query::{Sort, SortColumn},
    presentation::layout::{FeedLayout, SORT_COLUMNS},
};

/// Row of sort buttons; the active column carries the order arrow
#[derive(Debug, Clone, Default)]
pub struct SortBarComponent;

impl SortBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &FeedLayout) {
        let sort = state.feed.sort();
        for (column, area) in SORT_COLUMNS.iter().zip(layout.sort_buttons) {
            let style = if sort.column == *column {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(Paragraph::new(Self::label(sort, *column)).style(style), area);
        }
    }

    pub fn label(sort: Sort, column: SortColumn) -> String {
        if sort.column == column {
            format!("{} {}", column.label(), sort.order.arrow())
        } else {
            column.label().to_string()
        }
    }
}
