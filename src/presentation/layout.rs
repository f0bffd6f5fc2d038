//! Screen geometry shared by rendering and mouse hit-testing
//!
//! ```text
//! Search: ...                               [Filter]
//! Impressions   Likes   Comments   Date ▼
//! <post list>
//! <status line>
//! ```

use ratatui::prelude::*;

use crate::domain::query::{FilterKey, SortColumn};

pub use crate::core::state::search::MAX_SUGGESTIONS as MAX_VISIBLE_SUGGESTIONS;

pub const FILTER_BUTTON_LABEL: &str = "[Filter]";
pub const APPLY_BUTTON_LABEL: &str = "[Apply]";
pub const CLEAR_BUTTON_LABEL: &str = "[Clear]";

pub const SORT_COLUMNS: [SortColumn; 4] = [
    SortColumn::Impressions,
    SortColumn::Likes,
    SortColumn::Comments,
    SortColumn::PostDatetime,
];

const FILTER_PANEL_WIDTH: u16 = 40;
// Borders, one row per field and the button row
const FILTER_PANEL_HEIGHT: u16 = FilterKey::ALL.len() as u16 + 3;
const SUGGESTIONS_WIDTH: u16 = 50;

/// Result of hit-testing a click on the feed screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Search,
    FilterButton,
    SortButton(SortColumn),
    FilterField(FilterKey),
    ApplyButton,
    ClearButton,
    /// Inside the filter panel but not on a control
    FilterPanel,
    Suggestion(usize),
    List,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLayout {
    pub search: Rect,
    pub filter_button: Rect,
    pub sort_bar: Rect,
    pub sort_buttons: [Rect; 4],
    pub list: Rect,
    pub status: Rect,
    pub filter_panel: Rect,
    pub apply_button: Rect,
    pub clear_button: Rect,
}

impl FeedLayout {
    pub fn new(area: Rect) -> Self {
        let [header, sort_bar, list, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [search, filter_button] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(FILTER_BUTTON_LABEL.len() as u16),
        ])
        .areas(header);

        let sort_buttons = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(sort_bar);

        let panel_width = FILTER_PANEL_WIDTH.min(area.width);
        let filter_panel = Rect {
            x: area.right().saturating_sub(panel_width),
            y: header.bottom(),
            width: panel_width,
            height: FILTER_PANEL_HEIGHT.min(area.height.saturating_sub(header.height)),
        };
        let button_row = filter_panel.bottom().saturating_sub(2);
        let apply_button = Rect {
            x: filter_panel.x + 2,
            y: button_row,
            width: APPLY_BUTTON_LABEL.len() as u16,
            height: 1,
        }
        .intersection(filter_panel);
        let clear_button = Rect {
            x: apply_button.right() + 2,
            y: button_row,
            width: CLEAR_BUTTON_LABEL.len() as u16,
            height: 1,
        }
        .intersection(filter_panel);

        Self {
            search,
            filter_button,
            sort_bar,
            sort_buttons,
            list,
            status,
            filter_panel,
            apply_button,
            clear_button,
        }
    }

    /// Rows available to the post list
    pub fn list_height(&self) -> usize {
        self.list.height as usize
    }

    /// Row of a filter field inside the panel
    pub fn filter_field(&self, key: FilterKey) -> Rect {
        let inner = self.filter_panel.inner(Margin::new(1, 1));
        Rect {
            y: inner.y + key.index() as u16,
            height: 1,
            ..inner
        }
        .intersection(self.filter_panel)
    }

    /// Dropdown below the search box, sized for `count` suggestions
    pub fn suggestions(&self, count: usize) -> Rect {
        let rows = count.min(MAX_VISIBLE_SUGGESTIONS) as u16 + 2;
        Rect {
            x: self.search.x,
            y: self.search.bottom(),
            width: SUGGESTIONS_WIDTH.min(self.search.width),
            height: rows.min(self.list.bottom().saturating_sub(self.search.bottom())),
        }
    }

    /// What a click at (`column`, `row`) lands on, given which overlays are open
    pub fn hit(
        &self,
        column: u16,
        row: u16,
        panel_visible: bool,
        suggestion_count: usize,
    ) -> Option<Hit> {
        let pos = Position::new(column, row);

        if suggestion_count > 0 {
            let dropdown = self.suggestions(suggestion_count);
            if dropdown.contains(pos) {
                let inner = dropdown.inner(Margin::new(1, 1));
                if inner.contains(pos) {
                    let index = (row - inner.y) as usize;
                    if index < suggestion_count {
                        return Some(Hit::Suggestion(index));
                    }
                }
                return None;
            }
        }

        if panel_visible && self.filter_panel.contains(pos) {
            if self.apply_button.contains(pos) {
                return Some(Hit::ApplyButton);
            }
            if self.clear_button.contains(pos) {
                return Some(Hit::ClearButton);
            }
            let field = FilterKey::ALL
                .into_iter()
                .find(|key| self.filter_field(*key).contains(pos));
            return Some(field.map_or(Hit::FilterPanel, Hit::FilterField));
        }

        if self.filter_button.contains(pos) {
            return Some(Hit::FilterButton);
        }
        if self.search.contains(pos) {
            return Some(Hit::Search);
        }
        if let Some(i) = self.sort_buttons.iter().position(|r| r.contains(pos)) {
            return Some(Hit::SortButton(SORT_COLUMNS[i]));
        }
        if self.list.contains(pos) {
            return Some(Hit::List);
        }
        if self.status.contains(pos) {
            return Some(Hit::Status);
        }
        None
    }
}
