//! Feed list component
//!
//! Renders the window of posts selected by the feed's scroll offset.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{feed::POST_ITEM_HEIGHT, AppState},
    presentation::widgets::post_item::PostItem,
};

#[derive(Debug, Clone, Default)]
pub struct FeedListComponent;

impl FeedListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }

        let feed = &state.feed;
        if feed.is_empty() {
            let text = if feed.is_loading() {
                "Loading posts..."
            } else {
                "No posts"
            };
            let placeholder = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        }

        frame.render_widget(Paragraph::new(self.visible_lines(state, area)), area);
    }

    /// Lines of the posts intersecting the viewport, starting at the scroll offset
    pub fn visible_lines(&self, state: &AppState, area: Rect) -> Vec<Line<'static>> {
        let feed = &state.feed;
        let first = feed.scroll_top() / POST_ITEM_HEIGHT;
        let skip = feed.scroll_top() % POST_ITEM_HEIGHT;
        let count = area.height as usize / POST_ITEM_HEIGHT + 2;

        feed.posts()
            .iter()
            .enumerate()
            .skip(first)
            .take(count)
            .flat_map(|(i, post)| {
                PostItem::new(post)
                    .highlight(feed.selected_index() == Some(i))
                    .lines(area.width)
            })
            .skip(skip)
            .take(area.height as usize)
            .collect()
    }
}
