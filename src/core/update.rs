use ratatui::prelude::Rect;

use crate::{
    core::{
        cmd::Cmd,
        msg::{feed::FeedMsg, filter::FilterMsg, search::SearchMsg, system::SystemMsg, Msg},
        state::AppState,
    },
    domain::query::{FilterKey, Filters},
    presentation::layout::FeedLayout,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(SystemMsg::Resize(width, height)) => {
            let mut commands = state.system.update(SystemMsg::Resize(width, height));
            let list_height = FeedLayout::new(Rect::new(0, 0, width, height)).list_height();
            commands.extend(state.feed.update(FeedMsg::SetViewportHeight(list_height)));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Feed messages (delegated to FeedState)
        Msg::Feed(feed_msg) => {
            let commands = state.feed.update(feed_msg);
            (state, commands)
        }

        // Submit and Clear span the panel, the feed and the status line
        Msg::Filter(FilterMsg::Submit) => {
            let (filters, rejected) = state.filter.collect();
            state.filter.hide();
            if rejected.is_empty() {
                state.system.update(SystemMsg::ClearStatusMessage);
            } else {
                state.system.update(SystemMsg::UpdateStatusMessage(format!(
                    "Ignored invalid filter: {}",
                    rejected_labels(&rejected)
                )));
            }
            let commands = state.feed.update(FeedMsg::ApplyFilters(filters));
            (state, commands)
        }

        Msg::Filter(FilterMsg::Clear) => {
            state.filter.clear_inputs();
            state.filter.hide();
            let commands = state.feed.update(FeedMsg::ApplyFilters(Filters::new()));
            (state, commands)
        }

        // Filter panel messages (delegated to FilterPanelState)
        Msg::Filter(filter_msg) => {
            let commands = state.filter.update(filter_msg);
            (state, commands)
        }

        Msg::Search(SearchMsg::OpenSelected) => {
            if let Some(link) = state.search.selected().map(|s| s.link()) {
                state.system.update(SystemMsg::UpdateStatusMessage(link));
                state.search.update(SearchMsg::Deactivate);
            }
            (state, vec![])
        }

        // Search messages (delegated to SearchState)
        Msg::Search(search_msg) => {
            let commands = state.search.update(search_msg);
            (state, commands)
        }

        Msg::OpenSelectedPost => {
            if let Some(url) = state.selected_post().map(|post| state.post_url(post)) {
                state.system.update(SystemMsg::UpdateStatusMessage(url));
            }
            (state, vec![])
        }
    }
}

fn rejected_labels(keys: &[FilterKey]) -> String {
    keys.iter()
        .map(|key| key.label())
        .collect::<Vec<_>>()
        .join(", ")
}
