//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.
//! Screen geometry comes from [`FeedLayout`], the same layout the translator
//! hit-tests mouse clicks against.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::FeedLayout};

pub mod feed_list;
pub mod filter_panel;
pub mod search_bar;
pub mod sort_bar;
pub mod status_bar;

pub use feed_list::FeedListComponent;
pub use filter_panel::FilterPanelComponent;
pub use search_bar::SearchBarComponent;
pub use sort_bar::SortBarComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components on the feed screen
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub search_bar: SearchBarComponent,
    pub sort_bar: SortBarComponent,
    pub feed_list: FeedListComponent,
    pub status_bar: StatusBarComponent,
    pub filter_panel: FilterPanelComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen; overlays are drawn last
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = FeedLayout::new(frame.area());

        self.search_bar.view(state, frame, &layout);
        self.sort_bar.view(state, frame, &layout);
        self.feed_list.view(state, frame, layout.list);
        self.status_bar.view(state, frame, layout.status);

        self.filter_panel.view(state, frame, &layout);
        self.search_bar.view_suggestions(state, frame, &layout);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{feed::FeedMsg, filter::FilterMsg, system::SystemMsg, Msg},
            update::update,
        },
        infrastructure::config::Config,
        test_helpers::posts,
    };

    fn render(state: &AppState) -> color_eyre::eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(backend::TestBackend::new(100, 30))?;
        terminal.draw(|f| Components::new().render(f, state))?;
        let buffer = terminal.backend().buffer();
        Ok((0..30)
            .map(|y| (0..100).map(|x| buffer[(x, y)].symbol()).collect())
            .collect())
    }

    fn loaded_state() -> AppState {
        let config = Config::embedded().unwrap_or_default();
        let state = AppState::new_with_config(config);
        let (state, _) = update(Msg::System(SystemMsg::Resize(100, 30)), state);
        let (state, _) = update(Msg::Feed(FeedMsg::FetchNextPage), state);
        let generation = state.feed.generation();
        update(
            Msg::Feed(FeedMsg::PostsLoaded {
                generation,
                posts: posts(1, 3),
            }),
            state,
        )
        .0
    }

    #[test]
    fn test_screen_regions() -> color_eyre::eyre::Result<()> {
        let screen = render(&loaded_state())?;

        assert!(screen[0].starts_with("Search: "));
        assert!(screen[0].ends_with("[Filter]"));
        assert!(screen[1].contains("Date ▼"));
        assert!(screen[2].starts_with("Post number 1"));
        assert!(screen[5].starts_with("Post number 2"));
        assert!(screen[29].starts_with("3 posts | sorted by Date ▼"));
        Ok(())
    }

    #[test]
    fn test_filter_panel_overlays_list() -> color_eyre::eyre::Result<()> {
        let (state, _) = update(Msg::Filter(FilterMsg::TogglePanel), loaded_state());
        let screen = render(&state)?;

        assert_eq!(screen[1].chars().nth(60), Some('┌'));
        assert!(screen[2].contains("Impressions from"));
        assert!(screen[10].contains("[Apply]"));
        Ok(())
    }
}
